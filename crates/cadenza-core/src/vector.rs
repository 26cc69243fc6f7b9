//! Fixed-size per-segment vectors.
//!
//! All three vectors are stack arrays sized by const generics so a
//! conversion never touches the heap.

use crate::error::{Error, Result, VectorKind};
use std::ops::Index;

macro_rules! fixed_vector {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<const N: usize>([f64; N]);

        impl<const N: usize> $name<N> {
            pub const fn new(values: [f64; N]) -> Self {
                Self(values)
            }

            pub const fn zero() -> Self {
                Self([0.0; N])
            }

            pub const fn as_array(&self) -> &[f64; N] {
                &self.0
            }

            pub const fn into_inner(self) -> [f64; N] {
                self.0
            }

            pub const fn len(&self) -> usize {
                N
            }

            pub const fn is_empty(&self) -> bool {
                N == 0
            }

            pub fn iter(&self) -> std::slice::Iter<'_, f64> {
                self.0.iter()
            }
        }

        impl<const N: usize> Default for $name<N> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<const N: usize> From<[f64; N]> for $name<N> {
            fn from(values: [f64; N]) -> Self {
                Self(values)
            }
        }

        impl<const N: usize> TryFrom<&[f64]> for $name<N> {
            type Error = Error;

            fn try_from(values: &[f64]) -> Result<Self> {
                let values = <[f64; N]>::try_from(values).map_err(|_| Error::DimensionMismatch {
                    kind: $kind,
                    expected: N,
                    actual: values.len(),
                })?;
                Ok(Self(values))
            }
        }

        impl<const N: usize> Index<usize> for $name<N> {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                &self.0[index]
            }
        }

        impl<const N: usize> AsRef<[f64]> for $name<N> {
            fn as_ref(&self) -> &[f64] {
                &self.0
            }
        }
    };
}

fixed_vector!(
    /// Relative displacement requested for one segment, one entry per
    /// logical axis, in machine length units.
    TravelVector,
    VectorKind::Travel
);

fixed_vector!(
    /// Travel expressed in the coordinate space of the machine's actuators.
    JointVector,
    VectorKind::Joint
);

fixed_vector!(
    /// Fractional step counts, one entry per motor channel.
    ///
    /// Values are never rounded here; the step generator accumulates the
    /// fractional part in fixed point.
    StepVector,
    VectorKind::Steps
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_slice_checks_length() {
        let travel = TravelVector::<3>::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(travel.as_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(travel[1], 2.0);

        let err = TravelVector::<3>::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                kind: VectorKind::Travel,
                expected: 3,
                actual: 2,
            }
        );

        let err = StepVector::<4>::try_from(&[0.0; 5][..]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                kind: VectorKind::Steps,
                expected: 4,
                actual: 5,
            }
        ));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(JointVector::<6>::default(), JointVector::new([0.0; 6]));
        assert_eq!(JointVector::<6>::zero().len(), 6);
    }
}
