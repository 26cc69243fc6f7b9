// Kinematics geometries: travel space -> joint space

use crate::{
    error::{Error, Result, VectorKind},
    vector::{JointVector, TravelVector},
};
use std::time::Duration;

// Submodules for each kinematics system
pub mod cartesian;
pub mod corexy;
pub mod linear;

pub use cartesian::Cartesian;
pub use corexy::{CorePlane, CoreXY};
pub use linear::LinearKinematics;

/// Inverse kinematics for one machine geometry.
///
/// Implementations must be pure: the same travel and duration always
/// produce the same joint vector, and no state is carried between calls.
/// Zero travel on every axis must yield zero joint displacement. A
/// geometry whose inverse is multi-valued has to pick one branch
/// deterministically, and one that has no solution for the requested
/// travel returns [`Error::UnreachablePose`] instead of clamping.
///
/// `travel` is relative to the start of the segment. `duration` is the
/// time allotted to the segment, for geometries whose coupling depends on
/// velocity.
pub trait Kinematics<const A: usize>: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(&self, travel: &TravelVector<A>, duration: Duration) -> Result<JointVector<A>>;
}

impl<const A: usize, K: Kinematics<A> + ?Sized> Kinematics<A> for Box<K> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, travel: &TravelVector<A>, duration: Duration) -> Result<JointVector<A>> {
        (**self).transform(travel, duration)
    }
}

impl<const A: usize, K: Kinematics<A> + ?Sized> Kinematics<A> for std::sync::Arc<K> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, travel: &TravelVector<A>, duration: Duration) -> Result<JointVector<A>> {
        (**self).transform(travel, duration)
    }
}

/// Geometry selection, resolved once when the machine is configured.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Geometry {
    #[default]
    Cartesian,
    CoreXy,
    CoreXz,
    /// Row-major `A x A` coefficient matrix.
    Linear(Vec<Vec<f64>>),
}

impl Geometry {
    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Cartesian => cartesian::NAME,
            Geometry::CoreXy => CorePlane::Xy.name(),
            Geometry::CoreXz => CorePlane::Xz.name(),
            Geometry::Linear(_) => linear::NAME,
        }
    }

    /// Build the strategy object for `A` axes.
    pub fn build<const A: usize>(&self) -> Result<Box<dyn Kinematics<A>>> {
        let kin: Box<dyn Kinematics<A>> = match self {
            Geometry::Cartesian => Box::new(Cartesian),
            Geometry::CoreXy => Box::new(CoreXY::for_axes::<A>(CorePlane::Xy)?),
            Geometry::CoreXz => Box::new(CoreXY::for_axes::<A>(CorePlane::Xz)?),
            Geometry::Linear(rows) => {
                if rows.len() != A {
                    return Err(Error::DimensionMismatch {
                        kind: VectorKind::Axes,
                        expected: A,
                        actual: rows.len(),
                    });
                }
                let mut matrix = [[0.0; A]; A];
                for (dst, row) in matrix.iter_mut().zip(rows) {
                    *dst = <[f64; A]>::try_from(row.as_slice()).map_err(|_| {
                        Error::DimensionMismatch {
                            kind: VectorKind::Axes,
                            expected: A,
                            actual: row.len(),
                        }
                    })?;
                }
                Box::new(LinearKinematics::try_new(matrix)?)
            }
        };
        tracing::debug!(geometry = kin.name(), axes = A, "built kinematics");
        Ok(kin)
    }
}
