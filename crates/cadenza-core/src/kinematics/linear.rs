// Generic linear kinematics

use crate::{
    error::{Error, Result},
    kinematics::Kinematics,
    vector::{JointVector, TravelVector},
};
use std::time::Duration;

pub(crate) const NAME: &str = "linear";

/// Linear geometry with an arbitrary coefficient matrix.
///
/// `joint[i] = sum(matrix[i][k] * travel[k])`. The identity matrix is a
/// cartesian machine; `[[1, 1], [1, -1]]` is CoreXY.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearKinematics<const A: usize> {
    matrix: [[f64; A]; A],
}

impl<const A: usize> LinearKinematics<A> {
    pub fn new(matrix: [[f64; A]; A]) -> Self {
        Self { matrix }
    }

    /// Build from a configured matrix, rejecting non-finite coefficients.
    ///
    /// An `inf` or `NaN` coefficient turns even zero travel into `NaN`.
    pub fn try_new(matrix: [[f64; A]; A]) -> Result<Self> {
        for (i, row) in matrix.iter().enumerate() {
            for (k, c) in row.iter().enumerate() {
                if !c.is_finite() {
                    return Err(Error::InvalidGeometry {
                        geometry: NAME,
                        reason: format!("coefficient [{i}][{k}] is {c}"),
                    });
                }
            }
        }
        Ok(Self::new(matrix))
    }

    pub fn identity() -> Self {
        let mut matrix = [[0.0; A]; A];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { matrix }
    }

    pub fn matrix(&self) -> &[[f64; A]; A] {
        &self.matrix
    }
}

impl<const A: usize> Kinematics<A> for LinearKinematics<A> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn transform(&self, travel: &TravelVector<A>, _duration: Duration) -> Result<JointVector<A>> {
        let mut joint = [0.0; A];
        for (i, (value, row)) in joint.iter_mut().zip(&self.matrix).enumerate() {
            *value = row.iter().zip(travel.iter()).map(|(c, t)| c * t).sum();
            if !value.is_finite() {
                return Err(Error::UnreachablePose {
                    geometry: NAME,
                    reason: format!("joint {i} evaluates to {value}"),
                });
            }
        }
        Ok(JointVector::new(joint))
    }
}
