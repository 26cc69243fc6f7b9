use std::fmt;
use thiserror::Error;

/// Which fixed-size collection a dimension check was performed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorKind {
    Travel,
    Joint,
    Steps,
    Axes,
    Motors,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorKind::Travel => "travel vector",
            VectorKind::Joint => "joint vector",
            VectorKind::Steps => "step vector",
            VectorKind::Axes => "axis set",
            VectorKind::Motors => "motor set",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The geometry's inverse map has no solution for the requested travel.
    #[error("{geometry} kinematics cannot reach the requested pose: {reason}")]
    UnreachablePose {
        geometry: &'static str,
        reason: String,
    },
    /// The geometry cannot be built from the supplied configuration.
    #[error("invalid {geometry} geometry: {reason}")]
    InvalidGeometry {
        geometry: &'static str,
        reason: String,
    },
    #[error("motor {motor} is mapped to axis {axis}, but only {axes} axes are configured")]
    InvalidMotorMapping {
        motor: usize,
        axis: usize,
        axes: usize,
    },
    #[error("{kind} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        kind: VectorKind,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
