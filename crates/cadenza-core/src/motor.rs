//! Physical motor channel configuration.

use crate::error::{Error, Result, VectorKind};

/// One motor channel: which logical axis drives it and how many
/// (fractional) steps one unit of joint travel produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorConfig {
    /// Index of the logical axis driving this motor.
    pub axis: usize,
    pub steps_per_unit: f64,
}

impl MotorConfig {
    pub const fn new(axis: usize, steps_per_unit: f64) -> Self {
        Self {
            axis,
            steps_per_unit,
        }
    }

    /// Derive the scale from the drive train: full steps per revolution
    /// (from `step_angle` in degrees), times `microsteps`, divided by the
    /// joint travel produced by one revolution.
    pub fn from_drive(axis: usize, step_angle: f64, microsteps: u16, travel_per_rev: f64) -> Self {
        let steps_per_rev = 360.0 / step_angle * f64::from(microsteps);
        Self::new(axis, steps_per_rev / travel_per_rev)
    }
}

/// Configuration for `M` motor channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorSet<const M: usize> {
    motors: [MotorConfig; M],
}

impl<const M: usize> MotorSet<M> {
    pub const fn new(motors: [MotorConfig; M]) -> Self {
        Self { motors }
    }

    pub fn from_slice(motors: &[MotorConfig]) -> Result<Self> {
        let motors =
            <[MotorConfig; M]>::try_from(motors).map_err(|_| Error::DimensionMismatch {
                kind: VectorKind::Motors,
                expected: M,
                actual: motors.len(),
            })?;
        Ok(Self { motors })
    }

    pub fn get(&self, index: usize) -> Option<&MotorConfig> {
        self.motors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MotorConfig> {
        self.motors.iter()
    }

    pub const fn as_array(&self) -> &[MotorConfig; M] {
        &self.motors
    }

    pub const fn len(&self) -> usize {
        M
    }

    pub const fn is_empty(&self) -> bool {
        M == 0
    }
}
