//! Joint space to motor steps.
//!
//! Each motor channel takes its value from exactly one logical axis and
//! scales it by its steps-per-unit. Several channels may share an axis
//! (ganged motors). An inhibited axis contributes exactly zero to every
//! channel mapped to it, whatever the requested travel.
//!
//! Steps are left fractional: the downstream step generator carries the
//! remainder in fixed point, so rounding here would accumulate error
//! segment after segment.

use crate::{
    axis::AxisSet,
    error::{Error, Result},
    motor::{MotorConfig, MotorSet},
    vector::{JointVector, StepVector},
};

fn check_motor<const A: usize>(index: usize, motor: &MotorConfig) -> Result<()> {
    if motor.axis < A {
        Ok(())
    } else {
        Err(Error::InvalidMotorMapping {
            motor: index,
            axis: motor.axis,
            axes: A,
        })
    }
}

#[inline]
fn motor_steps<const A: usize>(
    joint: &JointVector<A>,
    axes: &AxisSet<A>,
    motor: &MotorConfig,
) -> f64 {
    if axes.is_inhibited(motor.axis) {
        0.0
    } else {
        joint[motor.axis] * motor.steps_per_unit
    }
}

/// Map a joint vector onto motor channels in one pass.
///
/// Every motor's axis index is checked before any step is computed, so an
/// invalid mapping never yields a partially filled vector.
pub fn map_to_steps<const A: usize, const M: usize>(
    joint: &JointVector<A>,
    axes: &AxisSet<A>,
    motors: &MotorSet<M>,
) -> Result<StepVector<M>> {
    for (index, motor) in motors.iter().enumerate() {
        check_motor::<A>(index, motor)?;
    }

    let mut steps = [0.0; M];
    for (value, motor) in steps.iter_mut().zip(motors.iter()) {
        *value = motor_steps(joint, axes, motor);
    }
    Ok(StepVector::new(steps))
}

/// Motor table whose axis indices have been validated up front.
///
/// Mapping through a `MotorMapper` cannot fail and runs in O(`M`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorMapper<const A: usize, const M: usize> {
    motors: MotorSet<M>,
}

impl<const A: usize, const M: usize> MotorMapper<A, M> {
    pub fn new(motors: MotorSet<M>) -> Result<Self> {
        for (index, motor) in motors.iter().enumerate() {
            check_motor::<A>(index, motor)?;
        }
        tracing::debug!(axes = A, motors = M, "validated motor map");
        Ok(Self { motors })
    }

    pub fn motors(&self) -> &MotorSet<M> {
        &self.motors
    }

    /// Motor channels driven by `axis`, in channel order.
    pub fn motors_for_axis(&self, axis: usize) -> impl Iterator<Item = usize> + '_ {
        self.motors
            .iter()
            .enumerate()
            .filter(move |(_, motor)| motor.axis == axis)
            .map(|(index, _)| index)
    }

    pub fn map(&self, joint: &JointVector<A>, axes: &AxisSet<A>) -> StepVector<M> {
        let mut steps = [0.0; M];
        for (value, motor) in steps.iter_mut().zip(self.motors.iter()) {
            *value = motor_steps(joint, axes, motor);
        }
        StepVector::new(steps)
    }
}
