//! Travel to steps: kinematics followed by motor mapping.

use crate::{
    axis::AxisSet,
    error::Result,
    kinematics::{Geometry, Kinematics},
    mapper::map_to_steps,
    motor::MotorSet,
    snapshot::MachineSnapshot,
    vector::{JointVector, StepVector, TravelVector},
};
use std::time::Duration;

/// Convert one segment's travel into fractional motor steps.
///
/// Runs the geometry's inverse map and then maps the joint vector onto the
/// motor channels. Either stage failing aborts the whole conversion; no
/// partial step vector is ever returned.
pub fn convert<K, const A: usize, const M: usize>(
    kinematics: &K,
    travel: &TravelVector<A>,
    duration: Duration,
    axes: &AxisSet<A>,
    motors: &MotorSet<M>,
) -> Result<StepVector<M>>
where
    K: Kinematics<A> + ?Sized,
{
    let joint = kinematics.transform(travel, duration)?;
    map_to_steps(&joint, axes, motors)
}

/// A geometry chosen once at configuration time, applied to every segment.
pub struct Converter<const A: usize, const M: usize> {
    kinematics: Box<dyn Kinematics<A>>,
}

impl<const A: usize, const M: usize> Converter<A, M> {
    pub fn new<K: Kinematics<A> + 'static>(kinematics: K) -> Self {
        Self {
            kinematics: Box::new(kinematics),
        }
    }

    pub fn from_geometry(geometry: &Geometry) -> Result<Self> {
        Ok(Self {
            kinematics: geometry.build()?,
        })
    }

    pub fn geometry(&self) -> &'static str {
        self.kinematics.name()
    }

    /// Run only the kinematics stage.
    pub fn joint(&self, travel: &TravelVector<A>, duration: Duration) -> Result<JointVector<A>> {
        self.kinematics.transform(travel, duration)
    }

    pub fn convert(
        &self,
        travel: &TravelVector<A>,
        duration: Duration,
        machine: &MachineSnapshot<A, M>,
    ) -> Result<StepVector<M>> {
        let (_, steps) = self.convert_with_joint(travel, duration, machine)?;
        Ok(steps)
    }

    /// Convert a segment and also hand back the intermediate joint vector.
    ///
    /// The geometry runs once; the steps are mapped from that same joint.
    pub fn convert_with_joint(
        &self,
        travel: &TravelVector<A>,
        duration: Duration,
        machine: &MachineSnapshot<A, M>,
    ) -> Result<(JointVector<A>, StepVector<M>)> {
        let joint = self.joint(travel, duration).inspect_err(|err| {
            tracing::warn!(geometry = self.geometry(), %err, "rejected segment");
        })?;
        let steps = machine.mapper().map(&joint, machine.axes());
        tracing::trace!(
            geometry = self.geometry(),
            ?duration,
            travel = ?travel.as_array(),
            steps = ?steps.as_array(),
            "converted segment"
        );
        Ok((joint, steps))
    }

    /// Like [`Converter::convert`], for travel that arrives as a slice.
    pub fn convert_slice(
        &self,
        travel: &[f64],
        duration: Duration,
        machine: &MachineSnapshot<A, M>,
    ) -> Result<StepVector<M>> {
        let travel = TravelVector::try_from(travel)?;
        self.convert(&travel, duration, machine)
    }
}

impl<const A: usize, const M: usize> std::fmt::Debug for Converter<A, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("geometry", &self.geometry())
            .finish()
    }
}
