use crate::config::Config;
use anyhow::{Context, Result};
use cadenza_core::{
    Converter, Geometry, JointVector, MachineSnapshot, SharedMachine, StepVector, TravelVector,
};
use std::{sync::Arc, time::Duration};

/// A configured machine: the geometry fixed at startup plus the swappable
/// axis and motor snapshot.
#[derive(Debug)]
pub struct Machine<const A: usize, const M: usize> {
    geometry: Geometry,
    converter: Converter<A, M>,
    shared: SharedMachine<A, M>,
}

impl<const A: usize, const M: usize> Machine<A, M> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let converter = Converter::from_geometry(&config.geometry).context("invalid geometry")?;
        let snapshot = config.snapshot()?;
        tracing::info!(
            geometry = converter.geometry(),
            axes = A,
            motors = M,
            "machine configured"
        );
        Ok(Self {
            geometry: config.geometry.clone(),
            converter,
            shared: SharedMachine::new(snapshot),
        })
    }

    pub fn geometry(&self) -> &'static str {
        self.converter.geometry()
    }

    /// Current axis and motor configuration.
    pub fn snapshot(&self) -> Arc<MachineSnapshot<A, M>> {
        self.shared.load()
    }

    /// Replace the axis and motor configuration between segments.
    ///
    /// The geometry is fixed for the life of the machine; a configuration
    /// that changes it is rejected and the current snapshot is kept.
    pub fn reload(&self, config: &Config) -> Result<()> {
        if config.geometry != self.geometry {
            anyhow::bail!(
                "cannot switch geometry from {} to {} while running",
                self.geometry.name(),
                config.geometry.name()
            );
        }
        let snapshot = config.snapshot()?;
        self.shared.swap(snapshot);
        Ok(())
    }

    pub fn convert(&self, travel: &[f64], duration: Duration) -> Result<StepVector<M>> {
        let snapshot = self.shared.load();
        Ok(self.converter.convert_slice(travel, duration, &snapshot)?)
    }

    /// Convert and also return the joint vector the steps were mapped from.
    pub fn convert_with_joint(
        &self,
        travel: &[f64],
        duration: Duration,
    ) -> Result<(JointVector<A>, StepVector<M>)> {
        let travel = TravelVector::try_from(travel)?;
        let snapshot = self.shared.load();
        Ok(self
            .converter
            .convert_with_joint(&travel, duration, &snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AxisRef, MotorEntry};
    use cadenza_core::{AxisMode, Error, VectorKind};

    const SEGMENT: Duration = Duration::from_millis(4);

    fn config(geometry: Geometry) -> Config {
        let motor = |axis: usize, steps_per_unit: f64| MotorEntry {
            axis: AxisRef::Index(axis),
            steps_per_unit: Some(steps_per_unit),
            step_angle: None,
            microsteps: None,
            travel_per_rev: None,
        };
        Config {
            geometry,
            axes: Default::default(),
            motors: vec![motor(0, 100.0), motor(1, 100.0), motor(2, 400.0)],
        }
    }

    #[test]
    fn converts_through_current_snapshot() {
        let machine = Machine::<3, 3>::from_config(&config(Geometry::Cartesian)).unwrap();
        let steps = machine.convert(&[1.0, -2.0, 0.5], SEGMENT).unwrap();
        assert_eq!(steps.as_array(), &[100.0, -200.0, 200.0]);

        let mut inhibited = config(Geometry::Cartesian);
        inhibited.axes.insert("y".into(), AxisMode::Inhibited);
        machine.reload(&inhibited).unwrap();

        let steps = machine.convert(&[1.0, -2.0, 0.5], SEGMENT).unwrap();
        assert_eq!(steps.as_array(), &[100.0, 0.0, 200.0]);
    }

    #[test]
    fn reload_keeps_geometry() {
        let machine = Machine::<3, 3>::from_config(&config(Geometry::Cartesian)).unwrap();
        let before = machine.snapshot();
        assert!(machine.reload(&config(Geometry::CoreXy)).is_err());
        assert!(Arc::ptr_eq(&before, &machine.snapshot()));
    }

    #[test]
    fn failed_reload_keeps_snapshot() {
        let machine = Machine::<3, 3>::from_config(&config(Geometry::Cartesian)).unwrap();
        let before = machine.snapshot();

        let mut broken = config(Geometry::Cartesian);
        broken.motors[2].axis = AxisRef::Index(7);
        assert!(machine.reload(&broken).is_err());
        assert!(Arc::ptr_eq(&before, &machine.snapshot()));
    }

    #[test]
    fn corexy_joint_and_steps() {
        let machine = Machine::<3, 3>::from_config(&config(Geometry::CoreXy)).unwrap();
        assert_eq!(machine.geometry(), "corexy");

        let steps = machine.convert(&[1.0, 1.0, 0.0], SEGMENT).unwrap();
        assert_eq!(steps.as_array(), &[200.0, 0.0, 0.0]);

        let (joint, with_joint) = machine
            .convert_with_joint(&[1.0, 1.0, 0.0], SEGMENT)
            .unwrap();
        assert_eq!(joint.as_array(), &[2.0, 0.0, 0.0]);
        assert_eq!(with_joint, steps);
    }

    #[test]
    fn wrong_travel_length() {
        let machine = Machine::<3, 3>::from_config(&config(Geometry::Cartesian)).unwrap();
        let err = machine.convert(&[1.0], SEGMENT).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::DimensionMismatch {
                kind: VectorKind::Travel,
                expected: 3,
                actual: 1,
            })
        );
    }
}
