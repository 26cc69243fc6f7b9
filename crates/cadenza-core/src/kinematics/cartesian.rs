// Cartesian kinematics - each axis drives its own joint

use crate::{
    error::Result,
    kinematics::Kinematics,
    vector::{JointVector, TravelVector},
};
use std::time::Duration;

pub(crate) const NAME: &str = "cartesian";

/// Identity geometry: `joint[i] == travel[i]` for every axis.
///
/// Never fails and ignores the segment duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cartesian;

impl<const A: usize> Kinematics<A> for Cartesian {
    fn name(&self) -> &'static str {
        NAME
    }

    fn transform(&self, travel: &TravelVector<A>, _duration: Duration) -> Result<JointVector<A>> {
        Ok(JointVector::new(*travel.as_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_is_identity() {
        let travel = TravelVector::new([1.0, -2.0, 0.5]);
        let joint = Cartesian
            .transform(&travel, Duration::from_micros(1500))
            .unwrap();
        assert_eq!(joint.as_array(), &[1.0, -2.0, 0.5]);
    }

    #[test]
    fn cartesian_ignores_duration() {
        let travel = TravelVector::new([3.0, 0.0, -7.25, 1e-9, 0.0, 12.0]);
        let short = Cartesian.transform(&travel, Duration::from_nanos(1)).unwrap();
        let long = Cartesian.transform(&travel, Duration::from_secs(60)).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn cartesian_zero_travel() {
        let joint = Cartesian
            .transform(&TravelVector::<6>::zero(), Duration::from_millis(1))
            .unwrap();
        assert_eq!(joint, JointVector::zero());
    }
}
