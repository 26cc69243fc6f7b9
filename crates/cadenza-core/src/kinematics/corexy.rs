// CoreXY / CoreXZ kinematics

use crate::{
    axis::AxisName,
    error::{Error, Result},
    kinematics::Kinematics,
    vector::{JointVector, TravelVector},
};
use std::time::Duration;

/// Plane in which the two belt-coupled motors operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorePlane {
    /// Motors couple X and Y
    Xy,
    /// Motors couple X and Z
    Xz,
}

impl CorePlane {
    pub const fn name(self) -> &'static str {
        match self {
            CorePlane::Xy => "corexy",
            CorePlane::Xz => "corexz",
        }
    }

    const fn axes(self) -> (usize, usize) {
        match self {
            CorePlane::Xy => (AxisName::X.index(), AxisName::Y.index()),
            CorePlane::Xz => (AxisName::X.index(), AxisName::Z.index()),
        }
    }
}

/// Two motors jointly drive a plane through a crossed belt.
///
/// The plus joint moves by `a + b`, the minus joint by `a - b`, where `a`
/// and `b` are the travel of the plane's first and second axis. Every
/// other axis passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreXY {
    plane: CorePlane,
}

impl CoreXY {
    pub fn new(plane: CorePlane) -> Self {
        Self { plane }
    }

    /// Like [`CoreXY::new`], but checks once that the plane's axes exist on
    /// an `A`-axis machine.
    pub fn for_axes<const A: usize>(plane: CorePlane) -> Result<Self> {
        let (_, b) = plane.axes();
        if b >= A {
            return Err(Error::InvalidGeometry {
                geometry: plane.name(),
                reason: format!("needs axis index {b}, but only {A} axes are configured"),
            });
        }
        Ok(Self::new(plane))
    }

    pub fn plane(&self) -> CorePlane {
        self.plane
    }
}

impl<const A: usize> Kinematics<A> for CoreXY {
    fn name(&self) -> &'static str {
        self.plane.name()
    }

    fn transform(&self, travel: &TravelVector<A>, _duration: Duration) -> Result<JointVector<A>> {
        let (a, b) = self.plane.axes();
        // only reachable through `new`; `for_axes` rejects this up front
        if b >= A {
            return Err(Error::UnreachablePose {
                geometry: self.plane.name(),
                reason: format!("needs axis index {b}, but only {A} axes are configured"),
            });
        }

        let mut joint = *travel.as_array();
        joint[a] = travel[a] + travel[b];
        joint[b] = travel[a] - travel[b];
        Ok(JointVector::new(joint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENT: Duration = Duration::from_millis(10);

    #[test]
    fn corexy_sums_and_diffs_x_and_y() {
        let kin = CoreXY::new(CorePlane::Xy);
        let travel = TravelVector::new([10.0, 20.0, 30.0]);
        let joint = kin.transform(&travel, SEGMENT).unwrap();
        assert_eq!(joint.as_array(), &[30.0, -10.0, 30.0]);
    }

    #[test]
    fn corexz_sums_and_diffs_x_and_z() {
        let kin = CoreXY::new(CorePlane::Xz);
        let travel = TravelVector::new([10.0, 20.0, 30.0, 4.0]);
        let joint = kin.transform(&travel, SEGMENT).unwrap();
        assert_eq!(joint.as_array(), &[40.0, 20.0, -20.0, 4.0]);
    }

    #[test]
    fn pure_x_move_drives_both_motors() {
        let kin = CoreXY::new(CorePlane::Xy);
        let joint = kin
            .transform(&TravelVector::new([5.0, 0.0]), SEGMENT)
            .unwrap();
        assert_eq!(joint.as_array(), &[5.0, 5.0]);
    }

    #[test]
    fn for_axes_checks_plane_once() {
        assert!(CoreXY::for_axes::<3>(CorePlane::Xz).is_ok());
        assert!(CoreXY::for_axes::<2>(CorePlane::Xy).is_ok());
        let err = CoreXY::for_axes::<2>(CorePlane::Xz).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                geometry: "corexz",
                ..
            }
        ));
    }

    #[test]
    fn too_few_axes_is_unreachable() {
        let kin = CoreXY::new(CorePlane::Xz);
        let err = kin
            .transform(&TravelVector::new([1.0, 2.0]), SEGMENT)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnreachablePose {
                geometry: "corexz",
                ..
            }
        ));
    }
}
