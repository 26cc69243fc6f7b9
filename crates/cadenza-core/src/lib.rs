//! Converts per-segment axis travel into fractional motor steps.
//!
//! The pipeline runs in two stages: a [`Kinematics`] geometry maps logical
//! axis travel into joint space, then a [`MotorMapper`] spreads the joint
//! values over the physical motor channels, scaling by steps-per-unit and
//! suppressing inhibited axes.
//!
//! This crate intentionally avoids any I/O, file format or MCU-specific
//! dependencies. Configuration arrives already resolved.

pub mod axis;
pub mod convert;
pub mod error;
pub mod kinematics;
pub mod mapper;
pub mod motor;
pub mod snapshot;
pub mod vector;

pub use axis::{AxisConfig, AxisMode, AxisName, AxisSet};
pub use convert::{Converter, convert};
pub use error::{Error, Result, VectorKind};
pub use kinematics::{Geometry, Kinematics};
pub use mapper::{MotorMapper, map_to_steps};
pub use motor::{MotorConfig, MotorSet};
pub use snapshot::{MachineSnapshot, SharedMachine};
pub use vector::{JointVector, StepVector, TravelVector};
