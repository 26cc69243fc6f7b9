use anyhow::{Context, Result};
use cadenza_core::{AxisMode, AxisName, AxisSet, Geometry, MachineSnapshot, MotorConfig, MotorSet};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

/// Machine description: geometry, axis modes and motor channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Kinematics geometry
    #[serde(default)]
    pub geometry: Geometry,

    /// Axis modes keyed by axis name. Omitted axes are standard.
    #[serde(default)]
    pub axes: BTreeMap<String, AxisMode>,

    /// One entry per motor channel, in channel order
    #[serde(default)]
    pub motors: Vec<MotorEntry>,
}

/// Reference to a logical axis, by name (`"z"`) or index (`2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisRef {
    Index(usize),
    Name(String),
}

impl AxisRef {
    fn resolve(&self) -> Result<usize> {
        match self {
            AxisRef::Index(index) => Ok(*index),
            AxisRef::Name(name) => AxisName::parse(name)
                .map(AxisName::index)
                .with_context(|| format!("unknown axis {name:?}")),
        }
    }
}

/// Motor channel configuration.
///
/// The scale is either given directly as `steps_per_unit`, or derived from
/// `step_angle`, `microsteps` and `travel_per_rev`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorEntry {
    pub axis: AxisRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps_per_unit: Option<f64>,

    /// Full step angle in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_angle: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsteps: Option<u16>,

    /// Joint travel per motor revolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_per_rev: Option<f64>,
}

fn check_positive(what: &str, motor: usize, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        anyhow::bail!("motors[{motor}].{what} must be finite and positive, got {value}");
    }
    Ok(())
}

impl MotorEntry {
    fn to_motor(&self, index: usize) -> Result<MotorConfig> {
        let axis = self.axis.resolve().with_context(|| format!("motors[{index}].axis"))?;

        let drive = (self.step_angle, self.microsteps, self.travel_per_rev);
        let motor = match (self.steps_per_unit, drive) {
            (Some(steps_per_unit), (None, None, None)) => MotorConfig::new(axis, steps_per_unit),
            (None, (Some(step_angle), Some(microsteps), Some(travel_per_rev))) => {
                check_positive("step_angle", index, step_angle)?;
                check_positive("travel_per_rev", index, travel_per_rev)?;
                if microsteps == 0 {
                    anyhow::bail!("motors[{index}].microsteps cannot be zero");
                }
                MotorConfig::from_drive(axis, step_angle, microsteps, travel_per_rev)
            }
            (Some(_), _) => anyhow::bail!(
                "motors[{index}] sets steps_per_unit together with drive parameters"
            ),
            (None, _) => anyhow::bail!(
                "motors[{index}] needs steps_per_unit or step_angle, microsteps and travel_per_rev"
            ),
        };
        check_positive("steps_per_unit", index, motor.steps_per_unit)?;
        Ok(motor)
    }
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        // Try to determine format from extension
        let extension = path.extension().and_then(|s| s.to_str());

        match extension {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                // Try TOML first (preferred), fall back to JSON
                Self::from_toml(&content).or_else(|_| Self::from_json(&content))
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    pub fn axis_set<const A: usize>(&self) -> Result<AxisSet<A>> {
        let mut axes = AxisSet::standard();
        let mut seen: [Option<&str>; A] = [None; A];
        for (name, mode) in &self.axes {
            let index = AxisName::parse(name)
                .map(AxisName::index)
                .with_context(|| format!("axes: unknown axis {name:?}"))?;
            if axes.set_mode(index, *mode).is_none() {
                anyhow::bail!("axes: axis {name:?} is not available on a {A}-axis machine");
            }
            // keys are case-insensitive, so "X" and "x" name the same axis
            if let Some(previous) = seen[index].replace(name) {
                anyhow::bail!("axes: {previous:?} and {name:?} both configure axis {index}");
            }
        }
        Ok(axes)
    }

    pub fn motor_set<const M: usize>(&self) -> Result<MotorSet<M>> {
        let motors = self
            .motors
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_motor(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(MotorSet::from_slice(&motors)?)
    }

    /// Resolve into a validated snapshot for `A` axes and `M` motors.
    pub fn snapshot<const A: usize, const M: usize>(&self) -> Result<MachineSnapshot<A, M>> {
        let snapshot = MachineSnapshot::new(self.axis_set()?, self.motor_set()?)?;
        tracing::debug!(
            geometry = self.geometry.name(),
            axes = A,
            motors = M,
            "resolved machine configuration"
        );
        Ok(snapshot)
    }

    /// Validate the configuration
    pub fn validate<const A: usize, const M: usize>(&self) -> Result<()> {
        self.geometry.build::<A>().context("invalid geometry")?;
        self.snapshot::<A, M>()?;
        Ok(())
    }
}
