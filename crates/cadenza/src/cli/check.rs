use crate::{AXES, MOTORS, config::Config, machine::Machine};
use anyhow::Result;
use cadenza_core::AxisName;
use clap::Args;
use std::{fmt::Write, path::PathBuf};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the machine configuration file (TOML or JSON).
    pub config: PathBuf,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)?;
        config.validate::<AXES, MOTORS>()?;
        tracing::info!("configuration {} is valid", self.config.display());
        print!("{}", summary(&config)?);
        Ok(())
    }
}

/// Render the geometry, axis modes and axis-to-motor gang table.
pub fn summary(config: &Config) -> Result<String> {
    let machine = Machine::<AXES, MOTORS>::from_config(config)?;
    let snapshot = machine.snapshot();

    let mut out = String::new();
    writeln!(out, "geometry: {}", machine.geometry())?;
    for (index, axis) in snapshot.axes().iter().enumerate() {
        let name = AxisName::from_index(index).map_or("?", AxisName::as_str);
        let motors = snapshot
            .mapper()
            .motors_for_axis(index)
            .map(|motor| {
                let steps_per_unit = snapshot.motors().as_array()[motor].steps_per_unit;
                format!("m{motor}@{steps_per_unit}")
            })
            .collect::<Vec<_>>();
        let motors = if motors.is_empty() {
            "-".to_string()
        } else {
            motors.join(" ")
        };
        writeln!(out, "{name}: {:<9} {motors}", axis.mode.as_str())?;
    }
    Ok(out)
}
