use crate::{AXES, MOTORS, config::Config, machine::Machine};
use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};
use std::{path::PathBuf, time::Duration};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the machine configuration file (TOML or JSON).
    pub config: PathBuf,

    /// Time allotted to the segment, in microseconds.
    #[arg(long, default_value_t = 1000)]
    pub duration_us: u64,

    /// Also print the joint-space vector.
    #[arg(long)]
    pub joint: bool,

    /// Relative travel per axis (X Y Z A B C), in machine units.
    #[arg(required = true, allow_negative_numbers = true)]
    pub travel: Vec<f64>,
}

impl ConvertArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config)?;
        let output = self.evaluate(&config)?;
        println!("{output}");
        Ok(())
    }

    /// Convert the requested segment and render the result as JSON.
    pub fn evaluate(&self, config: &Config) -> Result<Value> {
        let machine = Machine::<AXES, MOTORS>::from_config(config)?;
        let duration = Duration::from_micros(self.duration_us);

        if !self.joint {
            let steps = machine.convert(&self.travel, duration)?;
            return Ok(json!(steps.as_array()));
        }

        let (joint, steps) = machine.convert_with_joint(&self.travel, duration)?;
        Ok(json!({
            "geometry": machine.geometry(),
            "joint": joint.as_array(),
            "steps": steps.as_array(),
        }))
    }
}
