/// Integration tests for loading machine files and converting segments
use anyhow::Result;
use cadenza::{
    cli::{check::summary, convert::ConvertArgs},
    config::Config,
};
use serde_json::json;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const XYZ_TOML: &str = r#"
[[motors]]
axis = "x"
steps_per_unit = 100.0

[[motors]]
axis = "y"
steps_per_unit = 100.0

[[motors]]
axis = "z"
steps_per_unit = 400.0

[[motors]]
axis = "z"
steps_per_unit = 400.0
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn args(config: PathBuf, travel: &[f64]) -> ConvertArgs {
    ConvertArgs {
        config,
        duration_us: 2500,
        joint: false,
        travel: travel.to_vec(),
    }
}

#[test]
fn test_convert_from_toml_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write(&dir, "machine.toml", XYZ_TOML)?;
    let config = Config::from_file(&path)?;

    let output = args(path, &[1.0, -2.0, 0.5, 0.0, 0.0, 0.0]).evaluate(&config)?;
    assert_eq!(output, json!([100.0, -200.0, 200.0, 200.0]));
    Ok(())
}

#[test]
fn test_convert_with_inhibited_axis() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let content = format!("[axes]\ny = \"inhibited\"\n{XYZ_TOML}");
    let path = write(&dir, "machine.toml", &content)?;
    let config = Config::from_file(&path)?;

    let output = args(path, &[1.0, -2.0, 0.5, 0.0, 0.0, 0.0]).evaluate(&config)?;
    assert_eq!(output, json!([100.0, 0.0, 200.0, 200.0]));
    Ok(())
}

#[test]
fn test_convert_reports_joint() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let content = format!("geometry = \"corexy\"\n{XYZ_TOML}");
    let path = write(&dir, "machine.toml", &content)?;
    let config = Config::from_file(&path)?;

    let mut args = args(path, &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    args.joint = true;
    let output = args.evaluate(&config)?;
    assert_eq!(
        output,
        json!({
            "geometry": "corexy",
            "joint": [2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "steps": [200.0, 0.0, 0.0, 0.0],
        })
    );
    Ok(())
}

#[test]
fn test_json_and_extensionless_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let json = r#"{
        "motors": [
            { "axis": 0, "steps_per_unit": 10.0 },
            { "axis": 1, "steps_per_unit": 10.0 },
            { "axis": 2, "steps_per_unit": 10.0 },
            { "axis": 3, "step_angle": 1.8, "microsteps": 1, "travel_per_rev": 360.0 }
        ]
    }"#;
    let from_json = Config::from_file(write(&dir, "machine.json", json)?)?;
    let from_toml = Config::from_file(write(&dir, "machine", XYZ_TOML)?)?;
    let from_json_fallback = Config::from_file(write(&dir, "machine.cfg", json)?)?;

    assert_eq!(from_json, from_json_fallback);
    assert_eq!(from_toml.motors.len(), 4);
    Ok(())
}

#[test]
fn test_wrong_travel_length_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write(&dir, "machine.toml", XYZ_TOML)?;
    let config = Config::from_file(&path)?;

    let err = args(path, &[1.0, 2.0, 3.0]).evaluate(&config).unwrap_err();
    assert_eq!(err.to_string(), "travel vector has 3 entries, expected 6");
    Ok(())
}

#[test]
fn test_wrong_motor_count_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write(
        &dir,
        "machine.toml",
        "[[motors]]\naxis = \"x\"\nsteps_per_unit = 1.0\n",
    )?;
    let config = Config::from_file(&path)?;
    assert!(config.validate::<6, 4>().is_err());
    assert!(summary(&config).is_err());
    Ok(())
}

#[test]
fn test_missing_file() {
    let err = Config::from_file("/nonexistent/machine.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
