use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use hifitime::Epoch;

use l1c::{
    compose_filename, config::SensorConfig, platform_name, OrbitNumber, SceneAttrs, Time,
};

pub fn filename(
    config: &SensorConfig,
    platform: &str,
    orbit: &str,
    start: &str,
    end: &str,
    output: &Path,
) -> Result<()> {
    let start = Time::from_epoch(Epoch::from_str(start).context("parsing start time")?);
    let end = Time::from_epoch(Epoch::from_str(end).context("parsing end time")?);

    let attrs = SceneAttrs {
        sensor: vec![config.sensor.clone()],
        start_time: Some(start),
        end_time: Some(end),
        platform: Some(platform_name(config, platform)),
        orbit_number: Some(OrbitNumber::from(orbit)),
    };

    let fpath = compose_filename(&attrs, output, &config.sensor, None)?;
    println!("{}", fpath.display());

    Ok(())
}
