mod command_encoding;
mod command_filename;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{stderr, stdout, Write},
    path::PathBuf,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use l1c::config::{get_default, get_default_content, SensorConfig};

/// Tool for preparing FY-3D MERSI-2 swath metadata for PPS level-1c
/// processing.
///
/// Composes product filenames and per-variable NetCDF encodings from the
/// per-sensor band tables. The level-1 readers and the NetCDF writer itself
/// live in the surrounding processing chain.
#[derive(Parser)]
#[command(version, about, long_about, disable_help_subcommand = true)]
struct Cli {
    /// Logging level filters, e.g., debug, info, warn, etc ...
    #[arg(short, long, default_value = "info")]
    logging: String,

    #[command(subcommand)]
    commands: Commands,
}

fn parse_valid_sensor(name: &str) -> Result<String, String> {
    let valid_sensors = ["mersi2"];
    if valid_sensors.contains(&name) {
        Ok(String::from(name))
    } else {
        Err(format! {"expected one of {}", valid_sensors.join(", ")})
    }
}

#[derive(Args)]
#[group(multiple = false, required = true)]
struct Configs {
    /// Use the built-in default configuration for this sensor; currently only
    /// mersi2.
    #[arg(short, long, value_name = "name", value_parser=parse_valid_sensor)]
    sensor: Option<String>,

    /// YAML band-table configuration file to use, rather than an embedded
    /// default. See the config subcommand to view embedded configuration.
    #[arg(short, long, value_name = "path")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the product filename for a single pass.
    ///
    /// Downstream systems parse this name, so the output follows the fixed
    /// S_NWC_<sensor>_<platform>_<orbit>_<start>_<end>.nc pattern.
    Filename {
        #[command(flatten)]
        configs: Configs,

        /// Platform name as delivered by the level-1 metadata, e.g. FY-3D.
        #[arg(short, long, value_name = "name")]
        platform: String,

        /// Orbit number at the start of the pass.
        #[arg(long, value_name = "num")]
        orbit: String,

        /// Pass start time, e.g. 2009-07-01T12:15:00Z.
        #[arg(long, value_name = "time")]
        start: String,

        /// Pass end time.
        #[arg(long, value_name = "time")]
        end: String,

        /// Output directory.
        #[arg(short, long, value_name = "path", default_value = "output")]
        output: PathBuf,
    },
    /// Generate JSON with the per-variable encoding for the configured bands.
    Encoding {
        #[command(flatten)]
        configs: Configs,
    },
    /// Output the default configuration.
    Config {
        /// Sensor to show the config for
        #[arg(value_name = "sensor", value_parser=parse_valid_sensor)]
        sensor: String,
    },
}

fn get_config(sensor: Option<String>, fpath: Option<PathBuf>) -> Result<SensorConfig> {
    let config = match sensor {
        Some(name) => get_default(&name).context("getting default config")?,
        None => Some(SensorConfig::with_path(&fpath.unwrap()).context("Invalid config")?),
    };
    match config {
        Some(config) => {
            debug!("using {} band table with {} bands", config.sensor, config.bands.len());
            Ok(config)
        }
        None => bail!("no embedded config available"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(EnvFilter::new(cli.logging))
        .init();

    match cli.commands {
        Commands::Filename {
            configs,
            platform,
            orbit,
            start,
            end,
            output,
        } => {
            let config = get_config(configs.sensor, configs.config)?;
            crate::command_filename::filename(&config, &platform, &orbit, &start, &end, &output)?;
        }
        Commands::Encoding { configs } => {
            let config = get_config(configs.sensor, configs.config)?;
            crate::command_encoding::encoding(&config)?;
        }
        Commands::Config { sensor } => {
            let Some(content) = get_default_content(&sensor) else {
                bail!("no config for {sensor}");
            };
            stdout().write_all(content.as_bytes())?;
        }
    }

    Ok(())
}
