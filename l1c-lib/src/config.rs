use std::{
    collections::{HashMap, HashSet},
    fs::File,
    path::Path,
};

use serde::Deserialize;

use crate::encoding::QuantityKind;
use crate::error::{Error, Result};

/// One instrument channel carried in the level-1c product.
#[derive(Debug, Clone, Deserialize)]
pub struct BandSpec {
    /// Channel key as used by the level-1 reader, e.g. `"24"`.
    pub key: String,
    /// Quantity id-tag, e.g. `ch_tb11`.
    pub id_tag: String,
    /// Response interval min/central/max in micrometers.
    #[serde(default)]
    pub wavelength: Option<[f64; 3]>,
}

/// Per-sensor band-table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorConfig {
    pub sensor: String,
    /// Platform names as delivered by the level-1 metadata mapped to the
    /// short form used in product filenames.
    #[serde(default)]
    pub platforms: HashMap<String, String>,
    /// Channels in output order.
    pub bands: Vec<BandSpec>,
    /// Geometry dataset names.
    #[serde(default)]
    pub angles: Vec<String>,
}

impl SensorConfig {
    fn validate(self) -> Result<Self> {
        let mut keys: HashSet<&str> = HashSet::default();
        for band in &self.bands {
            if !keys.insert(&band.key) {
                return Err(Error::ConfigInvalid(format!(
                    "duplicate band key {}",
                    band.key
                )));
            }
            match QuantityKind::from_id_tag(&band.id_tag) {
                QuantityKind::Reflectance | QuantityKind::BrightnessTemperature => {}
                _ => {
                    return Err(Error::ConfigInvalid(format!(
                        "band {} has unclassifiable id_tag {}",
                        band.key, band.id_tag
                    )))
                }
            }
        }

        Ok(self)
    }

    pub fn with_path(fpath: &Path) -> Result<SensorConfig> {
        let fin = File::open(fpath)?;
        let config: SensorConfig = serde_yaml::from_reader(fin)?;

        config.validate()
    }

    fn with_data(dat: &str) -> Result<SensorConfig> {
        let config: SensorConfig = serde_yaml::from_str(dat)?;
        config.validate()
    }
}

static MERSI2_CONFIG: &str = include_str!(concat!(env!("OUT_DIR"), "/mersi2.config.yaml"));

pub fn get_default_content(sensor: &str) -> Option<&'static str> {
    match sensor {
        "mersi2" => Some(MERSI2_CONFIG),
        _ => None,
    }
}

pub fn get_default(sensor: &str) -> Result<Option<SensorConfig>> {
    match get_default_content(sensor) {
        Some(cfg) => Ok(Some(SensorConfig::with_data(cfg)?)),
        None => Ok(None),
    }
}
