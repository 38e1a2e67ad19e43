use std::collections::HashMap;
use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::scene::Scene;

/// Geometry dataset names; these double as id-tags and output variable names.
pub const ANGLE_NAMES: [&str; 5] = [
    "satzenith",
    "satazimuth",
    "sunzenith",
    "sunazimuth",
    "azimuthdiff",
];

/// NetCDF storage type for an output variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DType {
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
}

impl DType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical quantity class of a band, derived from its id-tag.
///
/// The id-tag prefix is the sole classification rule: `ch_r` marks
/// reflectances, `ch_tb` brightness temperatures, and the known geometry
/// names mark angles. Anything else is [QuantityKind::Other] and is encoded
/// with the angle template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuantityKind {
    Reflectance,
    BrightnessTemperature,
    Angle,
    Other,
}

impl QuantityKind {
    #[must_use]
    pub fn from_id_tag(id_tag: &str) -> Self {
        if id_tag.starts_with("ch_r") {
            QuantityKind::Reflectance
        } else if id_tag.starts_with("ch_tb") {
            QuantityKind::BrightnessTemperature
        } else if ANGLE_NAMES.contains(&id_tag) {
            QuantityKind::Angle
        } else {
            QuantityKind::Other
        }
    }
}

/// Serialization parameters for one output variable.
///
/// Decoded value = stored value * `scale_factor` + `add_offset`; `fill_value`
/// is the missing-data sentinel in the stored (pre-scaling) integer domain.
/// Serializes with the attribute names the NetCDF writer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub dtype: DType,
    pub scale_factor: f64,
    pub add_offset: f64,
    #[serde(rename = "_FillValue")]
    pub fill_value: i16,
    pub zlib: bool,
    pub complevel: u8,
}

impl Encoding {
    pub const FILL_VALUE: i16 = -32767;
    pub const SCALE_FACTOR: f64 = 0.01;
    pub const COMPLEVEL: u8 = 4;
    /// Brightness temperatures are stored centered on 273.15 K.
    pub const TB_OFFSET: f64 = 273.15;

    /// The encoding template for a quantity class.
    ///
    /// All classes share the int16 envelope; only the offset differs.
    #[must_use]
    pub fn for_kind(kind: QuantityKind) -> Self {
        let add_offset = match kind {
            QuantityKind::BrightnessTemperature => Self::TB_OFFSET,
            QuantityKind::Reflectance | QuantityKind::Angle | QuantityKind::Other => 0.0,
        };
        Encoding {
            dtype: DType::Int16,
            scale_factor: Self::SCALE_FACTOR,
            add_offset,
            fill_value: Self::FILL_VALUE,
            zlib: true,
            complevel: Self::COMPLEVEL,
        }
    }
}

/// Compute the per-variable encoding for every band in the scene.
///
/// Keys are the bands' output `name` attributes, not their scene keys.
#[must_use]
pub fn get_encoding(scene: &Scene) -> HashMap<String, Encoding> {
    let mut encodings = HashMap::default();
    for (key, band) in scene.iter() {
        let kind = QuantityKind::from_id_tag(&band.id_tag);
        debug!("band {key} ({}) encoded as {kind:?}", band.name);
        encodings.insert(band.name.clone(), Encoding::for_kind(kind));
    }
    encodings
}
