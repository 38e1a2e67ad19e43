use std::fmt::Display;

use ndarray::ArrayD;

use crate::{
    error::{Error, Result},
    Time,
};

/// Band wavelength descriptor as min/central/max of the response interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelength {
    pub min: f64,
    pub central: f64,
    pub max: f64,
    pub unit: String,
}

impl Wavelength {
    pub fn micrometers(min: f64, central: f64, max: f64) -> Self {
        Wavelength {
            min,
            central,
            max,
            unit: "um".to_string(),
        }
    }
}

/// Orbit number as delivered by the level-1 metadata.
///
/// Upstream readers hand this over either as a number or as free text.
/// [OrbitNumber::normalize] produces the canonical numeric form; `Display`
/// renders text values verbatim, which is what product filenames require.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrbitNumber {
    Raw(String),
    Number(u32),
}

impl OrbitNumber {
    /// Coerce to the numeric form.
    ///
    /// # Errors
    /// [Error::InvalidOrbitNumber] if the raw text is not a decimal number.
    pub fn normalize(&self) -> Result<Self> {
        match self {
            OrbitNumber::Number(n) => Ok(OrbitNumber::Number(*n)),
            OrbitNumber::Raw(s) => s
                .trim()
                .parse::<u32>()
                .map(OrbitNumber::Number)
                .map_err(|_| Error::InvalidOrbitNumber(s.clone())),
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            OrbitNumber::Number(n) => Some(*n),
            OrbitNumber::Raw(s) => s.trim().parse().ok(),
        }
    }
}

impl Display for OrbitNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrbitNumber::Raw(s) => f.write_str(s),
            OrbitNumber::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<u32> for OrbitNumber {
    fn from(n: u32) -> Self {
        OrbitNumber::Number(n)
    }
}

impl From<&str> for OrbitNumber {
    fn from(s: &str) -> Self {
        OrbitNumber::Raw(s.to_string())
    }
}

/// One measurement channel or derived geometry quantity of a scene.
///
/// `name` is the PPS-facing output variable name, distinct from the key the
/// band is stored under in the [Scene]; `id_tag` classifies the physical
/// quantity (see [crate::QuantityKind]). Bands may carry their own
/// start/end times, which take precedence over the scene-level times.
#[derive(Debug, Clone)]
pub struct Band {
    pub name: String,
    pub id_tag: String,
    pub wavelength: Option<Wavelength>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub data: ArrayD<f32>,
}

impl Band {
    /// Create a new band.
    ///
    /// # Errors
    /// [Error::InvalidBand] if `name` or `id_tag` is empty.
    pub fn new(name: &str, id_tag: &str, data: ArrayD<f32>) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidBand("empty name".to_string()));
        }
        if id_tag.is_empty() {
            return Err(Error::InvalidBand(format!("band {name} has empty id_tag")));
        }
        Ok(Band {
            name: name.to_string(),
            id_tag: id_tag.to_string(),
            wavelength: None,
            start_time: None,
            end_time: None,
            data,
        })
    }

    #[must_use]
    pub fn with_wavelength(mut self, wavelength: Wavelength) -> Self {
        self.wavelength = Some(wavelength);
        self
    }

    #[must_use]
    pub fn with_times(mut self, start: Time, end: Time) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }
}

/// Scene-level metadata for one processing pass.
#[derive(Debug, Clone, Default)]
pub struct SceneAttrs {
    pub sensor: Vec<String>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub platform: Option<String>,
    pub orbit_number: Option<OrbitNumber>,
}

/// In-memory container of the bands for one satellite pass plus pass-level
/// metadata.
///
/// Bands are stored under their instrument channel key (`"3"`, `"24"`,
/// `"satzenith"`, ...) in insertion order; the keys' lexical order carries no
/// meaning.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    bands: Vec<(String, Band)>,
    pub attrs: SceneAttrs,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Scene::default()
    }

    /// Add a band under `key`, replacing any previous band with that key.
    pub fn insert(&mut self, key: &str, band: Band) {
        match self.bands.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = band,
            None => self.bands.push((key.to_string(), band)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Band> {
        self.bands.iter().find(|(k, _)| k == key).map(|(_, b)| b)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Band> {
        self.bands
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, b)| b)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.bands.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Band)> {
        self.bands.iter().map(|(k, b)| (k.as_str(), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Band)> {
        self.bands.iter_mut().map(|(k, b)| (k.as_str(), b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::IxDyn;

    use super::*;

    fn empty_data() -> ArrayD<f32> {
        ArrayD::zeros(IxDyn(&[2, 2]))
    }

    #[test]
    fn test_band_requires_name_and_tag() {
        assert!(Band::new("", "ch_r06", empty_data()).is_err());
        assert!(Band::new("image0", "", empty_data()).is_err());
        assert!(Band::new("image0", "ch_r06", empty_data()).is_ok());
    }

    #[test]
    fn test_insert_replaces() {
        let mut scene = Scene::new();
        scene.insert("3", Band::new("image0", "ch_r06", empty_data()).unwrap());
        scene.insert("3", Band::new("image9", "ch_r06", empty_data()).unwrap());

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get("3").unwrap().name, "image9");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut scene = Scene::new();
        for key in ["3", "24", "satzenith"] {
            scene.insert(key, Band::new(key, key, empty_data()).unwrap());
        }

        let keys: Vec<&str> = scene.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["3", "24", "satzenith"]);
    }

    #[test]
    fn test_orbit_number_display_verbatim() {
        assert_eq!(OrbitNumber::from("99999").to_string(), "99999");
        assert_eq!(OrbitNumber::from("007").to_string(), "007");
        assert_eq!(OrbitNumber::from(99999).to_string(), "99999");
    }

    #[test]
    fn test_orbit_number_normalize() {
        let orbit = OrbitNumber::from("12345").normalize().unwrap();
        assert_eq!(orbit, OrbitNumber::Number(12345));

        // already numeric values pass through
        assert_eq!(
            OrbitNumber::from(12345).normalize().unwrap(),
            OrbitNumber::Number(12345)
        );

        assert!(matches!(
            OrbitNumber::from("twelve").normalize(),
            Err(Error::InvalidOrbitNumber(_))
        ));
    }
}
