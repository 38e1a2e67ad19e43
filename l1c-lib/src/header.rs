use regex::Regex;
use tracing::debug;

use crate::{
    config::SensorConfig,
    error::{Error, Result},
    scene::{OrbitNumber, Scene, Wavelength},
};

/// Normalize a platform name to the short form used in products, e.g.
/// `FY-3D` becomes `fy3d`.
///
/// Configured aliases win; anything else is lowercased with separators
/// stripped.
#[must_use]
pub fn platform_name(config: &SensorConfig, platform: &str) -> String {
    if let Some(alias) = config.platforms.get(platform) {
        return alias.clone();
    }
    let sep = Regex::new(r"[^0-9A-Za-z]+").unwrap();
    sep.replace_all(platform, "").to_lowercase()
}

/// Normalize scene and band attributes for the level-1c writer.
///
/// Stamps the configured sensor, canonicalizes the platform name, and
/// assigns each configured channel present in the scene its id-tag and its
/// `image<idx>` output name, counting present channels in configured order.
/// Angle datasets keep their own names. The orbit number, whether taken from
/// `orbit_n` or already on the scene, is stored in its numeric form; calling
/// this twice with the same override is a no-op the second time.
///
/// # Errors
/// [Error::MissingAttr] if no orbit number is available at all, and
/// [Error::InvalidOrbitNumber] if the value is non-numeric text.
pub fn set_header_and_band_attrs(
    scene: &mut Scene,
    config: &SensorConfig,
    orbit_n: Option<OrbitNumber>,
) -> Result<()> {
    scene.attrs.sensor = vec![config.sensor.clone()];

    if let Some(platform) = scene.attrs.platform.take() {
        scene.attrs.platform = Some(platform_name(config, &platform));
    }

    let orbit = orbit_n
        .or_else(|| scene.attrs.orbit_number.clone())
        .ok_or(Error::MissingAttr("orbit_number"))?;
    scene.attrs.orbit_number = Some(orbit.normalize()?);

    let mut idx = 0;
    for spec in &config.bands {
        let Some(band) = scene.get_mut(&spec.key) else {
            continue;
        };
        debug!("channel {} becomes image{idx} ({})", spec.key, spec.id_tag);
        band.id_tag = spec.id_tag.clone();
        band.name = format!("image{idx}");
        if band.wavelength.is_none() {
            if let Some([min, central, max]) = spec.wavelength {
                band.wavelength = Some(Wavelength::micrometers(min, central, max));
            }
        }
        idx += 1;
    }

    for angle in &config.angles {
        if let Some(band) = scene.get_mut(angle) {
            band.id_tag = angle.clone();
            band.name = angle.clone();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::{ArrayD, IxDyn};

    use crate::{
        config::get_default,
        scene::{Band, OrbitNumber},
    };

    use super::*;

    fn empty_data() -> ArrayD<f32> {
        ArrayD::zeros(IxDyn(&[2, 2]))
    }

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        for key in ["3", "24", "satzenith"] {
            scene.insert(key, Band::new(key, key, empty_data()).unwrap());
        }
        scene.attrs.platform = Some("FY-3D".to_string());
        scene
    }

    fn mersi2_config() -> SensorConfig {
        get_default("mersi2").unwrap().unwrap()
    }

    #[test]
    fn test_orbit_number_coerced_to_int() {
        let mut scene = test_scene();
        set_header_and_band_attrs(&mut scene, &mersi2_config(), Some("12345".into())).unwrap();

        assert_eq!(
            scene.attrs.orbit_number,
            Some(OrbitNumber::Number(12345)),
            "orbit number must be stored numeric"
        );
    }

    #[test]
    fn test_orbit_number_idempotent() {
        let mut scene = test_scene();
        set_header_and_band_attrs(&mut scene, &mersi2_config(), Some("12345".into())).unwrap();
        set_header_and_band_attrs(&mut scene, &mersi2_config(), Some("12345".into())).unwrap();

        assert_eq!(scene.attrs.orbit_number, Some(OrbitNumber::Number(12345)));
    }

    #[test]
    fn test_orbit_number_from_scene_attr() {
        let mut scene = test_scene();
        scene.attrs.orbit_number = Some(OrbitNumber::from("99999"));
        set_header_and_band_attrs(&mut scene, &mersi2_config(), None).unwrap();

        assert_eq!(scene.attrs.orbit_number, Some(OrbitNumber::Number(99999)));
    }

    #[test]
    fn test_orbit_number_invalid() {
        let mut scene = test_scene();
        let zult = set_header_and_band_attrs(&mut scene, &mersi2_config(), Some("n/a".into()));

        assert!(matches!(zult, Err(Error::InvalidOrbitNumber(_))));
    }

    #[test]
    fn test_orbit_number_missing() {
        let mut scene = test_scene();
        let zult = set_header_and_band_attrs(&mut scene, &mersi2_config(), None);

        assert!(matches!(zult, Err(Error::MissingAttr("orbit_number"))));
    }

    #[test]
    fn test_band_names_and_tags() {
        let mut scene = test_scene();
        set_header_and_band_attrs(&mut scene, &mersi2_config(), Some(1u32.into())).unwrap();

        // image index counts present channels only, in configured order
        let vis = scene.get("3").unwrap();
        assert_eq!(vis.name, "image0");
        assert_eq!(vis.id_tag, "ch_r06");

        let ir = scene.get("24").unwrap();
        assert_eq!(ir.name, "image1");
        assert_eq!(ir.id_tag, "ch_tb11");

        // angle datasets keep their own names
        let angle = scene.get("satzenith").unwrap();
        assert_eq!(angle.name, "satzenith");
        assert_eq!(angle.id_tag, "satzenith");
    }

    #[test]
    fn test_sensor_and_platform() {
        let mut scene = test_scene();
        set_header_and_band_attrs(&mut scene, &mersi2_config(), Some(1u32.into())).unwrap();

        assert_eq!(scene.attrs.sensor, vec!["mersi2".to_string()]);
        assert_eq!(scene.attrs.platform.as_deref(), Some("fy3d"));
    }

    #[test]
    fn test_platform_name_fallback() {
        let config = mersi2_config();

        assert_eq!(platform_name(&config, "FY-3D"), "fy3d");
        assert_eq!(platform_name(&config, "NOAA-19"), "noaa19");
        assert_eq!(platform_name(&config, "Metop-B"), "metopb");
    }
}
