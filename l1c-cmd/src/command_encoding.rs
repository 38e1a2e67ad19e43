use std::collections::BTreeMap;

use anyhow::Result;
use ndarray::{ArrayD, IxDyn};

use l1c::{
    config::SensorConfig, get_encoding, set_header_and_band_attrs, Band, Encoding, OrbitNumber,
    Scene,
};

/// Render the per-variable encoding table for the configured band set.
///
/// Builds a scene holding every configured channel and angle, runs the
/// header normalization pass so variables get their output names, and prints
/// the resulting encoding map as JSON.
pub fn encoding(config: &SensorConfig) -> Result<()> {
    let mut scene = Scene::new();
    for spec in &config.bands {
        scene.insert(
            &spec.key,
            Band::new(&spec.key, &spec.id_tag, ArrayD::zeros(IxDyn(&[0, 0])))?,
        );
    }
    for angle in &config.angles {
        scene.insert(angle, Band::new(angle, angle, ArrayD::zeros(IxDyn(&[0, 0])))?);
    }
    set_header_and_band_attrs(&mut scene, config, Some(OrbitNumber::Number(0)))?;

    // stable key order for the output
    let encodings: BTreeMap<String, Encoding> = get_encoding(&scene).into_iter().collect();
    print!("{}", serde_json::to_string_pretty(&encodings)?);

    Ok(())
}
