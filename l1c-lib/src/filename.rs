use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    scene::{Band, SceneAttrs},
    Time,
};

// Timestamps carry a tenths-of-second digit that is always zero.
fn timestamp(time: &Time) -> String {
    format!("{}0Z", time.format_utc("%Y%m%dT%H%M%S"))
}

/// Create a PPS level-1c filename, e.g.
/// `S_NWC_mersi2_fy3d_12345_20090701T1216000Z_20090701T1227000Z.nc`.
///
/// Downstream consumers parse this pattern, so it is a fixed contract:
/// sensor, lowercased platform, orbit number as delivered (no re-formatting),
/// and start/end at second precision. When `band` is given its own times take
/// precedence over the scene-level ones; platform and orbit always come from
/// the scene.
///
/// # Errors
/// [Error::MissingAttr] if any of start time, end time, platform, or orbit
/// number is absent.
pub fn compose_filename(
    attrs: &SceneAttrs,
    out_dir: &Path,
    sensor: &str,
    band: Option<&Band>,
) -> Result<PathBuf> {
    let start = band
        .and_then(|b| b.start_time.clone())
        .or_else(|| attrs.start_time.clone())
        .ok_or(Error::MissingAttr("start_time"))?;
    let end = band
        .and_then(|b| b.end_time.clone())
        .or_else(|| attrs.end_time.clone())
        .ok_or(Error::MissingAttr("end_time"))?;
    let platform = attrs
        .platform
        .as_ref()
        .ok_or(Error::MissingAttr("platform"))?;
    let orbit = attrs
        .orbit_number
        .as_ref()
        .ok_or(Error::MissingAttr("orbit_number"))?;

    Ok(out_dir.join(format!(
        "S_NWC_{}_{}_{}_{}_{}.nc",
        sensor,
        platform.to_lowercase(),
        orbit,
        timestamp(&start),
        timestamp(&end),
    )))
}
