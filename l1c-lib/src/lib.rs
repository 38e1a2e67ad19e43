//! MERSI-2 level-1c preparation library.
//!
//! Utilities for turning FY-3D/MERSI-2 swath metadata into the form expected
//! by the NWC SAF PPS level-1c NetCDF products: per-variable encoding policy,
//! canonical product filenames, and scene/band header attribute
//! normalization. Reading the level-1 input and writing the NetCDF output are
//! left to the surrounding pipeline.
//!
//! # Reference
//! NWC SAF/PPS "Data Output Format" document for the level-1c product family.
//!
mod encoding;
mod error;
mod filename;
mod header;
mod scene;
mod time;

pub mod config;

pub use encoding::*;
pub use error::*;
pub use filename::*;
pub use header::*;
pub use scene::*;
pub use time::*;
