use std::env::var_os;
use std::error::Error;
use std::fs::copy;
use std::path::Path;

// Stage the embedded sensor configs where config.rs can include_str! them.
fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = var_os("OUT_DIR").expect("OUT_DIR not set");
    for name in ["mersi2.config.yaml"] {
        let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("etc").join(name);
        copy(&src, Path::new(&out_dir).join(name))?;
        println!("cargo:rerun-if-changed=etc/{name}");
    }
    Ok(())
}
