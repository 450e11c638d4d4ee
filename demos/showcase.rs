//! Windowed showcase demo
//!
//! Usage: `showcase <model.glb>`. Scroll with the mouse wheel to bring the
//! section into view, drag with the left button to rotate the model, press
//! `e` to jump straight to the section. Set `PODIUM_REDUCED_MOTION=1` to
//! skip animated transitions.

use podium_view::{run, ViewerConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let asset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("model.glb"));
    let reduced_motion = std::env::var("PODIUM_REDUCED_MOTION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    log::info!("starting showcase with asset {}", asset_path.display());
    run(ViewerConfig {
        asset_path,
        reduced_motion,
    })?;
    Ok(())
}
