//! Tiled map → 0-based column-major tile ids.
fn main() -> anyhow::Result<()> {
    tilemap_remap::run(tilemap_remap::Variant::Plain)
}
