//! Tiled map → packed sprite-pair codes.
fn main() -> anyhow::Result<()> {
    tilemap_remap::run(tilemap_remap::Variant::Sprite)
}
