// numeric constants that describe the exported tile grid
pub const ROW_COUNT: usize = 6;

/// Raw tile ids below this value are the first orientation of a sprite,
/// ids at or above it are the second orientation.
pub const SPRITE_THRESHOLD: i64 = 40;

/// Output code for an empty tile in the sprite encoding.
pub const EMPTY_SPRITE: i64 = 255;

/// The sprite reorder walks the grid with `SPRITE_STRIDE_FACTOR * cols`.
pub const SPRITE_STRIDE_FACTOR: usize = 2;

use serde::Deserialize;

/// Which remap a binary applies to the tile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 1-based tile ids shifted to 0-based, column-major order.
    Plain,
    /// Tile ids packed into even/odd sprite-pair codes.
    Sprite,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Sprite => "sprite",
        }
    }
}

/// A single tile layer as exported by Tiled.
///
/// Only `data` (the flat row-major tile array) is read; every other
/// field (name, width, opacity, properties, …) is ignored by serde.
#[derive(Debug, Deserialize)]
pub struct TileLayer {
    pub data: Vec<i64>,
}
