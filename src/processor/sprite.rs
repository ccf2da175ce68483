//! Sprite-pair remap.
//!
//! Each sprite has two orientations drawn as separate tiles in the
//! tileset: ids `1..SPRITE_THRESHOLD` are the first orientation and ids
//! from `SPRITE_THRESHOLD + 1` on are the second. Both are packed into one
//! code space, first orientation on even codes and second on odd codes.

use crate::error::RemapError;
use crate::model::{EMPTY_SPRITE, SPRITE_STRIDE_FACTOR, SPRITE_THRESHOLD};
use crate::processor::{column_count, gather};

/// Packed code for a single raw tile id.
///
/// Ids whose code does not fit in an `i64` are rejected.
pub fn encode(tile: i64) -> Result<i64, RemapError> {
    let code = if tile == 0 {
        Some(EMPTY_SPRITE)
    } else if tile < SPRITE_THRESHOLD {
        tile.checked_sub(1).and_then(|t| t.checked_mul(2))
    } else {
        tile.checked_sub(SPRITE_THRESHOLD + 1)
            .and_then(|t| t.checked_mul(2))
            .and_then(|t| t.checked_add(1))
    };
    code.ok_or_else(|| RemapError::InvalidInput(format!("tile id {} out of range", tile)))
}

/// Encode every tile, then walk the grid with a stride of `2 * cols`.
///
/// `cols` is derived from the original length, so only every second row
/// of the 6-row grid is visited and the result holds `len / 2` codes.
/// A step of `cols / 2` (half the row stride) would instead revisit
/// positions and emit about `23 * len / 12` codes.
pub fn remap(data: &[i64]) -> Result<Vec<i64>, RemapError> {
    let cols = column_count(data.len())?;
    let encoded = data
        .iter()
        .copied()
        .map(encode)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(gather(&encoded, cols, cols * SPRITE_STRIDE_FACTOR))
}
