//! The functional core: index remaps from a flat tile array to the
//! array initializer order.
pub mod plain;
pub mod sprite;

use crate::error::RemapError;
use crate::model::{ROW_COUNT, Variant};

/// Runs the remap selected by `variant` over the raw tile data.
pub fn run(variant: Variant, data: &[i64]) -> Result<Vec<i64>, RemapError> {
    match variant {
        Variant::Plain => plain::remap(data),
        Variant::Sprite => sprite::remap(data),
    }
}

/// Number of columns in the re-layout: `len / ROW_COUNT`.
///
/// Lengths that are not a multiple of `ROW_COUNT` would silently skip
/// tiles, so they are rejected.
pub fn column_count(len: usize) -> Result<usize, RemapError> {
    if len % ROW_COUNT != 0 {
        return Err(RemapError::InvalidInput(format!(
            "tile count {} is not divisible by {}",
            len, ROW_COUNT
        )));
    }
    Ok(len / ROW_COUNT)
}

/// Walks `values` column by column: for every `x` in `0..cols` emit
/// `values[x]`, `values[x + stride]`, … while the index is in range.
pub fn gather(values: &[i64], cols: usize, stride: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(values.len());
    if stride == 0 {
        return out;
    }

    for x in 0..cols {
        for y in (x..values.len()).step_by(stride) {
            out.push(values[y]);
        }
    }
    out
}

/// Row-major to column-major reorder with no value transform.
pub fn transpose(values: &[i64]) -> Result<Vec<i64>, RemapError> {
    let cols = column_count(values.len())?;
    Ok(gather(values, cols, cols))
}
