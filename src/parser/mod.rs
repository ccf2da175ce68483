use serde_json::Value;

use crate::error::RemapError;
use crate::model::TileLayer;

/// Parse the whole input JSON string and return the first tile layer.
///
/// The Tiled file is expected to contain a top-level `layers` array whose
/// first entry carries a `data` array of integers. Nothing else in the
/// document is validated.
pub fn load_from_json(json: &str) -> Result<TileLayer, RemapError> {
    // Grab the entire file as a dynamic value first.
    let root: Value = serde_json::from_str(json)?;

    let layers = root
        .get("layers")
        .and_then(|v| v.as_array())
        .ok_or_else(|| invalid("file has no `layers` array"))?;

    let first = layers
        .first()
        .ok_or_else(|| invalid("`layers` array is empty"))?;

    if !first.get("data").is_some_and(Value::is_array) {
        return Err(invalid("layer 0 has no `data` array"));
    }

    Ok(serde_json::from_value(first.clone())?)
}

/// Shorthand for `load_from_json(json)?.data`.
pub fn load_tile_data(json: &str) -> Result<Vec<i64>, RemapError> {
    load_from_json(json).map(|layer| layer.data)
}

fn invalid(reason: &str) -> RemapError {
    RemapError::InvalidInput(reason.to_string())
}
