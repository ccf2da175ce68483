//! Plain remap: 1-based editor tile ids become 0-based runtime ids,
//! laid out column by column.

use crate::error::RemapError;
use crate::processor::transpose;

/// Shift every tile id down by one and reorder the grid column-major.
///
/// No bounds checking is done, an empty tile (`0`) comes out as `-1`.
pub fn remap(data: &[i64]) -> Result<Vec<i64>, RemapError> {
    let shifted = data
        .iter()
        .map(|&tile| shift(tile))
        .collect::<Result<Vec<_>, _>>()?;
    transpose(&shifted)
}

/// 1-based editor id → 0-based runtime id.
pub fn shift(tile: i64) -> Result<i64, RemapError> {
    tile.checked_sub(1)
        .ok_or_else(|| RemapError::InvalidInput(format!("tile id {} out of range", tile)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_columns() {
        let data: Vec<i64> = (1..=12).collect();
        // x = 0 visits 0,2,4,…,10; x = 1 visits 1,3,…,11
        assert_eq!(
            remap(&data).unwrap(),
            vec![0, 2, 4, 6, 8, 10, 1, 3, 5, 7, 9, 11]
        );
    }

    #[test]
    fn test_empty_tile_becomes_minus_one() {
        assert_eq!(remap(&[0, 0, 0, 0, 0, 0]).unwrap(), vec![-1; 6]);
    }

    #[test]
    fn test_shifted_permutation() {
        let data: Vec<i64> = (0..48).map(|i| (i * 7) % 31).collect();
        let out = remap(&data).unwrap();
        assert_eq!(out.len(), data.len());

        let mut expected: Vec<i64> = data.iter().map(|v| v - 1).collect();
        let mut got = out.clone();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_shift_extremes() {
        assert_eq!(shift(i64::MAX), Ok(i64::MAX - 1));
        assert!(matches!(shift(i64::MIN), Err(RemapError::InvalidInput(_))));
    }

    #[test]
    fn test_remap_rejects_underflowing_tile() {
        let err = remap(&[i64::MIN, 1, 1, 1, 1, 1]).unwrap_err();
        assert!(
            err.to_string().contains("out of range"),
            "got error message: {err}"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(remap(&[]).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_rejects_ragged_length() {
        let err = remap(&[1, 2, 3, 4, 5, 6, 7]).unwrap_err();
        assert!(
            err.to_string().contains("not divisible by 6"),
            "got error message: {err}"
        );
    }
}
