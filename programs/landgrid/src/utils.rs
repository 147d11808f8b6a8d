use crate::state::{BLOCK_HEIGHT, BLOCK_WIDTH, GRID_WIDTH};

/// Cells covered by one horizontal band of blocks (a full block row).
const BAND_CELLS: usize = GRID_WIDTH * BLOCK_HEIGHT; // 10000
const BLOCK_CELLS: usize = BLOCK_WIDTH * BLOCK_HEIGHT; // 2000

/// Grid coordinate of a token id (both 1-based).
///
/// The grid is tiled into 40x50 blocks laid out in a 5x2 block grid. Ids run
/// x-first within a block, then block by block across a band, then band by
/// band. Callers must pass an id in [1, TOTAL_PARCELS].
pub fn to_xy(token_id: u16) -> (u8, u8) {
    let i = (token_id as usize) - 1;
    let x = i % BAND_CELLS / BLOCK_CELLS * BLOCK_WIDTH + i % BLOCK_WIDTH + 1;
    let y = i / BAND_CELLS * BLOCK_HEIGHT + i % BLOCK_CELLS / BLOCK_WIDTH + 1;
    (x as u8, y as u8)
}

/// Exact inverse of [`to_xy`] over the full grid.
pub fn to_token_id(x: u8, y: u8) -> u16 {
    let x = (x as usize) - 1;
    let y = (y as usize) - 1;
    let id = y / BLOCK_HEIGHT * BAND_CELLS
        + x / BLOCK_WIDTH * BLOCK_CELLS
        + y % BLOCK_HEIGHT * BLOCK_WIDTH
        + x % BLOCK_WIDTH
        + 1;
    id as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TOTAL_PARCELS;

    #[test]
    fn test_to_xy_first_block() {
        assert_eq!(to_xy(1), (1, 1));
        assert_eq!(to_xy(2), (2, 1));
        assert_eq!(to_xy(40), (40, 1));
        // Id 41 wraps to the next row of the same block, not the next block.
        assert_eq!(to_xy(41), (1, 2));
        assert_eq!(to_xy(2000), (40, 50));
    }

    #[test]
    fn test_to_xy_block_and_band_boundaries() {
        // First cell of the second block in the top band.
        assert_eq!(to_xy(2001), (41, 1));
        // Top-right corner of the grid.
        assert_eq!(to_xy(8040), (200, 1));
        // First cell of the lower band.
        assert_eq!(to_xy(10001), (1, 51));
        // Bottom-left and bottom-right corners.
        assert_eq!(to_xy(11961), (1, 100));
        assert_eq!(to_xy(20000), (200, 100));
    }

    #[test]
    fn test_to_xy_interior_points() {
        assert_eq!(to_xy(83), (3, 3));
        assert_eq!(to_xy(9527), (167, 39));
        assert_eq!(to_xy(19999), (199, 100));
    }

    #[test]
    fn test_to_token_id_known_points() {
        assert_eq!(to_token_id(1, 1), 1);
        assert_eq!(to_token_id(41, 1), 2001);
        assert_eq!(to_token_id(200, 1), 8040);
        assert_eq!(to_token_id(1, 51), 10001);
        assert_eq!(to_token_id(1, 100), 11961);
        assert_eq!(to_token_id(200, 100), 20000);
    }

    #[test]
    fn test_codec_roundtrip_full_domain() {
        for id in 1..=(TOTAL_PARCELS as u16) {
            let (x, y) = to_xy(id);
            assert!(x >= 1 && (x as usize) <= 200);
            assert!(y >= 1 && (y as usize) <= 100);
            assert_eq!(to_token_id(x, y), id, "id {} did not roundtrip", id);
        }
    }
}
