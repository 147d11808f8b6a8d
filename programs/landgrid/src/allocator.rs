use anchor_lang::prelude::*;

use crate::errors::LandError;
use crate::state::{LandMap, GRID_HEIGHT, GRID_WIDTH, TOTAL_PARCELS};
use crate::utils::{to_token_id, to_xy};

/// Per-origin checks, in order: id is at least 1, the whole rectangle lies
/// inside the grid, and every covered cell is free. Each failure has its own
/// error so callers can tell the causes apart.
pub fn validate_rect(map: &LandMap, token_id: u16, width: u8, height: u8) -> Result<()> {
    require!(token_id >= 1, LandError::InvalidTokenId);
    require!((token_id as usize) <= TOTAL_PARCELS, LandError::OutOfBounds);

    let (x, y) = to_xy(token_id);
    require!(
        (x as usize) + (width as usize) - 1 <= GRID_WIDTH,
        LandError::OutOfBounds
    );
    require!(
        (y as usize) + (height as usize) - 1 <= GRID_HEIGHT,
        LandError::OutOfBounds
    );

    for dy in 0..height {
        for dx in 0..width {
            let cell_id = to_token_id(x + dx, y + dy);
            require!(map.is_free(cell_id), LandError::NotAvailable);
        }
    }

    Ok(())
}

/// Marks every covered cell with the origin id and records the rectangle at
/// the origin. A 1x1 claim stores width = height = 0.
fn commit_rect(map: &mut LandMap, token_id: u16, width: u8, height: u8) {
    let (x, y) = to_xy(token_id);
    for dy in 0..height {
        for dx in 0..width {
            map.set_cell(to_token_id(x + dx, y + dy), token_id);
        }
    }
    if width == 1 && height == 1 {
        map.set_rect(token_id, 0, 0);
    } else {
        map.set_rect(token_id, width, height);
    }
}

fn clear_rect(map: &mut LandMap, token_id: u16) {
    let (mut width, mut height) = map.token_rect(token_id);
    if width == 0 && height == 0 {
        width = 1;
        height = 1;
    }
    let (x, y) = to_xy(token_id);
    for dy in 0..height {
        for dx in 0..width {
            map.set_cell(to_token_id(x + dx, y + dy), 0);
        }
    }
    map.set_rect(token_id, 0, 0);
}

/// Commits a batch of rectangles of one size, in order. Any failure undoes
/// the rectangles already committed in this call, so a failed batch leaves
/// the map untouched. Validating against the partially committed map is what
/// catches overlap between rectangles of the same batch.
pub fn allocate(map: &mut LandMap, token_ids: &[u16], width: u8, height: u8) -> Result<()> {
    require!(width >= 1 && height >= 1, LandError::InvalidDimensions);

    for (done, &token_id) in token_ids.iter().enumerate() {
        if let Err(err) = validate_rect(map, token_id, width, height) {
            for &committed in &token_ids[..done] {
                clear_rect(map, committed);
            }
            return Err(err);
        }
        commit_rect(map, token_id, width, height);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            e => panic!("unexpected error: {:?}", e),
        }
    }

    fn assert_land_err(res: Result<()>, want: LandError) {
        let want: anchor_lang::error::Error = want.into();
        assert_eq!(error_code(res.unwrap_err()), error_code(want));
    }

    fn empty_map() -> Box<LandMap> {
        Box::new(LandMap {
            cells: [0; TOTAL_PARCELS],
            widths: [0; TOTAL_PARCELS],
            heights: [0; TOTAL_PARCELS],
            _padding: [0; 8],
        })
    }

    fn assert_all_free(map: &LandMap) {
        for id in 1..=(TOTAL_PARCELS as u16) {
            assert!(map.is_free(id), "cell {} should be free", id);
        }
    }

    #[test]
    fn test_single_cell_claim_uses_degenerate_rect() {
        let mut map = empty_map();
        allocate(&mut map, &[9527], 1, 1).unwrap();
        assert!(!map.is_free(9527));
        assert!(map.is_origin(9527));
        assert_eq!(map.rect_origin(9527), 0);
        assert_eq!(map.token_rect(9527), (0, 0));
    }

    #[test]
    fn test_multi_cell_claim_sets_member_backrefs() {
        let mut map = empty_map();
        allocate(&mut map, &[83], 3, 3).unwrap();
        assert_eq!(map.token_rect(83), (3, 3));
        assert_eq!(map.rect_origin(83), 0);
        let (x, y) = to_xy(83);
        for dy in 0..3u8 {
            for dx in 0..3u8 {
                let cell_id = to_token_id(x + dx, y + dy);
                assert!(!map.is_free(cell_id));
                if cell_id != 83 {
                    assert_eq!(map.rect_origin(cell_id), 83);
                    assert!(!map.is_origin(cell_id));
                }
            }
        }
    }

    #[test]
    fn test_vertical_claim_spans_rows() {
        let mut map = empty_map();
        allocate(&mut map, &[2], 1, 2).unwrap();
        assert_eq!(map.token_rect(2), (1, 2));
        // The cell directly below id 2 is id 42 (40-wide block rows).
        assert_eq!(map.rect_origin(42), 2);
    }

    #[test]
    fn test_zero_token_id_is_invalid() {
        let mut map = empty_map();
        assert_land_err(allocate(&mut map, &[0], 1, 1), LandError::InvalidTokenId);
    }

    #[test]
    fn test_token_id_past_grid_is_out_of_bounds() {
        let mut map = empty_map();
        assert_land_err(allocate(&mut map, &[20001], 1, 1), LandError::OutOfBounds);
    }

    #[test]
    fn test_rect_overhanging_edge_is_out_of_bounds() {
        let mut map = empty_map();
        // Bottom row: 1x1 fits but any vertical extension does not.
        assert_land_err(allocate(&mut map, &[19999], 1, 2), LandError::OutOfBounds);
        assert_land_err(allocate(&mut map, &[11962], 1, 2), LandError::OutOfBounds);
        // Right edge: 3 wide overhangs the last column.
        assert_land_err(allocate(&mut map, &[8039], 3, 1), LandError::OutOfBounds);
        assert_all_free(&map);
        allocate(&mut map, &[19999], 1, 1).unwrap();
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut map = empty_map();
        assert_land_err(allocate(&mut map, &[1], 0, 1), LandError::InvalidDimensions);
        assert_land_err(allocate(&mut map, &[1], 1, 0), LandError::InvalidDimensions);
    }

    #[test]
    fn test_reclaim_fails_and_leaves_first_claim_intact() {
        let mut map = empty_map();
        allocate(&mut map, &[83], 3, 3).unwrap();
        assert_land_err(allocate(&mut map, &[83], 3, 3), LandError::NotAvailable);
        // Any rectangle touching a claimed cell fails too.
        assert_land_err(allocate(&mut map, &[84], 1, 1), LandError::NotAvailable);
        assert_eq!(map.token_rect(83), (3, 3));
        assert!(map.is_origin(83));
    }

    #[test]
    fn test_batch_mints_multiple_rects() {
        let mut map = empty_map();
        allocate(&mut map, &[1, 11961, 8040, 20000], 1, 1).unwrap();
        for id in [1u16, 11961, 8040, 20000] {
            assert!(map.is_origin(id));
            assert_eq!(map.token_rect(id), (0, 0));
        }
        allocate(&mut map, &[83, 92, 443, 452], 9, 9).unwrap();
        assert_eq!(map.token_rect(92), (9, 9));
    }

    #[test]
    fn test_failed_batch_rolls_back_everything() {
        let mut map = empty_map();
        // 83 at 3x1 covers 84 and 85, so the batch self-overlaps.
        assert_land_err(
            allocate(&mut map, &[83, 84, 85], 3, 1),
            LandError::NotAvailable,
        );
        assert_all_free(&map);

        // A later failure also undoes earlier successes in the batch.
        assert_land_err(
            allocate(&mut map, &[2, 19999, 11962, 8039], 1, 2),
            LandError::OutOfBounds,
        );
        assert_all_free(&map);
    }
}
