use anchor_lang::prelude::*;

pub const GRID_WIDTH: usize = 200;
pub const GRID_HEIGHT: usize = 100;
pub const BLOCK_WIDTH: usize = 40;
pub const BLOCK_HEIGHT: usize = 50;
pub const TOTAL_PARCELS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Flat occupancy table for the whole grid, indexed by token id.
///
/// `cells[id-1]` holds 0 for a free cell, the id itself for the origin of a
/// claimed rectangle, and the origin's id for every other cell of that
/// rectangle. Rectangle dimensions are stored at the origin only; a 1x1
/// parcel stores width = height = 0 (the default encoding for "no
/// extension"), larger parcels store their true dimensions.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct LandMap {
    pub cells: [u16; TOTAL_PARCELS],
    pub widths: [u8; TOTAL_PARCELS],
    pub heights: [u8; TOTAL_PARCELS],
    pub _padding: [u8; 8], // Align to 8 bytes
}

impl LandMap {
    pub const SIZE: usize = 8 + (2 * TOTAL_PARCELS) + TOTAL_PARCELS + TOTAL_PARCELS + 8; // 80016 bytes

    pub fn cell(&self, token_id: u16) -> u16 {
        self.cells[(token_id as usize) - 1]
    }

    pub fn set_cell(&mut self, token_id: u16, origin: u16) {
        self.cells[(token_id as usize) - 1] = origin;
    }

    pub fn is_free(&self, token_id: u16) -> bool {
        self.cell(token_id) == 0
    }

    pub fn is_origin(&self, token_id: u16) -> bool {
        self.cell(token_id) == token_id
    }

    /// Origin back-reference for a member cell; 0 for free cells and origins.
    pub fn rect_origin(&self, token_id: u16) -> u16 {
        let cell = self.cell(token_id);
        if cell == token_id {
            0
        } else {
            cell
        }
    }

    /// Stored rectangle dimensions; only meaningful at an origin.
    pub fn token_rect(&self, token_id: u16) -> (u8, u8) {
        let index = (token_id as usize) - 1;
        (self.widths[index], self.heights[index])
    }

    pub fn set_rect(&mut self, token_id: u16, width: u8, height: u8) {
        let index = (token_id as usize) - 1;
        self.widths[index] = width;
        self.heights[index] = height;
    }
}
