use anchor_lang::prelude::*;
use crate::errors::LandError;

/// VRF deliveries arrive in fixed batches, so the pool length is always a
/// multiple of this.
pub const RANDOM_WORDS_PER_BATCH: usize = 16;
pub const MAX_SEEDS: usize = 4096;

/// Append-only log of oracle-delivered random words plus a consumption
/// cursor. Words are handed out in order and never reused.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct SeedPool {
    pub seeds: [[u8; 32]; MAX_SEEDS],
    pub total: u32,
    pub consumed: u32,
}

impl SeedPool {
    pub const SIZE: usize = 8 + (32 * MAX_SEEDS) + 4 + 4; // 131088 bytes

    pub fn remaining(&self) -> u32 {
        self.total - self.consumed
    }

    pub fn append(&mut self, words: &[[u8; 32]; RANDOM_WORDS_PER_BATCH]) -> Result<()> {
        let total = self.total as usize;
        require!(
            total + RANDOM_WORDS_PER_BATCH <= MAX_SEEDS,
            LandError::SeedPoolFull
        );
        self.seeds[total..total + RANDOM_WORDS_PER_BATCH].copy_from_slice(words);
        self.total += RANDOM_WORDS_PER_BATCH as u32;
        Ok(())
    }

    /// Advances the cursor past `count` words and returns the index of the
    /// first one. The caller reads `seeds[start..start + count]`.
    pub fn consume(&mut self, count: u32) -> Result<u32> {
        require!(self.remaining() >= count, LandError::InsufficientSeeds);
        let start = self.consumed;
        self.consumed += count;
        Ok(start)
    }
}
