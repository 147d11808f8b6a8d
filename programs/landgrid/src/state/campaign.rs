use anchor_lang::prelude::*;
use crate::errors::LandError;

/// A whitelist claim campaign: a merkle-gated, time-bounded pool of parcels
/// distributed in shuffled order. The token list and cursor have no read
/// instruction; a claimant learns their parcel only by drawing it.
#[account]
pub struct Campaign {
    pub list_id: u64,
    pub merkle_root: [u8; 32],
    pub start_time: i64,
    pub end_time: i64,
    pub width: u8,
    pub height: u8,
    /// Opaque campaign configuration flag, stored as given.
    pub mode: u8,
    pub bump: u8,
    pub cursor: u32,
    pub tokens: Vec<u16>,
}

impl Campaign {
    pub const SEED: &'static [u8] = b"campaign";

    pub fn space(token_count: usize) -> usize {
        8 + 8 + 32 + 8 + 8 + 1 + 1 + 1 + 1 + 4 + 4 + 2 * token_count
    }

    /// Half-open window check: claims are valid for start <= now < end.
    pub fn check_window(&self, now: i64) -> Result<()> {
        require!(now >= self.start_time, LandError::NotStarted);
        require!(now < self.end_time, LandError::Ended);
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor as usize
    }

    /// Draws the next token id from the shuffled list and advances the
    /// cursor.
    pub fn draw(&mut self) -> Result<u16> {
        let index = self.cursor as usize;
        require!(index < self.tokens.len(), LandError::CampaignExhausted);
        let token_id = self.tokens[index];
        self.cursor += 1;
        Ok(token_id)
    }
}

/// Fisher-Yates shuffle driven by one consumed seed per position: seed `i`
/// selects the swap partner for position `i` out of the unshuffled tail.
/// Requires exactly as many seeds as tokens.
pub fn shuffle(tokens: &mut [u16], seeds: &[[u8; 32]]) {
    let len = tokens.len();
    for i in 0..len {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&seeds[i][..8]);
        let word = u64::from_le_bytes(bytes);
        let j = i + (word % (len - i) as u64) as usize;
        tokens.swap(i, j);
    }
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

    fn assert_land_err<T: std::fmt::Debug>(res: Result<T>, want: LandError) {
        let want: anchor_lang::error::Error = want.into();
        assert_eq!(error_code(res.unwrap_err()), error_code(want));
    }

    fn seeds_from_words(words: &[u64]) -> Vec<[u8; 32]> {
        words
            .iter()
            .map(|w| {
                let mut seed = [0u8; 32];
                seed[..8].copy_from_slice(&w.to_le_bytes());
                seed
            })
            .collect()
    }

    fn campaign(start: i64, end: i64, tokens: Vec<u16>) -> Campaign {
        Campaign {
            list_id: 1,
            merkle_root: [0u8; 32],
            start_time: start,
            end_time: end,
            width: 1,
            height: 1,
            mode: 0,
            bump: 255,
            cursor: 0,
            tokens,
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut tokens: Vec<u16> = (1..=20).collect();
        let seeds = seeds_from_words(&[0xDEADBEEF; 20]);
        shuffle(&mut tokens, &seeds);
        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=20).collect::<Vec<u16>>());
    }

    #[test]
    fn test_shuffle_zero_seeds_is_identity() {
        let mut tokens: Vec<u16> = (1..=8).collect();
        let seeds = vec![[0u8; 32]; 8];
        shuffle(&mut tokens, &seeds);
        assert_eq!(tokens, (1..=8).collect::<Vec<u16>>());
    }

    #[test]
    fn test_shuffle_swap_partner_mod_remaining() {
        // Each seed value 1 swaps position i with i+1 (1 mod remaining tail).
        let mut tokens = vec![1u16, 2, 3, 4];
        let seeds = seeds_from_words(&[1, 1, 1, 1]);
        shuffle(&mut tokens, &seeds);
        assert_eq!(tokens, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let seeds = seeds_from_words(&[42, 7, 19, 3, 88, 11, 0, 64]);
        let mut a: Vec<u16> = (1..=8).collect();
        let mut b: Vec<u16> = (1..=8).collect();
        shuffle(&mut a, &seeds);
        shuffle(&mut b, &seeds);
        assert_eq!(a, b);
    }

    #[test]
    fn test_window_half_open() {
        let c = campaign(100, 200, vec![1]);
        assert_land_err(c.check_window(99), LandError::NotStarted);
        assert!(c.check_window(100).is_ok());
        assert!(c.check_window(199).is_ok());
        assert_land_err(c.check_window(200), LandError::Ended);
        assert_land_err(c.check_window(300), LandError::Ended);
    }

    #[test]
    fn test_draw_in_order_until_exhausted() {
        let mut c = campaign(0, 1000, vec![5, 9, 2]);
        assert_eq!(c.remaining(), 3);
        assert_eq!(c.draw().unwrap(), 5);
        assert_eq!(c.draw().unwrap(), 9);
        assert_eq!(c.remaining(), 1);
        assert_eq!(c.draw().unwrap(), 2);
        assert_eq!(c.remaining(), 0);
        assert_land_err(c.draw(), LandError::CampaignExhausted);
    }
}
