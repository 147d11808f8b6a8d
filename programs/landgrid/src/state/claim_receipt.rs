use anchor_lang::prelude::*;

/// One receipt per (campaign, claimer); the PDA init is what enforces
/// exactly-once claiming.
#[account]
#[derive(InitSpace)]
pub struct ClaimReceipt {
    pub campaign: Pubkey,
    pub claimer: Pubkey,
    pub token_id: u16,
    pub bump: u8,
}

impl ClaimReceipt {
    pub const SEED: &'static [u8] = b"receipt";
}
