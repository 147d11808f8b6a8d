use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct LandConfig {
    pub authority: Pubkey,
    /// The single delegated minter (the only non-admin caller of the
    /// allocator's direct path). Default pubkey means no minter is set.
    pub minter: Pubkey,
    /// Signer allowed to deliver random word batches (VRF fulfillment).
    pub oracle_authority: Pubkey,
    pub land_map: Pubkey,   // Address of the LandMap account (not a PDA due to 10KB CPI limit)
    pub seed_pool: Pubkey,  // Address of the SeedPool account (not a PDA due to 10KB CPI limit)
    pub collection: Pubkey, // Metaplex Core collection address for parcel NFTs
    #[max_len(128)]
    pub uri_base: String,
    pub bump: u8,
}

impl LandConfig {
    pub const SEED: &'static [u8] = b"land_config";
}
