use anchor_lang::prelude::*;

pub mod allocator;
pub mod errors;
pub mod merkle;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::RANDOM_WORDS_PER_BATCH;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod landgrid {
    use super::*;

    pub fn create_land_map(ctx: Context<CreateLandMap>) -> Result<()> {
        instructions::create_land_map::handler(ctx)
    }

    pub fn create_seed_pool(ctx: Context<CreateSeedPool>) -> Result<()> {
        instructions::create_seed_pool::handler(ctx)
    }

    pub fn initialize(ctx: Context<Initialize>, uri_base: String) -> Result<()> {
        instructions::initialize::handler(ctx, uri_base)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        uri_base: Option<String>,
        collection: Option<Pubkey>,
        minter: Option<Pubkey>,
        oracle_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, uri_base, collection, minter, oracle_authority)
    }

    pub fn submit_random_words(
        ctx: Context<SubmitRandomWords>,
        words: [[u8; 32]; RANDOM_WORDS_PER_BATCH],
    ) -> Result<()> {
        instructions::submit_random_words::handler(ctx, words)
    }

    pub fn batch_mint<'info>(
        ctx: Context<'_, '_, '_, 'info, BatchMint<'info>>,
        token_ids: Vec<u16>,
        width: u8,
        height: u8,
    ) -> Result<()> {
        instructions::batch_mint::handler(ctx, token_ids, width, height)
    }

    pub fn delegate_mint<'info>(
        ctx: Context<'_, '_, '_, 'info, DelegateMint<'info>>,
        token_ids: Vec<u16>,
        width: u8,
        height: u8,
    ) -> Result<()> {
        instructions::delegate_mint::handler(ctx, token_ids, width, height)
    }

    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        list_id: u64,
        width: u8,
        height: u8,
        mode: u8,
        start_time: i64,
        end_time: i64,
        merkle_root: [u8; 32],
        candidate_ids: Vec<u16>,
    ) -> Result<()> {
        instructions::create_campaign::handler(
            ctx,
            list_id,
            width,
            height,
            mode,
            start_time,
            end_time,
            merkle_root,
            candidate_ids,
        )
    }

    pub fn update_campaign(
        ctx: Context<UpdateCampaign>,
        list_id: u64,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<()> {
        instructions::update_campaign::handler(ctx, list_id, start_time, end_time)
    }

    pub fn whitelist_claim(
        ctx: Context<WhitelistClaim>,
        list_id: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::whitelist_claim::handler(ctx, list_id, proof)
    }
}
