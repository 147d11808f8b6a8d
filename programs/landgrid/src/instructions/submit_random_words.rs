use anchor_lang::prelude::*;
use crate::state::{LandConfig, SeedPool, RANDOM_WORDS_PER_BATCH};
use crate::errors::LandError;

/// Delivery path for the verifiable-randomness oracle. The oracle authority
/// submits one fixed-size batch per fulfillment, so the pool length is
/// always a multiple of RANDOM_WORDS_PER_BATCH.
#[derive(Accounts)]
pub struct SubmitRandomWords<'info> {
    #[account(
        constraint = oracle_authority.key() == land_config.oracle_authority @ LandError::Unauthorized
    )]
    pub oracle_authority: Signer<'info>,

    #[account(
        seeds = [LandConfig::SEED],
        bump = land_config.bump
    )]
    pub land_config: Account<'info, LandConfig>,

    /// SeedPool address must match the one stored in land_config
    #[account(
        mut,
        constraint = seed_pool.key() == land_config.seed_pool @ LandError::Unauthorized
    )]
    pub seed_pool: AccountLoader<'info, SeedPool>,
}

pub fn handler(
    ctx: Context<SubmitRandomWords>,
    words: [[u8; 32]; RANDOM_WORDS_PER_BATCH],
) -> Result<()> {
    let mut pool = ctx.accounts.seed_pool.load_mut()?;
    pool.append(&words)?;
    msg!(
        "Seed pool holds {} words, {} consumed",
        pool.total,
        pool.consumed
    );
    Ok(())
}
