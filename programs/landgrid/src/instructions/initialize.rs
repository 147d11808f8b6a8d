use anchor_lang::prelude::*;
use crate::state::{LandConfig, LandMap, SeedPool};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + LandConfig::INIT_SPACE,
        seeds = [LandConfig::SEED],
        bump
    )]
    pub land_config: Account<'info, LandConfig>,

    /// LandMap must be created first via create_land_map instruction.
    /// Not a PDA - uses keypair account due to 10KB CPI limit for large accounts.
    pub land_map: AccountLoader<'info, LandMap>,

    /// SeedPool must be created first via create_seed_pool instruction.
    pub seed_pool: AccountLoader<'info, SeedPool>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, uri_base: String) -> Result<()> {
    let config = &mut ctx.accounts.land_config;

    config.authority = ctx.accounts.authority.key();
    config.minter = Pubkey::default(); // Set via update_config
    config.oracle_authority = ctx.accounts.authority.key();
    config.land_map = ctx.accounts.land_map.key();
    config.seed_pool = ctx.accounts.seed_pool.key();
    config.collection = Pubkey::default(); // Set via update_config
    config.uri_base = uri_base;
    config.bump = ctx.bumps.land_config;

    msg!(
        "Land grid initialized, map {} seed pool {}",
        config.land_map,
        config.seed_pool
    );
    Ok(())
}
