use anchor_lang::prelude::*;
use crate::state::LandConfig;
use crate::errors::LandError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = authority.key() == land_config.authority @ LandError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LandConfig::SEED],
        bump = land_config.bump
    )]
    pub land_config: Account<'info, LandConfig>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    uri_base: Option<String>,
    collection: Option<Pubkey>,
    minter: Option<Pubkey>,
    oracle_authority: Option<Pubkey>,
) -> Result<()> {
    let config = &mut ctx.accounts.land_config;

    if let Some(uri) = uri_base {
        config.uri_base = uri;
        msg!("Updated uri_base");
    }

    if let Some(coll) = collection {
        config.collection = coll;
        msg!("Updated collection to {}", coll);
    }

    if let Some(new_minter) = minter {
        config.minter = new_minter;
        msg!("Updated minter to {}", new_minter);
    }

    if let Some(oracle) = oracle_authority {
        config.oracle_authority = oracle;
        msg!("Updated oracle_authority to {}", oracle);
    }

    Ok(())
}
