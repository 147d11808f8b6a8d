use anchor_lang::prelude::*;
use crate::state::LandMap;

/// CreateLandMap uses the `zero` constraint because LandMap (~80KB) exceeds
/// Solana's 10KB limit for account creation in CPI (inner instructions).
///
/// The client must pre-create the account with:
/// 1. SystemProgram.createAccount (with program as owner, correct size)
/// 2. Then call this instruction to initialize it
#[derive(Accounts)]
pub struct CreateLandMap<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The LandMap account must be pre-created by the client with:
    /// - owner = program ID
    /// - space = LandMap::SIZE (80016 bytes)
    /// - data = all zeros
    #[account(zero)]
    pub land_map: AccountLoader<'info, LandMap>,
}

pub fn handler(ctx: Context<CreateLandMap>) -> Result<()> {
    // Initialize the account (this marks the discriminator)
    let _land_map = ctx.accounts.land_map.load_init()?;
    // cells array is already zeroed from account creation
    msg!("LandMap initialized at {}", ctx.accounts.land_map.key());
    Ok(())
}
