use anchor_lang::prelude::*;
use crate::state::SeedPool;

/// Same pattern as CreateLandMap: SeedPool (~128KB) must be pre-created by
/// the client and is only stamped with its discriminator here.
#[derive(Accounts)]
pub struct CreateSeedPool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The SeedPool account must be pre-created by the client with:
    /// - owner = program ID
    /// - space = SeedPool::SIZE (131088 bytes)
    /// - data = all zeros
    #[account(zero)]
    pub seed_pool: AccountLoader<'info, SeedPool>,
}

pub fn handler(ctx: Context<CreateSeedPool>) -> Result<()> {
    let _seed_pool = ctx.accounts.seed_pool.load_init()?;
    msg!("SeedPool initialized at {}", ctx.accounts.seed_pool.key());
    Ok(())
}
