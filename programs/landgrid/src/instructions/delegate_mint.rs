use anchor_lang::prelude::*;
use crate::allocator;
use crate::errors::LandError;
use crate::instructions::batch_mint::{create_parcel_asset, MPL_CORE_ID};
use crate::state::{LandConfig, LandMap};

/// Same allocation semantics as BatchMint, but gated on the single delegated
/// minter instead of the admin authority.
#[derive(Accounts)]
pub struct DelegateMint<'info> {
    #[account(
        mut,
        constraint = minter.key() == land_config.minter @ LandError::Unauthorized
    )]
    pub minter: Signer<'info>,

    /// CHECK: Recipient of the parcel NFTs (not signer)
    pub recipient: UncheckedAccount<'info>,

    #[account(
        seeds = [LandConfig::SEED],
        bump = land_config.bump
    )]
    pub land_config: Account<'info, LandConfig>,

    /// LandMap address must match the one stored in land_config
    #[account(
        mut,
        constraint = land_map.key() == land_config.land_map @ LandError::Unauthorized
    )]
    pub land_map: AccountLoader<'info, LandMap>,

    /// Core collection - must match land_config.collection
    /// CHECK: Validated by constraint and Metaplex Core program
    #[account(
        mut,
        constraint = collection.key() == land_config.collection @ LandError::InvalidCollection
    )]
    pub collection: UncheckedAccount<'info>,

    /// CHECK: Metaplex Core program
    #[account(address = MPL_CORE_ID)]
    pub mpl_core_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, DelegateMint<'info>>,
    token_ids: Vec<u16>,
    width: u8,
    height: u8,
) -> Result<()> {
    require!(
        ctx.accounts.land_config.collection != Pubkey::default(),
        LandError::CollectionNotSet
    );
    require!(
        ctx.remaining_accounts.len() == token_ids.len(),
        LandError::AssetCountMismatch
    );

    {
        let mut land_map = ctx.accounts.land_map.load_mut()?;
        allocator::allocate(&mut land_map, &token_ids, width, height)?;
    }

    let uri_base = ctx.accounts.land_config.uri_base.clone();
    let config_bump = ctx.accounts.land_config.bump;

    for (asset, &token_id) in ctx.remaining_accounts.iter().zip(token_ids.iter()) {
        create_parcel_asset(
            &ctx.accounts.mpl_core_program.to_account_info(),
            asset,
            &ctx.accounts.collection.to_account_info(),
            &ctx.accounts.land_config.to_account_info(),
            &ctx.accounts.minter.to_account_info(),
            &ctx.accounts.recipient.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            token_id,
            &uri_base,
            config_bump,
        )?;
    }

    msg!(
        "Delegate minted {} parcels of {}x{} to {}",
        token_ids.len(),
        width,
        height,
        ctx.accounts.recipient.key()
    );

    Ok(())
}
