use anchor_lang::prelude::*;
use mpl_core::instructions::CreateV2CpiBuilder;
use crate::allocator;
use crate::errors::LandError;
use crate::state::{LandConfig, LandMap};

// Metaplex Core program ID
pub const MPL_CORE_ID: Pubkey = pubkey!("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d");

#[derive(Accounts)]
pub struct BatchMint<'info> {
    #[account(
        mut,
        constraint = authority.key() == land_config.authority @ LandError::Unauthorized
    )]
    pub authority: Signer<'info>,

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

/// Creates the Core asset representing one origin cell. Member cells get no
/// asset, so ownership queries on them fail at the asset level.
pub(crate) fn create_parcel_asset<'info>(
    mpl_core_program: &AccountInfo<'info>,
    asset: &AccountInfo<'info>,
    collection: &AccountInfo<'info>,
    land_config: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    token_id: u16,
    uri_base: &str,
    config_bump: u8,
) -> Result<()> {
    let name = format!("Parcel #{}", token_id);
    let uri = format!("{}{}", uri_base, token_id);

    // The LandConfig PDA is the collection authority
    let seeds: &[&[u8]] = &[LandConfig::SEED, &[config_bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    CreateV2CpiBuilder::new(mpl_core_program)
        .asset(asset)
        .collection(Some(collection))
        .authority(Some(land_config))
        .payer(payer)
        .owner(Some(owner))
        .system_program(system_program)
        .name(name)
        .uri(uri)
        .invoke_signed(signer_seeds)?;

    Ok(())
}

/// Administrative allocation path. Asset keypairs are passed as remaining
/// accounts, one signer per origin id, in the same order.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, BatchMint<'info>>,
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

    // Commit all rectangles before any asset is created; a failure on any
    // origin aborts the whole batch.
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
            &ctx.accounts.authority.to_account_info(),
            &ctx.accounts.recipient.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            token_id,
            &uri_base,
            config_bump,
        )?;
    }

    msg!(
        "Minted {} parcels of {}x{} to {}",
        token_ids.len(),
        width,
        height,
        ctx.accounts.recipient.key()
    );

    Ok(())
}
