use anchor_lang::prelude::*;
use crate::allocator;
use crate::errors::LandError;
use crate::instructions::batch_mint::{create_parcel_asset, MPL_CORE_ID};
use crate::merkle;
use crate::state::{Campaign, ClaimReceipt, LandConfig, LandMap};

#[derive(Accounts)]
#[instruction(list_id: u64)]
pub struct WhitelistClaim<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        seeds = [LandConfig::SEED],
        bump = land_config.bump
    )]
    pub land_config: Account<'info, LandConfig>,

    #[account(
        mut,
        seeds = [Campaign::SEED, &list_id.to_le_bytes()],
        bump = campaign.bump
    )]
    pub campaign: Account<'info, Campaign>,

    /// LandMap address must match the one stored in land_config
    #[account(
        mut,
        constraint = land_map.key() == land_config.land_map @ LandError::Unauthorized
    )]
    pub land_map: AccountLoader<'info, LandMap>,

    /// One receipt per claimer per campaign; a second claim fails the init.
    #[account(
        init,
        payer = claimer,
        space = 8 + ClaimReceipt::INIT_SPACE,
        seeds = [ClaimReceipt::SEED, campaign.key().as_ref(), claimer.key().as_ref()],
        bump
    )]
    pub receipt: Account<'info, ClaimReceipt>,

    /// New Core asset - must be a signer (keypair generated client-side)
    #[account(mut)]
    pub asset: Signer<'info>,

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

pub fn handler(ctx: Context<WhitelistClaim>, _list_id: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    require!(
        ctx.accounts.land_config.collection != Pubkey::default(),
        LandError::CollectionNotSet
    );

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.campaign.check_window(now)?;

    let leaf = merkle::leaf(&ctx.accounts.claimer.key());
    require!(
        merkle::verify(&proof, ctx.accounts.campaign.merkle_root, leaf),
        LandError::InvalidProof
    );

    let width = ctx.accounts.campaign.width;
    let height = ctx.accounts.campaign.height;
    let token_id = ctx.accounts.campaign.draw()?;

    // Same commit path as the administrative mint; its errors propagate
    // unchanged and abort the draw with the rest of the transaction.
    {
        let mut land_map = ctx.accounts.land_map.load_mut()?;
        allocator::allocate(&mut land_map, &[token_id], width, height)?;
    }

    create_parcel_asset(
        &ctx.accounts.mpl_core_program.to_account_info(),
        &ctx.accounts.asset.to_account_info(),
        &ctx.accounts.collection.to_account_info(),
        &ctx.accounts.land_config.to_account_info(),
        &ctx.accounts.claimer.to_account_info(),
        &ctx.accounts.claimer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        token_id,
        &ctx.accounts.land_config.uri_base,
        ctx.accounts.land_config.bump,
    )?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.campaign = ctx.accounts.campaign.key();
    receipt.claimer = ctx.accounts.claimer.key();
    receipt.token_id = token_id;
    receipt.bump = ctx.bumps.receipt;

    msg!(
        "Parcel {} claimed from campaign {} by {}",
        token_id,
        ctx.accounts.campaign.list_id,
        receipt.claimer
    );

    Ok(())
}
