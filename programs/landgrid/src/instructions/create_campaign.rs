use anchor_lang::prelude::*;
use crate::errors::LandError;
use crate::state::{campaign, Campaign, LandConfig, SeedPool};

#[derive(Accounts)]
#[instruction(
    list_id: u64,
    width: u8,
    height: u8,
    mode: u8,
    start_time: i64,
    end_time: i64,
    merkle_root: [u8; 32],
    candidate_ids: Vec<u16>
)]
pub struct CreateCampaign<'info> {
    #[account(
        mut,
        constraint = authority.key() == land_config.authority @ LandError::Unauthorized
    )]
    pub authority: Signer<'info>,

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

    /// A reused list_id fails here: the PDA for it already exists.
    #[account(
        init,
        payer = authority,
        space = Campaign::space(candidate_ids.len()),
        seeds = [Campaign::SEED, &list_id.to_le_bytes()],
        bump
    )]
    pub campaign: Account<'info, Campaign>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateCampaign>,
    list_id: u64,
    width: u8,
    height: u8,
    mode: u8,
    start_time: i64,
    end_time: i64,
    merkle_root: [u8; 32],
    mut candidate_ids: Vec<u16>,
) -> Result<()> {
    require!(width > 0 && height > 0, LandError::InvalidDimensions);

    // One seed per candidate: consume them now and shuffle the assignment at
    // creation time, before any claimant can observe the list.
    {
        let mut pool = ctx.accounts.seed_pool.load_mut()?;
        let count = candidate_ids.len();
        let start = pool.consume(count as u32)? as usize;
        campaign::shuffle(&mut candidate_ids, &pool.seeds[start..start + count]);
    }

    let campaign = &mut ctx.accounts.campaign;
    campaign.list_id = list_id;
    campaign.merkle_root = merkle_root;
    campaign.start_time = start_time;
    campaign.end_time = end_time;
    campaign.width = width;
    campaign.height = height;
    campaign.mode = mode;
    campaign.bump = ctx.bumps.campaign;
    campaign.cursor = 0;
    campaign.tokens = candidate_ids;

    msg!(
        "Campaign {} created with {} parcels of {}x{}",
        list_id,
        campaign.tokens.len(),
        width,
        height
    );

    Ok(())
}
