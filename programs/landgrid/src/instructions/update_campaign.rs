use anchor_lang::prelude::*;
use crate::errors::LandError;
use crate::state::{Campaign, LandConfig};

#[derive(Accounts)]
#[instruction(list_id: u64)]
pub struct UpdateCampaign<'info> {
    #[account(
        constraint = authority.key() == land_config.authority @ LandError::Unauthorized
    )]
    pub authority: Signer<'info>,

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
}

/// Window bounds are overwritten as given; no ordering validation between
/// start and end.
pub fn handler(
    ctx: Context<UpdateCampaign>,
    list_id: u64,
    start_time: Option<i64>,
    end_time: Option<i64>,
) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;

    if let Some(start) = start_time {
        campaign.start_time = start;
        msg!("Campaign {} start_time set to {}", list_id, start);
    }

    if let Some(end) = end_time {
        campaign.end_time = end;
        msg!("Campaign {} end_time set to {}", list_id, end);
    }

    Ok(())
}
