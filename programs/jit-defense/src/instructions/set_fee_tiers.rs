use anchor_lang::prelude::*;

use crate::constants::GUARD_CONFIG_SEED;
use crate::events::FeeTiersReplaced;
use crate::state::{FeeTier, GuardConfig};

#[derive(Accounts)]
pub struct SetFeeTiers<'info> {
    #[account(mut, seeds = [GUARD_CONFIG_SEED], bump = guard_config.bump)]
    pub guard_config: Account<'info, GuardConfig>,

    /// Must match the authority recorded at initialization
    pub authority: Signer<'info>,
}

pub fn set_fee_tiers(ctx: Context<SetFeeTiers>, new_tiers: Vec<FeeTier>) -> Result<()> {
    let guard_config = &mut ctx.accounts.guard_config;
    guard_config.replace_tiers(&ctx.accounts.authority.key(), new_tiers)?;

    emit!(FeeTiersReplaced {
        authority: ctx.accounts.authority.key(),
        tier_count: guard_config.tiers.len() as u8,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Fee tier table replaced: {} tiers", guard_config.tiers.len());

    Ok(())
}
