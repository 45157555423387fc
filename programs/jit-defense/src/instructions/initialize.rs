use anchor_lang::prelude::*;

use crate::constants::GUARD_CONFIG_SEED;
use crate::state::GuardConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + GuardConfig::INIT_SPACE,
        seeds = [GUARD_CONFIG_SEED],
        bump,
    )]
    pub guard_config: Account<'info, GuardConfig>,

    /// Authority that will control the fee tier table. Must sign so the
    /// binding cannot be claimed on someone else's behalf.
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let guard_config = &mut ctx.accounts.guard_config;
    guard_config.initialize(ctx.accounts.authority.key(), ctx.bumps.guard_config);

    msg!("Guard config initialized, authority: {}", guard_config.authority);

    Ok(())
}
