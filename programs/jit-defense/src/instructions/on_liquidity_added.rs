use anchor_lang::prelude::*;

use crate::constants::WINDOW_AUDIT_SEED;
use crate::events::JitLiquidityRecorded;
use crate::logic::detection;
use crate::state::WindowAudit;

#[derive(Accounts)]
pub struct OnLiquidityAdded<'info> {
    /// CHECK: Pool account in the host venue; used only as the identity
    /// keying the audit entry, never deserialized.
    pub pool: UncheckedAccount<'info>,

    /// Created lazily on the pool's first reported addition
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + WindowAudit::INIT_SPACE,
        seeds = [WINDOW_AUDIT_SEED, pool.key().as_ref()],
        bump,
    )]
    pub window_audit: Account<'info, WindowAudit>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn on_liquidity_added(
    ctx: Context<OnLiquidityAdded>,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
    active_tick: i32,
) -> Result<()> {
    let window_audit = &mut ctx.accounts.window_audit;
    if window_audit.pool == Pubkey::default() {
        window_audit.pool = ctx.accounts.pool.key();
        window_audit.bump = ctx.bumps.window_audit;
    }

    let slot = Clock::get()?.slot;
    let recorded = detection::observe_liquidity_added(
        window_audit,
        slot,
        tick_lower,
        tick_upper,
        liquidity_delta,
        active_tick,
    )?;

    if let Some(window_total) = recorded {
        emit!(JitLiquidityRecorded {
            pool: ctx.accounts.pool.key(),
            slot,
            liquidity_delta: liquidity_delta as u128,
            window_total,
        });
    }

    Ok(())
}
