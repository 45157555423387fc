use anchor_lang::prelude::*;

use crate::constants::{GUARD_CONFIG_SEED, WINDOW_AUDIT_SEED};
use crate::events::FeeOverrideDecided;
use crate::logic::decision;
use crate::state::{GuardConfig, WindowAudit};

#[derive(Accounts)]
pub struct DecideFee<'info> {
    /// CHECK: Pool account in the host venue; used only as the identity
    /// keying the audit entry, never deserialized.
    pub pool: UncheckedAccount<'info>,

    #[account(seeds = [GUARD_CONFIG_SEED], bump = guard_config.bump)]
    pub guard_config: Account<'info, GuardConfig>,

    /// Absent until the pool's first reported addition; treated as an
    /// empty window when missing
    #[account(seeds = [WINDOW_AUDIT_SEED, pool.key().as_ref()], bump)]
    pub window_audit: Option<Account<'info, WindowAudit>>,
}

pub fn decide_fee(ctx: Context<DecideFee>, active_liquidity: u128) -> Result<u32> {
    let slot = Clock::get()?.slot;

    let decision = decision::decide_fee_override(
        ctx.accounts.window_audit.as_deref(),
        &ctx.accounts.guard_config,
        slot,
        active_liquidity,
    )?;

    match decision {
        Some(decision) => {
            emit!(FeeOverrideDecided {
                pool: ctx.accounts.pool.key(),
                slot,
                ratio_bps: decision.ratio_bps,
                fee_pips: decision.fee_pips,
            });
            msg!(
                "JIT override: ratio {} bps, fee {} pips",
                decision.ratio_bps,
                decision.fee_pips
            );
            Ok(decision::with_override_flag(decision.fee_pips))
        }
        None => Ok(0),
    }
}
