//! Decision path: map the window's added/active liquidity ratio through the
//! tier table to a fee override.
//!
//! This is a single-shot, synchronous decision. Arithmetic failures abort
//! the enclosing trade; a wrapped or truncated ratio could understate JIT
//! activity and defeat the protection.

use anchor_lang::prelude::*;
use ethnum::U256;

use crate::constants::{OVERRIDE_FEE_FLAG, RATIO_SCALE_BPS};
use crate::error::JitDefenseError;
use crate::state::{GuardConfig, WindowAudit};

/// Outcome of a pre-trade query that resolved to an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeDecision {
    pub ratio_bps: u128,
    pub fee_pips: u32,
}

/// Added/active liquidity ratio in basis points. The multiplication is
/// widened to 256 bits before dividing; a quotient that does not narrow
/// back into 128 bits is a hard failure. Caller guarantees
/// `active_liquidity > 0`.
pub fn jit_ratio_bps(added_liquidity: u128, active_liquidity: u128) -> Result<u128> {
    let scaled = U256::from(added_liquidity)
        .checked_mul(U256::from(RATIO_SCALE_BPS))
        .ok_or(JitDefenseError::MathOverflow)?;
    let ratio = scaled / U256::from(active_liquidity);
    require!(ratio <= U256::from(u128::MAX), JitDefenseError::MathOverflow);
    Ok(ratio.as_u128())
}

/// The fee decision pipeline of the pre-trade callback:
/// no window activity or zero active liquidity resolves to no override,
/// anything else runs the ratio through the tier table.
pub fn decide_fee_override(
    audit: Option<&WindowAudit>,
    config: &GuardConfig,
    current_slot: u64,
    active_liquidity: u128,
) -> Result<Option<FeeDecision>> {
    let added = match audit {
        Some(audit) => audit.added_in_window(current_slot),
        None => 0,
    };
    if added == 0 {
        return Ok(None);
    }
    // Zero active liquidity: no trade to protect, not an error
    if active_liquidity == 0 {
        return Ok(None);
    }
    let ratio_bps = jit_ratio_bps(added, active_liquidity)?;
    Ok(config
        .lookup(ratio_bps)
        .map(|fee_pips| FeeDecision { ratio_bps, fee_pips }))
}

/// Tag a decided fee with the override flag bit for the venue.
pub fn with_override_flag(fee_pips: u32) -> u32 {
    fee_pips | OVERRIDE_FEE_FLAG
}
