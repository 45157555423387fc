//! JIT liquidity defense engine
//!
//! Detects just-in-time liquidity provisioning inside a single settlement
//! window (one slot) and answers pre-trade fee queries with an override fee
//! when the window's additions cross governor-configured thresholds. The
//! host venue invokes two extension points via CPI: `on_liquidity_added`
//! after a liquidity modification commits and `decide_fee` before a trade's
//! economic effect is computed.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod state;

use instructions::*;
pub use state::*;

declare_id!("EYceZsMzbj5x4ZZrcXFgVCaXPggJj3VTWGfkMJHdGejd");

#[program]
pub mod jit_defense {
    use super::*;

    /// Create the guard configuration and bind the governing authority.
    /// The authority is fixed for the lifetime of the deployment.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Replace the fee tier table wholesale. Authority only.
    pub fn set_fee_tiers(ctx: Context<SetFeeTiers>, new_tiers: Vec<FeeTier>) -> Result<()> {
        instructions::set_fee_tiers(ctx, new_tiers)
    }

    /// Venue callback after a liquidity modification commits. Records
    /// additions that cover the active tick into the pool's window audit.
    pub fn on_liquidity_added(
        ctx: Context<OnLiquidityAdded>,
        tick_lower: i32,
        tick_upper: i32,
        liquidity_delta: i128,
        active_tick: i32,
    ) -> Result<()> {
        instructions::on_liquidity_added(ctx, tick_lower, tick_upper, liquidity_delta, active_tick)
    }

    /// Venue callback immediately before a trade executes. Returns the
    /// override fee in pips with the override flag bit set, or 0 when the
    /// pool's default fee should apply. `active_liquidity` is the venue's
    /// current in-range liquidity reading at the call site.
    pub fn decide_fee(ctx: Context<DecideFee>, active_liquidity: u128) -> Result<u32> {
        instructions::decide_fee(ctx, active_liquidity)
    }
}
