//! Event definitions

use anchor_lang::prelude::*;

/// Event emitted when the authority replaces the fee tier table
#[event]
pub struct FeeTiersReplaced {
    pub authority: Pubkey,
    pub tier_count: u8,
    pub timestamp: i64,
}

/// Event emitted when a liquidity addition lands in the window audit
#[event]
pub struct JitLiquidityRecorded {
    pub pool: Pubkey,
    pub slot: u64,
    pub liquidity_delta: u128,
    pub window_total: u128,
}

/// Event emitted when a pre-trade query resolves to an override fee
#[event]
pub struct FeeOverrideDecided {
    pub pool: Pubkey,
    pub slot: u64,
    pub ratio_bps: u128,
    pub fee_pips: u32,
}
