//! Global constants for the JIT defense program

// PDA seed constants
pub const GUARD_CONFIG_SEED: &[u8] = b"guard_config";
pub const WINDOW_AUDIT_SEED: &[u8] = b"window_audit";

// Ratio constants
/// Fixed-point scale for the added/active liquidity ratio (basis points)
pub const RATIO_SCALE_BPS: u128 = 10_000;

// Fee constants
/// Maximum number of tiers the guard config account can hold
pub const MAX_FEE_TIERS: usize = 16;

/// Maximum override fee in pips (hundredths of a basis point); 100%
pub const MAX_FEE_PIPS: u32 = 1_000_000;

/// Flag bit carried alongside a decided fee so the venue can distinguish
/// "override with fee F" from "no override". Sits above MAX_FEE_PIPS, so
/// the fee value and the flag never collide.
pub const OVERRIDE_FEE_FLAG: u32 = 0x40_0000;
