//! Instruction handlers and account contexts

pub mod decide_fee;
pub mod initialize;
pub mod on_liquidity_added;
pub mod set_fee_tiers;

pub use decide_fee::*;
pub use initialize::*;
pub use on_liquidity_added::*;
pub use set_fee_tiers::*;
