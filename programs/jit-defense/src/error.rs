//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum JitDefenseError {
    // Authority errors
    #[msg("Caller is not the configured authority")]
    Unauthorized,

    // Math errors
    #[msg("Math overflow")]
    MathOverflow,

    // Tier table errors
    #[msg("Fee tier table exceeds the maximum tier count")]
    TooManyFeeTiers,

    #[msg("Override fee exceeds the maximum fee in pips")]
    InvalidFeeRate,
}
