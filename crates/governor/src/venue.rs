//! Read-only view of the host venue's pool account.
//!
//! The governor is built against the venue's published account layout, the
//! same way it would be built against an on-chain interface definition. Only
//! the current tick and in-range liquidity feed the solver; everything else
//! is carried for completeness of the layout.

use anchor_lang::prelude::borsh;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::error::{GovernorError, GovernorResult};

/// On-chain layout of the venue's concentrated liquidity pool account
#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize)]
pub struct VenuePool {
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub fee_bps: u16,
    pub protocol_fee_bps: u16,
    pub tick_spacing: i32,
    /// Current sqrt price (Q64.64)
    pub sqrt_price: u128,
    /// Current tick
    pub tick: i32,
    /// Current in-range liquidity
    pub liquidity: u128,
    pub fee_growth_global_a: u128,
    pub fee_growth_global_b: u128,
}

impl VenuePool {
    /// Parse a fetched pool account, skipping the account discriminator
    pub fn from_account_data(data: &[u8]) -> GovernorResult<Self> {
        if data.len() <= 8 {
            return Err(GovernorError::ParseError(
                "pool account data too short".to_string(),
            ));
        }
        let mut body = &data[8..];
        VenuePool::deserialize(&mut body).map_err(|e| GovernorError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let pool = VenuePool {
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            fee_bps: 30,
            protocol_fee_bps: 500,
            tick_spacing: 10,
            sqrt_price: 1u128 << 64,
            tick: -42,
            liquidity: 1_000_000,
            fee_growth_global_a: 0,
            fee_growth_global_b: 0,
        };

        let mut data = vec![0u8; 8]; // discriminator
        pool.serialize(&mut data).unwrap();

        let parsed = VenuePool::from_account_data(&data).unwrap();
        assert_eq!(parsed.tick, -42);
        assert_eq!(parsed.liquidity, 1_000_000);
        assert_eq!(parsed.sqrt_price, 1u128 << 64);
    }

    #[test]
    fn test_truncated_account_rejected() {
        assert!(VenuePool::from_account_data(&[0u8; 8]).is_err());
        assert!(VenuePool::from_account_data(&[0u8; 40]).is_err());
    }
}
