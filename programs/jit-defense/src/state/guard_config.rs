//! Guard configuration: the governing authority and the fee tier table.
//!
//! A single table is shared across all pools. The authority replaces it
//! wholesale; there are no partial updates and no history.

use anchor_lang::prelude::*;

use crate::constants::{MAX_FEE_PIPS, MAX_FEE_TIERS};
use crate::error::JitDefenseError;

/// One tier of the override schedule: pools whose window ratio reaches
/// `threshold_ratio_bps` are charged `fee_pips` on the next trade.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeTier {
    /// Minimum added/active liquidity ratio, in basis points (inclusive)
    pub threshold_ratio_bps: u64,
    /// Override fee charged when this tier applies, in pips
    pub fee_pips: u32,
}

#[account]
#[derive(InitSpace)]
pub struct GuardConfig {
    /// Authority permitted to replace the tier table. Fixed at initialization.
    pub authority: Pubkey,
    pub bump: u8,
    /// Tier table, stored sorted by threshold (ascending)
    #[max_len(MAX_FEE_TIERS)]
    pub tiers: Vec<FeeTier>,
}

impl GuardConfig {
    pub fn initialize(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.bump = bump;
        self.tiers = Vec::new();
    }

    /// Replace the entire tier table. Rejects any caller other than the
    /// configured authority and leaves the table untouched on failure.
    ///
    /// Tiers are sorted by threshold before storage, so lookup behaves the
    /// same for any input ordering. The sort is stable: among equal
    /// thresholds the later-supplied tier wins.
    pub fn replace_tiers(&mut self, caller: &Pubkey, mut new_tiers: Vec<FeeTier>) -> Result<()> {
        require_keys_eq!(*caller, self.authority, JitDefenseError::Unauthorized);
        require!(
            new_tiers.len() <= MAX_FEE_TIERS,
            JitDefenseError::TooManyFeeTiers
        );
        require!(
            new_tiers.iter().all(|t| t.fee_pips <= MAX_FEE_PIPS),
            JitDefenseError::InvalidFeeRate
        );

        new_tiers.sort_by_key(|t| t.threshold_ratio_bps);
        self.tiers = new_tiers;
        Ok(())
    }

    /// Find the override fee for an observed ratio: scan from the highest
    /// threshold down and return the first tier whose threshold the ratio
    /// meets. The threshold is an inclusive lower bound, so the highest
    /// qualifying tier always wins.
    pub fn lookup(&self, ratio_bps: u128) -> Option<u32> {
        self.tiers
            .iter()
            .rev()
            .find(|t| (t.threshold_ratio_bps as u128) <= ratio_bps)
            .map(|t| t.fee_pips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_authority(authority: Pubkey) -> GuardConfig {
        let mut config = GuardConfig {
            authority: Pubkey::default(),
            bump: 0,
            tiers: Vec::new(),
        };
        config.initialize(authority, 255);
        config
    }

    fn tier(threshold_ratio_bps: u64, fee_pips: u32) -> FeeTier {
        FeeTier {
            threshold_ratio_bps,
            fee_pips,
        }
    }

    #[test]
    fn replace_requires_authority() {
        let authority = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        config
            .replace_tiers(&authority, vec![tier(500, 30)])
            .unwrap();

        let before = config.tiers.clone();
        assert!(config.replace_tiers(&intruder, vec![tier(1, 1)]).is_err());
        // Table is untouched after the rejected call
        assert_eq!(config.tiers, before);
    }

    #[test]
    fn replace_is_wholesale() {
        let authority = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        config
            .replace_tiers(&authority, vec![tier(500, 30), tier(1000, 100)])
            .unwrap();
        config
            .replace_tiers(&authority, vec![tier(2000, 500)])
            .unwrap();
        assert_eq!(config.tiers, vec![tier(2000, 500)]);
    }

    #[test]
    fn replace_sorts_unsorted_input() {
        let authority = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        config
            .replace_tiers(&authority, vec![tier(1000, 100), tier(500, 30)])
            .unwrap();
        assert_eq!(config.tiers, vec![tier(500, 30), tier(1000, 100)]);
        // Selection matches what the pre-sorted table would produce
        assert_eq!(config.lookup(700), Some(30));
        assert_eq!(config.lookup(1200), Some(100));
    }

    #[test]
    fn replace_rejects_oversized_table() {
        let authority = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        let tiers: Vec<FeeTier> = (0..=MAX_FEE_TIERS as u64).map(|i| tier(i, 1)).collect();
        assert!(config.replace_tiers(&authority, tiers).is_err());
        assert!(config.tiers.is_empty());
    }

    #[test]
    fn replace_rejects_fee_above_cap() {
        let authority = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        assert!(config
            .replace_tiers(&authority, vec![tier(500, MAX_FEE_PIPS + 1)])
            .is_err());
        assert!(config.tiers.is_empty());
    }

    #[test]
    fn lookup_threshold_is_inclusive() {
        let authority = Pubkey::new_unique();
        let mut config = config_with_authority(authority);
        config
            .replace_tiers(&authority, vec![tier(500, 30), tier(5000, 77)])
            .unwrap();

        assert_eq!(config.lookup(5000), Some(77));
        assert_eq!(config.lookup(4999), Some(30));
        assert_eq!(config.lookup(499), None);
    }

    #[test]
    fn lookup_empty_table_is_none() {
        let config = config_with_authority(Pubkey::new_unique());
        assert_eq!(config.lookup(u128::MAX), None);
    }
}
