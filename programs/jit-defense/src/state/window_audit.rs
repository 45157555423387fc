//! Per-pool window audit: liquidity added at the active tick during the
//! current settlement window (one slot).
//!
//! Entries are created lazily on the first addition and never deleted; a
//! stale `window_slot` means the accumulated value counts as zero and is
//! overwritten on the next write. This replaces any per-window cleanup pass.

use anchor_lang::prelude::*;

use crate::error::JitDefenseError;

#[account]
#[derive(InitSpace)]
pub struct WindowAudit {
    /// Pool this audit entry belongs to
    pub pool: Pubkey,
    /// Slot the accumulated amount applies to
    pub window_slot: u64,
    /// Liquidity added at the active tick during `window_slot`
    pub added_liquidity: u128,
    pub bump: u8,
}

impl WindowAudit {
    /// Add `amount` to the current window's total, resetting first if the
    /// stored window is stale. Returns the new window total.
    pub fn record(&mut self, slot: u64, amount: u128) -> Result<u128> {
        if self.window_slot != slot {
            self.window_slot = slot;
            self.added_liquidity = 0;
        }
        self.added_liquidity = self
            .added_liquidity
            .checked_add(amount)
            .ok_or(JitDefenseError::MathOverflow)?;
        Ok(self.added_liquidity)
    }

    /// Amount added during `slot`; zero when the stored window is stale.
    pub fn added_in_window(&self, slot: u64) -> u128 {
        if self.window_slot == slot {
            self.added_liquidity
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit() -> WindowAudit {
        WindowAudit {
            pool: Pubkey::new_unique(),
            window_slot: 0,
            added_liquidity: 0,
            bump: 0,
        }
    }

    #[test]
    fn accumulates_within_a_window() {
        let mut audit = audit();
        assert_eq!(audit.record(10, 100).unwrap(), 100);
        assert_eq!(audit.record(10, 50).unwrap(), 150);
        assert_eq!(audit.added_in_window(10), 150);
    }

    #[test]
    fn new_window_resets_before_adding() {
        let mut audit = audit();
        audit.record(10, 100).unwrap();
        assert_eq!(audit.record(11, 7).unwrap(), 7);
        assert_eq!(audit.added_in_window(11), 7);
    }

    #[test]
    fn stale_window_reads_as_zero() {
        let mut audit = audit();
        audit.record(10, 100).unwrap();
        assert_eq!(audit.added_in_window(11), 0);
        // The stored value itself is untouched until the next write
        assert_eq!(audit.added_liquidity, 100);
    }

    #[test]
    fn accumulation_overflow_is_an_error() {
        let mut audit = audit();
        audit.record(10, u128::MAX).unwrap();
        assert!(audit.record(10, 1).is_err());
    }
}
