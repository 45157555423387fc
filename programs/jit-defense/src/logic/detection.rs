//! Detection path: fold liquidity-modification reports into the window audit.
//!
//! Pure observation, no authority check; any caller in the venue's trusted
//! call path may report. Only additions whose range spans the currently
//! active tick count toward JIT detection at this price.

use anchor_lang::prelude::*;

use crate::state::WindowAudit;

/// Whether a position's tick range covers the active tick, both ends
/// inclusive. A reversed range covers nothing.
pub fn covers_active_tick(tick_lower: i32, tick_upper: i32, active_tick: i32) -> bool {
    tick_lower <= active_tick && active_tick <= tick_upper
}

/// Fold one liquidity modification into the audit. Removals, no-ops, and
/// additions away from the active tick leave the audit untouched. Returns
/// the new window total when something was recorded.
pub fn observe_liquidity_added(
    audit: &mut WindowAudit,
    current_slot: u64,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
    active_tick: i32,
) -> Result<Option<u128>> {
    if !covers_active_tick(tick_lower, tick_upper, active_tick) {
        return Ok(None);
    }
    if liquidity_delta <= 0 {
        return Ok(None);
    }
    let window_total = audit.record(current_slot, liquidity_delta as u128)?;
    Ok(Some(window_total))
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
    fn tick_coverage_is_inclusive_on_both_ends() {
        assert!(covers_active_tick(-10, 10, -10));
        assert!(covers_active_tick(-10, 10, 10));
        assert!(covers_active_tick(-10, 10, 0));
        assert!(!covers_active_tick(-10, 10, 11));
        assert!(!covers_active_tick(-10, 10, -11));
        // Reversed range covers nothing
        assert!(!covers_active_tick(10, -10, 0));
    }

    #[test]
    fn addition_covering_active_tick_is_recorded() {
        let mut audit = audit();
        let total = observe_liquidity_added(&mut audit, 10, -100, 100, 500, 0).unwrap();
        assert_eq!(total, Some(500));
        assert_eq!(audit.added_in_window(10), 500);
    }

    #[test]
    fn addition_away_from_active_tick_is_ignored() {
        let mut audit = audit();
        let total = observe_liquidity_added(&mut audit, 10, 200, 300, 500, 0).unwrap();
        assert_eq!(total, None);
        assert_eq!(audit.added_in_window(10), 0);
    }

    #[test]
    fn removals_and_noops_are_ignored() {
        let mut audit = audit();
        assert_eq!(
            observe_liquidity_added(&mut audit, 10, -100, 100, -500, 0).unwrap(),
            None
        );
        assert_eq!(
            observe_liquidity_added(&mut audit, 10, -100, 100, 0, 0).unwrap(),
            None
        );
        assert_eq!(audit.added_in_window(10), 0);
    }

    #[test]
    fn additions_accumulate_per_window() {
        let mut audit = audit();
        observe_liquidity_added(&mut audit, 10, -100, 100, 300, 0).unwrap();
        let total = observe_liquidity_added(&mut audit, 10, -5, 5, 200, 0).unwrap();
        assert_eq!(total, Some(500));

        // A later window starts from zero
        let total = observe_liquidity_added(&mut audit, 11, -5, 5, 40, 0).unwrap();
        assert_eq!(total, Some(40));
    }
}
