//! Critical-fee solver.
//!
//! For each ratio tier the governor publishes, locate the fee at which a
//! JIT attacker sizing an add/remove round trip near that ratio breaks
//! even against a nominal swap. The attacker's payoff is the fee share
//! captured by the added liquidity minus transaction cost and a quadratic
//! inventory holding cost:
//!
//!   profit(a) = phi * (a / (L + a)) * V  -  (c_tx + kappa/2 * a^2)
//!
//! The outer search bisects on the fee `phi`; the inner maximization over
//! the attack size `a` is a bounded ternary search around the tier's
//! characteristic size `alpha = L * ratio / 10000`.

use crate::error::{GovernorError, GovernorResult};
use jit_defense::constants::MAX_FEE_PIPS;

/// Fee search bracket, as fractions: 5 bps to 1000 bps
const PHI_LOW: f64 = 0.0005;
const PHI_HIGH: f64 = 0.1;

const BISECTION_ROUNDS: u32 = 20;
const TERNARY_ROUNDS: u32 = 100;

/// Pips per unit fee fraction
const FEE_PIPS_SCALE: f64 = 1_000_000.0;

/// Market state and assumptions the solver prices against
#[derive(Debug, Clone, Copy)]
pub struct SolverInputs {
    /// Active liquidity at the pool's current price level
    pub active_liquidity: f64,
    /// Nominal swap volume the attacker targets, in quote units
    pub v_swap_nominal: f64,
    /// Inventory risk coefficient
    pub kappa: f64,
    /// Round-trip transaction cost for the attacker, in quote units
    pub jit_tx_cost: f64,
}

fn attacker_profit(phi: f64, attack_size: f64, inputs: &SolverInputs) -> f64 {
    let share = attack_size / (inputs.active_liquidity + attack_size);
    phi * share * inputs.v_swap_nominal
        - (inputs.jit_tx_cost + 0.5 * inputs.kappa * attack_size * attack_size)
}

/// Maximum attacker profit over attack sizes within 20% of `alpha`
fn max_profit_for_fee(phi: f64, alpha: f64, inputs: &SolverInputs) -> f64 {
    let mut lo = alpha * 0.8;
    let mut hi = alpha * 1.2;
    for _ in 0..TERNARY_ROUNDS {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        if attacker_profit(phi, m1, inputs) < attacker_profit(phi, m2, inputs) {
            lo = m1;
        } else {
            hi = m2;
        }
    }
    attacker_profit(phi, (lo + hi) / 2.0, inputs)
}

/// Fee fraction at the attacker's break-even point for the given ratio
/// tier, found by bisection inside `[PHI_LOW, PHI_HIGH]`.
pub fn critical_fee(ratio_bps: u64, inputs: &SolverInputs) -> GovernorResult<f64> {
    if inputs.active_liquidity <= 0.0 {
        return Err(GovernorError::SolverError(
            "active liquidity must be positive".to_string(),
        ));
    }

    let alpha = inputs.active_liquidity * ratio_bps as f64 / 10_000.0;
    let mut low = PHI_LOW;
    let mut high = PHI_HIGH;
    for _ in 0..BISECTION_ROUNDS {
        let mid = (low + high) / 2.0;
        if max_profit_for_fee(mid, alpha, inputs) > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok(high)
}

/// Convert a fee fraction to pips, clamped to the program's cap
pub fn fee_pips(phi: f64) -> u32 {
    ((phi * FEE_PIPS_SCALE) as u32).min(MAX_FEE_PIPS)
}
