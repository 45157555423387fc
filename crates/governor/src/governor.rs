//! Main governor service: read venue state, solve tiers, publish.

use std::sync::Arc;

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use jit_defense::constants::GUARD_CONFIG_SEED;
use jit_defense::state::FeeTier;

use crate::config::GovernorConfig;
use crate::error::{GovernorError, GovernorResult};
use crate::solver::{self, SolverInputs};
use crate::venue::VenuePool;

/// Base fee per signature in lamports
const SIGNATURE_FEE_LAMPORTS: u64 = 5_000;
const LAMPORTS_PER_SOL: f64 = 1e9;

/// Cost of a signed add/remove round trip in SOL. The priority fee is an
/// RPC-reported value, so the lamport math saturates instead of trusting it.
fn round_trip_cost_sol(compute_units: u64, priority_fee: u64) -> f64 {
    let priority_lamports = compute_units.saturating_mul(priority_fee) / 1_000_000;
    let lamports = (2 * SIGNATURE_FEE_LAMPORTS).saturating_add(priority_lamports);
    lamports as f64 / LAMPORTS_PER_SOL
}

pub struct Governor {
    /// RPC client for Solana interaction
    rpc_client: Arc<RpcClient>,

    /// Governor authority keypair
    keypair: Arc<Keypair>,

    /// Governor configuration
    config: GovernorConfig,

    /// Dry run mode flag
    dry_run: bool,
}

impl Governor {
    pub fn new(
        rpc_client: Arc<RpcClient>,
        keypair: Arc<Keypair>,
        config: GovernorConfig,
        dry_run: bool,
    ) -> Self {
        Self {
            rpc_client,
            keypair,
            config,
            dry_run,
        }
    }

    /// One governor iteration: fetch pool state, solve the tier schedule,
    /// submit `set_fee_tiers`. Returns whether an update was published.
    pub async fn sync_once(&self) -> GovernorResult<bool> {
        let account = self
            .rpc_client
            .get_account(&self.config.pool)
            .map_err(|e| GovernorError::RpcError(e.to_string()))?;
        let pool = VenuePool::from_account_data(&account.data)?;

        if pool.liquidity == 0 {
            log::debug!("Pool {} has no active liquidity, skipping", self.config.pool);
            return Ok(false);
        }

        let inputs = SolverInputs {
            active_liquidity: pool.liquidity as f64,
            v_swap_nominal: self.config.market.v_swap_nominal,
            kappa: self.config.market.kappa,
            jit_tx_cost: self.jit_tx_cost(),
        };

        let mut tiers = Vec::with_capacity(self.config.strategy.ratio_tiers_bps.len());
        for &ratio_bps in &self.config.strategy.ratio_tiers_bps {
            let phi = solver::critical_fee(ratio_bps, &inputs)?;
            tiers.push(FeeTier {
                threshold_ratio_bps: ratio_bps,
                fee_pips: solver::fee_pips(phi),
            });
        }

        log::info!(
            "Solved {} tiers at liquidity {}, tick {}",
            tiers.len(),
            pool.liquidity,
            pool.tick
        );

        if self.dry_run {
            for tier in &tiers {
                log::info!(
                    "  tier: ratio >= {} bps -> fee {} pips (not submitted)",
                    tier.threshold_ratio_bps,
                    tier.fee_pips
                );
            }
            return Ok(false);
        }

        let signature = self.submit_fee_tiers(tiers)?;
        log::info!(
            "Strategy updated. liquidity: {}, tick: {}, tx: {}",
            pool.liquidity,
            pool.tick,
            signature
        );

        Ok(true)
    }

    /// Attacker's round-trip transaction cost in quote (SOL) units: two
    /// signed transactions plus the priority fee over the configured
    /// compute budget.
    fn jit_tx_cost(&self) -> f64 {
        round_trip_cost_sol(
            self.config.market.jit_compute_units,
            self.recent_priority_fee(),
        )
    }

    /// Current priority fee over the pool's account, falling back to the
    /// configured default when the RPC has nothing to report
    fn recent_priority_fee(&self) -> u64 {
        match self
            .rpc_client
            .get_recent_prioritization_fees(&[self.config.pool])
        {
            Ok(fees) => fees
                .iter()
                .map(|f| f.prioritization_fee)
                .max()
                .unwrap_or(self.config.market.default_priority_fee),
            Err(e) => {
                log::warn!("Prioritization fee query failed, using default: {}", e);
                self.config.market.default_priority_fee
            }
        }
    }

    /// Build, sign, and submit the `set_fee_tiers` instruction
    fn submit_fee_tiers(&self, new_tiers: Vec<FeeTier>) -> GovernorResult<String> {
        let (guard_config, _) =
            Pubkey::find_program_address(&[GUARD_CONFIG_SEED], &self.config.program_id);

        let accounts = jit_defense::accounts::SetFeeTiers {
            guard_config,
            authority: self.keypair.pubkey(),
        };

        let instruction = Instruction {
            program_id: self.config.program_id,
            accounts: accounts.to_account_metas(None),
            data: jit_defense::instruction::SetFeeTiers { new_tiers }.data(),
        };

        let recent_blockhash = self
            .rpc_client
            .get_latest_blockhash()
            .map_err(|e| GovernorError::RpcError(e.to_string()))?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.keypair.pubkey()),
            &[&*self.keypair],
            recent_blockhash,
        );

        let signature = self
            .rpc_client
            .send_and_confirm_transaction(&transaction)
            .map_err(|e| GovernorError::RpcError(e.to_string()))?;

        Ok(signature.to_string())
    }

    /// Health check for the governor service
    pub async fn health_check(&self) -> GovernorResult<()> {
        self.rpc_client
            .get_health()
            .map_err(|e| GovernorError::RpcError(e.to_string()))?;

        let balance = self
            .rpc_client
            .get_balance(&self.keypair.pubkey())
            .map_err(|e| GovernorError::RpcError(e.to_string()))?;
        if balance < self.config.min_balance_lamports {
            return Err(GovernorError::InsufficientBalance {
                balance,
                required: self.config.min_balance_lamports,
            });
        }

        log::debug!("Health check passed - balance: {} lamports", balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_cost_at_nominal_fee() {
        // 400k CU at 1000 micro-lamports/CU = 400 lamports priority,
        // plus two signatures at 5000 lamports each
        let cost = round_trip_cost_sol(400_000, 1_000);
        assert!((cost - 10_400.0 / 1e9).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_cost_saturates_on_hostile_priority_fee() {
        // An absurd RPC-reported fee must not panic the iteration
        let cost = round_trip_cost_sol(u64::MAX, u64::MAX);
        assert!(cost.is_finite());
        assert!(cost >= round_trip_cost_sol(400_000, 1_000));
    }
}
