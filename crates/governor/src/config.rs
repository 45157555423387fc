use crate::error::{GovernorError, GovernorResult};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fs;
use std::str::FromStr;

/// Governor configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GovernorConfig {
    /// Solana cluster to connect to
    pub cluster: String,

    /// JIT defense program ID
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,

    /// Host venue pool account whose liquidity and tick the solver reads
    #[serde(with = "pubkey_serde")]
    pub pool: Pubkey,

    /// Minimum SOL balance to maintain (in lamports)
    pub min_balance_lamports: u64,

    /// Default update interval in seconds
    pub default_update_interval: u64,

    /// Market assumptions the solver prices against
    pub market: MarketAssumptions,

    /// Strategy parameters
    pub strategy: StrategyConfig,
}

/// Assumptions about the market the defense is priced against
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketAssumptions {
    /// Nominal swap volume a JIT attacker targets, in quote units
    pub v_swap_nominal: f64,

    /// Inventory risk coefficient for the attacker's holding cost
    pub kappa: f64,

    /// Compute units an add/remove round trip consumes
    pub jit_compute_units: u64,

    /// Fallback priority fee when the RPC reports none (micro-lamports per CU)
    pub default_priority_fee: u64,
}

/// Strategy parameters for tier publication
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrategyConfig {
    /// Ratio tiers (bps of active liquidity) to publish critical fees for
    pub ratio_tiers_bps: Vec<u64>,
}

impl GovernorConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> GovernorResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GovernorError::InvalidConfig(format!("Failed to read config file {}: {}", path, e))
        })?;

        let config: GovernorConfig = toml::from_str(&content).map_err(|e| {
            GovernorError::InvalidConfig(format!("Failed to parse config file {}: {}", path, e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> GovernorResult<()> {
        if self.cluster.is_empty() {
            return Err(GovernorError::InvalidConfig(
                "cluster must not be empty".to_string(),
            ));
        }

        if self.default_update_interval == 0 {
            return Err(GovernorError::InvalidConfig(
                "default_update_interval must be greater than 0".to_string(),
            ));
        }

        if self.pool == Pubkey::default() {
            return Err(GovernorError::InvalidConfig(
                "pool must be set".to_string(),
            ));
        }

        self.market.validate()?;
        self.strategy.validate()?;

        Ok(())
    }
}

impl MarketAssumptions {
    fn validate(&self) -> GovernorResult<()> {
        if self.v_swap_nominal <= 0.0 {
            return Err(GovernorError::InvalidConfig(
                "v_swap_nominal must be positive".to_string(),
            ));
        }

        if self.kappa < 0.0 {
            return Err(GovernorError::InvalidConfig(
                "kappa must not be negative".to_string(),
            ));
        }

        if self.jit_compute_units == 0 {
            return Err(GovernorError::InvalidConfig(
                "jit_compute_units must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl StrategyConfig {
    fn validate(&self) -> GovernorResult<()> {
        if self.ratio_tiers_bps.is_empty() {
            return Err(GovernorError::InvalidConfig(
                "ratio_tiers_bps must contain at least one tier".to_string(),
            ));
        }

        if self.ratio_tiers_bps.len() > jit_defense::constants::MAX_FEE_TIERS {
            return Err(GovernorError::InvalidConfig(format!(
                "ratio_tiers_bps holds {} tiers, program accepts at most {}",
                self.ratio_tiers_bps.len(),
                jit_defense::constants::MAX_FEE_TIERS
            )));
        }

        if self.ratio_tiers_bps.iter().any(|&r| r == 0) {
            return Err(GovernorError::InvalidConfig(
                "ratio tiers must be greater than 0 bps".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            cluster: "devnet".to_string(),
            program_id: jit_defense::ID,
            pool: Pubkey::default(),
            min_balance_lamports: 10_000_000, // 0.01 SOL
            default_update_interval: 60,      // 1 minute
            market: MarketAssumptions::default(),
            strategy: StrategyConfig::default(),
        }
    }
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            v_swap_nominal: 50_000.0,
            kappa: 1e-9,
            jit_compute_units: 400_000,
            default_priority_fee: 1_000,
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            ratio_tiers_bps: vec![500, 1_000, 2_500, 5_000],
        }
    }
}

// Custom serde module for Pubkey
mod pubkey_serde {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GovernorConfig {
        GovernorConfig {
            pool: Pubkey::new_unique(),
            ..GovernorConfig::default()
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.default_update_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unset_pool_rejected() {
        let mut config = valid_config();
        config.pool = Pubkey::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tier_bounds() {
        let mut config = valid_config();
        config.strategy.ratio_tiers_bps.clear();
        assert!(config.validate().is_err());

        config.strategy.ratio_tiers_bps =
            vec![100; jit_defense::constants::MAX_FEE_TIERS + 1];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = valid_config();
        let text = toml::to_string(&config).unwrap();
        let parsed: GovernorConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.pool, config.pool);
        assert_eq!(parsed.program_id, config.program_id);
        assert_eq!(
            parsed.strategy.ratio_tiers_bps,
            config.strategy.ratio_tiers_bps
        );
    }
}
