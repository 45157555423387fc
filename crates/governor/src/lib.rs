//! Off-chain governor for the JIT defense program.
//!
//! Periodically reads the host venue's pool state, solves the critical fee
//! for each configured ratio tier, and publishes the resulting tier table
//! through the program's `set_fee_tiers` instruction.

pub mod config;
pub mod error;
pub mod governor;
pub mod solver;
pub mod venue;

pub use config::GovernorConfig;
pub use error::{GovernorError, GovernorResult};
pub use governor::Governor;
