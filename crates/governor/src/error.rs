//! Error types for the governor service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovernorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Account parse error: {0}")]
    ParseError(String),

    #[error("Solver error: {0}")]
    SolverError(String),

    #[error("Insufficient balance: {balance} lamports, need {required}")]
    InsufficientBalance { balance: u64, required: u64 },
}

pub type GovernorResult<T> = Result<T, GovernorError>;

impl From<std::io::Error> for GovernorError {
    fn from(err: std::io::Error) -> Self {
        GovernorError::InvalidConfig(err.to_string())
    }
}
