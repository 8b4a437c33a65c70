//! Error types for the quant engine
//!
//! Comprehensive error taxonomy using thiserror. Hard failures are reserved
//! for mathematically undefined inputs; short histories degrade instead.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Insufficient data: required {required}, available {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Inputs for which the requested computation is undefined
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("price at index {index} must be positive, got {value}")]
    NonPositivePrice { index: usize, value: f64 },

    #[error("price at index {index} is not finite")]
    NonFinitePrice { index: usize },

    #[error("leverage must be >= 1")]
    ZeroLeverage,

    #[error("notional is zero (size or price is zero)")]
    ZeroNotional,

    #[error("position size must be positive, got {0}")]
    NonPositiveSize(String),

    #[error("current price must be positive, got {0}")]
    NonPositiveCurrentPrice(String),

    #[error("collateral must be non-negative, got {0}")]
    NegativeCollateral(String),

    #[error("open interest must be finite and non-negative: long {long}, short {short}")]
    InvalidOpenInterest { long: f64, short: f64 },

    #[error("volatility must be finite and non-negative, got {0}")]
    InvalidVolatility(f64),

    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
}
