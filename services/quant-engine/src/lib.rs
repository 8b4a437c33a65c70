//! Quant Engine
//!
//! Deterministic numeric transforms that turn a price history and
//! position terms into trading signals:
//! - log returns and annualized volatility (`returns`, `volatility`)
//! - volatility forecast with trend label (`forecast`)
//! - open-interest and volatility driven funding rate (`funding`)
//! - margin, liquidation and PnL math (`margin`, `liquidation`, `exposure`)
//! - bounded 0-100 position risk score (`scoring`)
//!
//! Every function is pure. `QuantEngine` wires them together behind an
//! injected `EngineConfig`.

pub mod returns;
pub mod volatility;
pub mod forecast;
pub mod funding;
pub mod margin;
pub mod liquidation;
pub mod exposure;
pub mod scoring;
pub mod config;
pub mod engine;

pub use config::{ConfigError, EngineConfig, ForecastConfig, FundingConfig};
pub use engine::QuantEngine;
