//! Types library for the perpetual-futures quant engine
//!
//! Immutable value objects passed into and returned from the engine,
//! plus the shared error taxonomy. Every type is constructed fresh per
//! call and serializable so callers can put it on the wire.
//!
//! # Modules
//! - `series`: Validated price history (`PriceSeries`)
//! - `position`: Position terms (`Position`, `PositionSide`)
//! - `market`: Open interest and funding rate types
//! - `volatility`: Volatility forecast and return features
//! - `risk`: Risk assessment output
//! - `errors`: Error taxonomy

pub mod series;
pub mod position;
pub mod market;
pub mod volatility;
pub mod risk;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::series::*;
    pub use crate::position::*;
    pub use crate::market::*;
    pub use crate::volatility::*;
    pub use crate::risk::*;
    pub use crate::errors::*;
}
