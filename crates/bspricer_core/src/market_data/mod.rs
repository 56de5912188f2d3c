//! Market data structures: discount and credit curves.

pub mod curves;
pub mod error;

pub use error::MarketDataError;
