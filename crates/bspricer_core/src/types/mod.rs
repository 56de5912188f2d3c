//! Shared types for the pricing library.

pub mod error;

pub use error::PricingError;
