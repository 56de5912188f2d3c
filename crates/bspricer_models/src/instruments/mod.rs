//! Instrument definitions.
//!
//! Plain parameter structures for the instruments the library prices
//! analytically:
//! - [`EquityOption`], [`FxOption`], [`RateOption`]: vanilla European options
//! - [`DigitalOption`]: cash-or-nothing binary option
//! - [`CreditDefaultSwap`]: single-name CDS with an equally spaced schedule
//!
//! All structures are generic over `T: Float` and validate positivity of
//! price-like inputs on construction. Expiry and volatility are left
//! unconstrained; the pricers settle non-positive values at intrinsic.

pub mod credit;
pub mod error;
pub mod exotic;
pub mod option_type;
pub mod vanilla;

pub use credit::CreditDefaultSwap;
pub use error::InstrumentError;
pub use exotic::DigitalOption;
pub use option_type::OptionType;
pub use vanilla::{EquityOption, FxOption, RateOption};
