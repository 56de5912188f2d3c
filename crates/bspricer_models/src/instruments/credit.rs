//! Credit Default Swap (CDS) definition.
//!
//! Single-name CDS with an equally spaced premium schedule. Market inputs
//! (discount and hazard curves) live in `bspricer_core::market_data` and
//! are supplied at pricing time.

use num_traits::Float;

use super::error::InstrumentError;

/// Single-name Credit Default Swap.
///
/// The protection buyer pays `spread × notional × Δt` at each schedule
/// date and receives `(1 - recovery) × notional` on default.
///
/// Premium dates are equally spaced: `n = max(round(maturity × frequency), 1)`
/// payments at interval `maturity / n`.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::CreditDefaultSwap;
///
/// let cds = CreditDefaultSwap::new(
///     1.0_f64, // notional
///     0.01,    // 100bp spread
///     5.0,     // maturity (years)
///     4,       // quarterly premiums
///     0.4,     // 40% recovery
/// ).unwrap();
///
/// let (times, dt) = cds.payment_schedule();
/// assert_eq!(times.len(), 20);
/// assert!((dt - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditDefaultSwap<T: Float> {
    /// Contract notional.
    pub notional: T,
    /// Annual premium spread (decimal, e.g. 0.01 for 100bp).
    pub spread: T,
    /// Maturity in years.
    pub maturity: T,
    /// Premium payments per year.
    pub payment_frequency: u32,
    /// Recovery rate on default, in [0, 1).
    pub recovery_rate: T,
}

impl<T: Float> CreditDefaultSwap<T> {
    /// Creates a new CDS with validation.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidNotional` if notional <= 0
    /// - `InstrumentError::InvalidMaturity` if maturity <= 0
    /// - `InstrumentError::InvalidPaymentFrequency` if frequency == 0
    /// - `InstrumentError::InvalidRecoveryRate` if recovery is outside [0, 1)
    pub fn new(
        notional: T,
        spread: T,
        maturity: T,
        payment_frequency: u32,
        recovery_rate: T,
    ) -> Result<Self, InstrumentError> {
        if notional <= T::zero() {
            return Err(InstrumentError::InvalidNotional {
                notional: notional.to_f64().unwrap_or(0.0),
            });
        }
        if maturity <= T::zero() {
            return Err(InstrumentError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(0.0),
            });
        }
        if payment_frequency == 0 {
            return Err(InstrumentError::InvalidPaymentFrequency {
                frequency: payment_frequency,
            });
        }
        if recovery_rate < T::zero() || recovery_rate >= T::one() {
            return Err(InstrumentError::InvalidRecoveryRate {
                recovery_rate: recovery_rate.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            notional,
            spread,
            maturity,
            payment_frequency,
            recovery_rate,
        })
    }

    /// Returns the premium payment times and the accrual interval.
    ///
    /// `n = max(round(maturity × frequency), 1)` payments at
    /// `dt = maturity / n`, i.e. `dt, 2·dt, …, maturity`.
    pub fn payment_schedule(&self) -> (Vec<T>, T) {
        let frequency = T::from(self.payment_frequency).unwrap_or_else(T::one);
        let n_payments = (self.maturity * frequency)
            .round()
            .to_usize()
            .unwrap_or(1)
            .max(1);
        let dt = self.maturity / T::from(n_payments).unwrap_or_else(T::one);
        let times = (1..=n_payments)
            .map(|i| dt * T::from(i).unwrap_or_else(T::one))
            .collect();
        (times, dt)
    }
}
