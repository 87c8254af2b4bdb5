//! Pure, stateless derivation library for a federal tax-resistance
//! estimator.
//!
//! Takes one [`FilingInput`](models::FilingInput) record — filing status,
//! employment type, income, contributions, dependents, and an optional
//! observed withholding figure — and derives the filer's current federal
//! liability, a withholding/overpayment estimate, three resistance tiers
//! (optimize, redirect, withhold) with a penalty-risk estimate for the
//! third, and population-scale projections.
//!
//! All constants — bracket schedules, standard deductions, credit amounts,
//! SE rates, contribution caps, penalty rates — are versioned configuration
//! ([`models::TaxYearConfig`]) injected at construction; 2024 is built in.
//! Amounts are [`rust_decimal::Decimal`] and carry full precision; currency
//! formatting is the caller's concern.
//!
//! The crate holds no state: every derivation is a total, idempotent
//! function of its input, and malformed-input coercion happens at the
//! caller's boundary (see `FilingInput::parse_amount`).

pub mod calculations;
pub mod models;

pub use calculations::{DerivedResult, TaxEstimator};
pub use models::{FilingInput, TaxConfigError, TaxYearConfig};
