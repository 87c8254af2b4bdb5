use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{EmploymentType, FilingStatus};

/// Upper bound applied at the parse boundary: one quadrillion dollars.
/// Keeps every downstream multiplication (annualisation, bracket rates,
/// penalty rates) far inside `Decimal` range, so the derivations stay
/// total even for absurd form input.
const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Everything the presentation layer collects about one filer.
///
/// The record is immutable for the duration of a derivation pass; the
/// estimator never retains or mutates it. Amounts are annual and
/// non-negative — the boundary helpers below coerce anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingInput {
    pub filing_status: FilingStatus,
    pub employment_type: EmploymentType,

    /// Gross annual income before any deduction.
    pub annual_income: Decimal,

    /// Current annual pre-tax contributions (401k, SEP-IRA, HSA, ...).
    pub pre_tax_contributions: Decimal,

    pub children_under_17: u32,
    pub other_dependents: u32,

    /// Observed withholding per biweekly paycheck (W-2) or estimated
    /// payment per quarter (self-employed / mixed). Only consulted when
    /// `use_advanced` is set and the figure is positive.
    pub custom_withholding: Option<Decimal>,
    pub use_advanced: bool,
}

impl FilingInput {
    /// A zero-income input for the given statuses; a convenient base for
    /// callers that fill fields in as the user supplies them.
    pub fn new(
        filing_status: FilingStatus,
        employment_type: EmploymentType,
    ) -> Self {
        Self {
            filing_status,
            employment_type,
            annual_income: Decimal::ZERO,
            pre_tax_contributions: Decimal::ZERO,
            children_under_17: 0,
            other_dependents: 0,
            custom_withholding: None,
            use_advanced: false,
        }
    }

    /// Coerces a raw form-field string to a non-negative amount.
    ///
    /// Malformed input is not an error at this boundary — it becomes zero,
    /// and negative amounts are clamped to zero. An empty field therefore
    /// behaves exactly like an explicit `0`. Amounts above one quadrillion
    /// are clamped down so later arithmetic cannot overflow.
    pub fn parse_amount(raw: &str) -> Decimal {
        raw.trim()
            .parse::<Decimal>()
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, MAX_AMOUNT)
    }

    /// Coerces a raw form-field string to a non-negative count, with the
    /// same malformed-becomes-zero contract as [`Self::parse_amount`].
    pub fn parse_count(raw: &str) -> u32 {
        raw.trim().parse::<u32>().unwrap_or(0)
    }

    pub fn total_dependents(&self) -> u32 {
        self.children_under_17 + self.other_dependents
    }

    /// The custom withholding figure, if the filer opted in and supplied a
    /// positive amount. Zero and negative figures mean "fall back to the
    /// default heuristic", matching the form behavior.
    pub fn effective_custom_withholding(&self) -> Option<Decimal> {
        if !self.use_advanced {
            return None;
        }
        self.custom_withholding.filter(|amount| *amount > Decimal::ZERO)
    }
}
