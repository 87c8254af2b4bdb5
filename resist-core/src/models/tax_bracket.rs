use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive bracket schedule.
///
/// A schedule is an ascending, non-overlapping sequence of tiers; the top
/// tier carries `max_income: None` and is unbounded. Income inside
/// `[min_income, max_income)` is taxed at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            rate,
        }
    }
}
