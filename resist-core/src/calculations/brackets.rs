//! Progressive bracket-tax evaluation.

use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Computes progressive tax over an ascending bracket schedule.
///
/// Each tier whose `min_income` lies below `income` contributes
/// `rate × (min(income, max_income) − min_income)`; tiers at or above the
/// income contribute nothing. The function is total: zero income, or an
/// empty schedule, yields zero tax. It is continuous and non-decreasing in
/// income, and piecewise-linear with the active tier's rate as slope.
///
/// Negative income is not a valid input; callers clamp to zero first
/// (see [`floor_at_zero`](super::common::floor_at_zero)).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use resist_core::calculations::brackets::bracket_tax;
/// use resist_core::models::{FilingStatus, TaxYearConfig};
///
/// let config = TaxYearConfig::year_2024();
/// let schedule = config.brackets_for(FilingStatus::Single);
///
/// // 1160 + 4266 + (50400 - 47150) × 0.22
/// assert_eq!(bracket_tax(dec!(50400), schedule), dec!(6141));
/// assert_eq!(bracket_tax(dec!(0), schedule), dec!(0));
/// ```
pub fn bracket_tax(
    income: Decimal,
    schedule: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for tier in schedule {
        if income <= tier.min_income {
            break;
        }
        let taxed_up_to = match tier.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        tax += (taxed_up_to - tier.min_income) * tier.rate;
    }
    tax
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{FilingStatus, TaxYearConfig};

    use super::*;

    fn single_schedule() -> Vec<TaxBracket> {
        TaxYearConfig::year_2024().brackets.single
    }

    // =========================================================================
    // value tests
    // =========================================================================

    #[test]
    fn zero_income_owes_zero_for_every_status() {
        let config = TaxYearConfig::year_2024();

        for status in [
            FilingStatus::Single,
            FilingStatus::MarriedJointly,
            FilingStatus::HeadOfHousehold,
        ] {
            assert_eq!(bracket_tax(dec!(0), config.brackets_for(status)), dec!(0));
        }
    }

    #[test]
    fn income_inside_first_tier() {
        let schedule = single_schedule();

        assert_eq!(bracket_tax(dec!(10000), &schedule), dec!(1000.00));
    }

    #[test]
    fn income_in_third_tier() {
        let schedule = single_schedule();

        // 1160 + 4266 + 3250 × 0.22 = 6141
        assert_eq!(bracket_tax(dec!(50400), &schedule), dec!(6141.00));
    }

    #[test]
    fn income_in_top_tier() {
        let schedule = single_schedule();

        assert_eq!(bracket_tax(dec!(700000), &schedule), dec!(217187.75));
    }

    #[test]
    fn married_schedule_taxes_less_at_same_income() {
        let config = TaxYearConfig::year_2024();
        let income = dec!(85000);

        let single = bracket_tax(income, config.brackets_for(FilingStatus::Single));
        let married = bracket_tax(income, config.brackets_for(FilingStatus::MarriedJointly));

        assert!(married < single);
    }

    #[test]
    fn empty_schedule_contributes_nothing() {
        assert_eq!(bracket_tax(dec!(50000), &[]), dec!(0));
    }

    // =========================================================================
    // shape tests
    // =========================================================================

    #[test]
    fn tax_is_continuous_at_tier_boundary() {
        let schedule = single_schedule();

        // Exactly at the boundary only the lower tier contributes; a cent
        // above adds the new tier's rate on that cent.
        let at = bracket_tax(dec!(11600), &schedule);
        let above = bracket_tax(dec!(11600.01), &schedule);

        assert_eq!(at, dec!(1160.00));
        assert_eq!(above - at, dec!(0.0012));
    }

    #[test]
    fn tax_is_non_decreasing_in_income() {
        let schedule = single_schedule();
        let incomes = [
            dec!(0),
            dec!(500),
            dec!(11600),
            dec!(11601),
            dec!(47150),
            dec!(65000),
            dec!(100525),
            dec!(191950),
            dec!(243725),
            dec!(609350),
            dec!(1000000),
        ];

        let mut previous = dec!(-1);
        for income in incomes {
            let tax = bracket_tax(income, &schedule);
            assert!(tax >= previous, "tax dropped at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn slope_matches_active_tier_rate() {
        let schedule = single_schedule();

        // 50400 and 50500 both sit in the 22% tier.
        let low = bracket_tax(dec!(50400), &schedule);
        let high = bracket_tax(dec!(50500), &schedule);

        assert_eq!(high - low, dec!(22.00));
    }
}
