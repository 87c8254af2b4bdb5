//! Current-liability derivation: self-employment tax, taxable income,
//! bracket tax, dependent credits, and the withholding estimate.
//!
//! The derivation runs the same fixed sequence the paper worksheet would:
//!
//! 1. SE net earnings = gross × 92.35%, SE tax = net × 15.3%, half of the
//!    SE tax deductible — only when employment involves SE income.
//! 2. Taxable income = max(0, gross − pre-tax contributions − standard
//!    deduction − SE deduction).
//! 3. Tax before credits from the bracket schedule.
//! 4. Credits = children × 2000 + other dependents × 500, flat (no income
//!    phase-out is modeled).
//! 5. Actual tax = max(0, tax before credits − credits).
//!
//! The withholding estimate annualises an observed per-period figure when
//! the filer supplied one (×26 biweekly for W-2, ×4 quarterly otherwise),
//! and falls back to 115% of actual tax — the typical-over-withholding
//! heuristic — when they did not.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::brackets::bracket_tax;
use crate::calculations::common::floor_at_zero;
use crate::models::{EmploymentType, FilingInput, TaxYearConfig};

/// Self-employment tax figures. All zero for pure W-2 filers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfEmploymentTax {
    /// Gross income × the net-earnings factor (92.35%).
    pub net_earnings: Decimal,
    /// Net earnings × the combined SE rate (15.3%).
    pub tax: Decimal,
    /// Deductible employer-equivalent half of the SE tax.
    pub deduction: Decimal,
}

/// The filer's current federal income tax position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilitySummary {
    pub se: SelfEmploymentTax,

    /// Standard deduction applied for the filing status.
    pub standard_deduction: Decimal,
    pub taxable_income: Decimal,
    pub tax_before_credits: Decimal,

    pub child_credit: Decimal,
    pub other_dependent_credit: Decimal,
    pub total_credits: Decimal,

    /// Tax actually owed after credits, floored at zero.
    pub actual_tax: Decimal,
}

/// Estimated amount pre-remitted over the year, against the actual tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingEstimate {
    /// Annualised withholding (W-2) or estimated payments (SE).
    pub estimated_annual: Decimal,
    /// max(0, estimated − actual tax); the interest-free loan portion.
    pub overpayment: Decimal,
    /// Whether an observed per-period figure was annualised, as opposed
    /// to the 115%-of-tax default heuristic.
    pub from_custom_figure: bool,
}

/// Worksheet for the current liability and withholding estimate.
///
/// Borrows an already-validated [`TaxYearConfig`]; every method is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct LiabilityWorksheet<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> LiabilityWorksheet<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Derives the filer's current tax position.
    ///
    /// Total over all inputs: zero income simply produces a zero-tax
    /// summary.
    pub fn assess(
        &self,
        input: &FilingInput,
    ) -> LiabilitySummary {
        let se = self.self_employment_tax(input.annual_income, input.employment_type);
        let standard_deduction = self
            .config
            .standard_deduction_for(input.filing_status);

        let taxable_income = floor_at_zero(
            input.annual_income - input.pre_tax_contributions - standard_deduction - se.deduction,
        );
        let tax_before_credits =
            bracket_tax(taxable_income, self.config.brackets_for(input.filing_status));

        let child_credit =
            self.config.child_credit_per_child * Decimal::from(input.children_under_17);
        let other_dependent_credit =
            self.config.other_dependent_credit * Decimal::from(input.other_dependents);
        let total_credits = child_credit + other_dependent_credit;

        let actual_tax = floor_at_zero(tax_before_credits - total_credits);

        debug!(
            taxable_income = %taxable_income,
            actual_tax = %actual_tax,
            "assessed current liability"
        );

        LiabilitySummary {
            se,
            standard_deduction,
            taxable_income,
            tax_before_credits,
            child_credit,
            other_dependent_credit,
            total_credits,
            actual_tax,
        }
    }

    /// Estimates annual withholding / estimated payments and the
    /// resulting overpayment.
    pub fn withholding(
        &self,
        input: &FilingInput,
        actual_tax: Decimal,
    ) -> WithholdingEstimate {
        let (estimated_annual, from_custom_figure) = match input.effective_custom_withholding() {
            Some(per_period) => (
                per_period * Self::periods_per_year(input.employment_type),
                true,
            ),
            None => (
                actual_tax * self.config.default_withholding_multiplier,
                false,
            ),
        };

        WithholdingEstimate {
            estimated_annual,
            overpayment: floor_at_zero(estimated_annual - actual_tax),
            from_custom_figure,
        }
    }

    /// Recomputes bracket tax and credits with a different deduction
    /// total, holding income, status, and credits constant. Shared by the
    /// strategy scenarios.
    pub(crate) fn tax_with_deductions(
        &self,
        input: &FilingInput,
        total_deductions: Decimal,
        se_deduction: Decimal,
        total_credits: Decimal,
    ) -> (Decimal, Decimal, Decimal) {
        let taxable_income =
            floor_at_zero(input.annual_income - total_deductions - se_deduction);
        let tax_before_credits =
            bracket_tax(taxable_income, self.config.brackets_for(input.filing_status));
        let tax = floor_at_zero(tax_before_credits - total_credits);
        (taxable_income, tax_before_credits, tax)
    }

    fn self_employment_tax(
        &self,
        income: Decimal,
        employment: EmploymentType,
    ) -> SelfEmploymentTax {
        if !employment.has_se_income() {
            return SelfEmploymentTax::default();
        }

        let net_earnings = income * self.config.se_net_income_factor;
        let tax = net_earnings * self.config.se_tax_rate;
        // Employer-equivalent half is deductible from taxable income.
        let deduction = tax * dec!(0.5);

        SelfEmploymentTax {
            net_earnings,
            tax,
            deduction,
        }
    }

    /// Pay periods used to annualise an observed per-period figure:
    /// biweekly paychecks for W-2 filers, quarterly payments otherwise.
    fn periods_per_year(employment: EmploymentType) -> Decimal {
        if employment == EmploymentType::W2 {
            dec!(26)
        } else {
            dec!(4)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{EmploymentType, FilingStatus};

    use super::*;

    fn w2_input(income: Decimal) -> FilingInput {
        let mut input = FilingInput::new(FilingStatus::Single, EmploymentType::W2);
        input.annual_income = income;
        input
    }

    // =========================================================================
    // assess tests
    // =========================================================================

    #[test]
    fn single_w2_65000_owes_6141() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);

        let summary = worksheet.assess(&w2_input(dec!(65000)));

        assert_eq!(summary.taxable_income, dec!(50400));
        assert_eq!(summary.tax_before_credits, dec!(6141));
        assert_eq!(summary.total_credits, dec!(0));
        assert_eq!(summary.actual_tax, dec!(6141));
        assert_eq!(summary.se, SelfEmploymentTax::default());
    }

    #[test]
    fn two_children_cut_the_bill_by_4000() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(65000));
        input.children_under_17 = 2;

        let summary = worksheet.assess(&input);

        assert_eq!(summary.child_credit, dec!(4000));
        assert_eq!(summary.actual_tax, dec!(2141));
    }

    #[test]
    fn credits_cannot_push_tax_below_zero() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(20000));
        input.children_under_17 = 4;

        let summary = worksheet.assess(&input);

        assert_eq!(summary.actual_tax, dec!(0));
    }

    #[test]
    fn self_employed_100000_carries_se_figures() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(100000));
        input.employment_type = EmploymentType::SelfEmployed;

        let summary = worksheet.assess(&input);

        assert_eq!(summary.se.net_earnings, dec!(92350));
        assert_eq!(summary.se.tax, dec!(14129.55));
        assert_eq!(summary.se.deduction, dec!(7064.775));
        assert_eq!(summary.taxable_income, dec!(78335.225));
        assert_eq!(summary.actual_tax, dec!(12286.7495));
    }

    #[test]
    fn mixed_employment_also_takes_the_se_deduction() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(100000));
        input.employment_type = EmploymentType::Mixed;

        let summary = worksheet.assess(&input);

        assert_eq!(summary.se.deduction, dec!(7064.775));
        assert_eq!(summary.taxable_income, dec!(78335.225));
    }

    #[test]
    fn zero_income_is_a_valid_zero_tax_input() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);

        let summary = worksheet.assess(&w2_input(dec!(0)));

        assert_eq!(summary.taxable_income, dec!(0));
        assert_eq!(summary.actual_tax, dec!(0));
    }

    #[test]
    fn pre_tax_contributions_reduce_taxable_income() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(65000));
        input.pre_tax_contributions = dec!(5000);

        let summary = worksheet.assess(&input);

        assert_eq!(summary.taxable_income, dec!(45400));
    }

    // =========================================================================
    // withholding tests
    // =========================================================================

    #[test]
    fn default_estimate_is_115_percent_of_tax() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let input = w2_input(dec!(65000));

        let estimate = worksheet.withholding(&input, dec!(6141));

        assert_eq!(estimate.estimated_annual, dec!(7062.15));
        assert_eq!(estimate.overpayment, dec!(921.15));
        assert!(!estimate.from_custom_figure);
    }

    #[test]
    fn w2_custom_figure_annualises_biweekly() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(65000));
        input.use_advanced = true;
        input.custom_withholding = Some(dec!(300));

        let estimate = worksheet.withholding(&input, dec!(6141));

        assert_eq!(estimate.estimated_annual, dec!(7800));
        assert_eq!(estimate.overpayment, dec!(1659));
        assert!(estimate.from_custom_figure);
    }

    #[test]
    fn se_custom_figure_annualises_quarterly() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(100000));
        input.employment_type = EmploymentType::SelfEmployed;
        input.use_advanced = true;
        input.custom_withholding = Some(dec!(3000));

        let estimate = worksheet.withholding(&input, dec!(12286.7495));

        assert_eq!(estimate.estimated_annual, dec!(12000));
        // Paying in less than owed: no overpayment.
        assert_eq!(estimate.overpayment, dec!(0));
    }

    #[test]
    fn mixed_employment_annualises_quarterly() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(100000));
        input.employment_type = EmploymentType::Mixed;
        input.use_advanced = true;
        input.custom_withholding = Some(dec!(3000));

        let estimate = worksheet.withholding(&input, dec!(10000));

        assert_eq!(estimate.estimated_annual, dec!(12000));
    }

    #[test]
    fn ignored_custom_figure_falls_back_to_heuristic() {
        let config = TaxYearConfig::year_2024();
        let worksheet = LiabilityWorksheet::new(&config);
        let mut input = w2_input(dec!(65000));
        input.custom_withholding = Some(dec!(300)); // use_advanced not set

        let estimate = worksheet.withholding(&input, dec!(6141));

        assert!(!estimate.from_custom_figure);
        assert_eq!(estimate.estimated_annual, dec!(7062.15));
    }
}
