//! The three resistance tiers, derived against a baseline liability.
//!
//! Tier 1 (optimize) raises pre-tax contributions to the legal maximum and
//! stops over-withholding. Tier 2 (redirect) adds a charitable deduction of
//! 10% of gross income on top of tier 1. Tier 3 (withhold) reduces no tax;
//! it keeps the entire estimated remittance and carries a penalty-risk
//! estimate instead.
//!
//! Each tier is a strict superset of the previous tier's deductions, so
//! for any fixed input: tier-2 tax ≤ tier-1 tax ≤ baseline tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::floor_at_zero;
use crate::calculations::liability::{LiabilitySummary, LiabilityWorksheet, WithholdingEstimate};
use crate::models::{EmploymentType, FilingInput, TaxYearConfig};

/// Tier 1: maximum legal pre-tax contributions, no extra risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeScenario {
    /// Maximum allowable annual pre-tax contribution for this filer.
    pub max_pre_tax: Decimal,
    /// Headroom left above the filer's current contributions.
    pub additional_pre_tax: Decimal,

    pub taxable_income: Decimal,
    pub tax_before_credits: Decimal,
    /// Tax owed under the scenario.
    pub tax: Decimal,

    /// Baseline actual tax minus scenario tax.
    pub tax_reduction: Decimal,
    /// Tax reduction plus the overpayment already being made.
    pub savings: Decimal,
}

/// Tier 2: tier 1 plus redirecting 10% of gross income to charity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectScenario {
    /// Annual charitable redirection (10% of gross income).
    pub charitable_contribution: Decimal,
    pub max_pre_tax: Decimal,

    pub taxable_income: Decimal,
    pub tax_before_credits: Decimal,
    pub tax: Decimal,

    pub tax_reduction: Decimal,
    pub savings: Decimal,
}

/// Tier 3: non-compliant withholding of the full remittance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdScenario {
    /// Annual amount kept back: the entire estimated withholding.
    pub withheld_annual: Decimal,

    /// Underpayment penalty accrual, 8% of actual tax.
    pub underpayment_penalty: Decimal,
    /// Flat false-certificate penalty; zero for pure self-employment,
    /// which files no withholding certificate.
    pub false_exemption_penalty: Decimal,
    pub total_risk: Decimal,

    /// Tax owed plus total penalties, the worst case at filing time.
    pub worst_case_exposure: Decimal,
}

/// Derives the strategy tiers from a baseline liability.
#[derive(Debug, Clone)]
pub struct ScenarioPlanner<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> ScenarioPlanner<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Maximum allowable pre-tax contribution for the filer's employment
    /// type: the W-2 cap, the SE cap, or the larger of the two for mixed
    /// employment.
    pub fn max_pre_tax(
        &self,
        input: &FilingInput,
    ) -> Decimal {
        let w2 = self.config.pre_tax_cap_w2.allowance(input.annual_income);
        let se = self.config.pre_tax_cap_se.allowance(input.annual_income);
        match input.employment_type {
            EmploymentType::W2 => w2,
            EmploymentType::SelfEmployed => se,
            EmploymentType::Mixed => w2.max(se),
        }
    }

    /// Tier 1: recompute with the maximum contribution in place of the
    /// filer's actual contribution, everything else constant.
    pub fn optimize(
        &self,
        input: &FilingInput,
        baseline: &LiabilitySummary,
        withholding: &WithholdingEstimate,
    ) -> OptimizeScenario {
        let max_pre_tax = self.max_pre_tax(input);
        if input.pre_tax_contributions > max_pre_tax {
            warn!(
                contributions = %input.pre_tax_contributions,
                allowance = %max_pre_tax,
                "current contributions already exceed the modeled allowance"
            );
        }

        let (taxable_income, tax_before_credits, tax) = LiabilityWorksheet::new(self.config)
            .tax_with_deductions(
                input,
                max_pre_tax + baseline.standard_deduction,
                baseline.se.deduction,
                baseline.total_credits,
            );

        let tax_reduction = baseline.actual_tax - tax;
        OptimizeScenario {
            max_pre_tax,
            additional_pre_tax: floor_at_zero(max_pre_tax - input.pre_tax_contributions),
            taxable_income,
            tax_before_credits,
            tax,
            tax_reduction,
            savings: tax_reduction + withholding.overpayment,
        }
    }

    /// Tier 2: tier 1 plus a charitable deduction of 10% of gross income.
    pub fn redirect(
        &self,
        input: &FilingInput,
        baseline: &LiabilitySummary,
        withholding: &WithholdingEstimate,
    ) -> RedirectScenario {
        let max_pre_tax = self.max_pre_tax(input);
        let charitable_contribution = input.annual_income * self.config.charitable_pct;

        let (taxable_income, tax_before_credits, tax) = LiabilityWorksheet::new(self.config)
            .tax_with_deductions(
                input,
                max_pre_tax + baseline.standard_deduction + charitable_contribution,
                baseline.se.deduction,
                baseline.total_credits,
            );

        let tax_reduction = baseline.actual_tax - tax;
        RedirectScenario {
            charitable_contribution,
            max_pre_tax,
            taxable_income,
            tax_before_credits,
            tax,
            tax_reduction,
            savings: tax_reduction + withholding.overpayment,
        }
    }

    /// Tier 3: withhold the entire estimated remittance; no tax changes,
    /// only a penalty-risk estimate.
    pub fn withhold(
        &self,
        input: &FilingInput,
        baseline: &LiabilitySummary,
        withholding: &WithholdingEstimate,
    ) -> WithholdScenario {
        let underpayment_penalty = baseline.actual_tax * self.config.underpayment_penalty_rate;
        let false_exemption_penalty = if input.employment_type.has_wages() {
            self.config.false_exemption_penalty
        } else {
            Decimal::ZERO
        };
        let total_risk = underpayment_penalty + false_exemption_penalty;

        WithholdScenario {
            withheld_annual: withholding.estimated_annual,
            underpayment_penalty,
            false_exemption_penalty,
            total_risk,
            worst_case_exposure: baseline.actual_tax + total_risk,
        }
    }
}
