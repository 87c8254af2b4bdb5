//! Versioned static configuration for one tax year.
//!
//! Every constant the derivations depend on — bracket schedules, standard
//! deductions, credit amounts, SE rates, contribution caps, penalty rates,
//! and the population-impact assumptions — lives here and is injected into
//! the estimator at construction time. Adding a future year means adding a
//! constructor, not touching derivation logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FilingStatus, PerStatus, TaxBracket};

/// Errors raised by [`TaxYearConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxConfigError {
    /// A filing status has no bracket schedule at all.
    #[error("empty bracket schedule for {0:?}")]
    EmptySchedule(FilingStatus),

    /// The first tier of a schedule must start at zero income.
    #[error("bracket schedule for {status:?} starts at {found} instead of 0")]
    ScheduleStartsAboveZero {
        status: FilingStatus,
        found: Decimal,
    },

    /// Tiers must tile the income axis with no gap or overlap.
    #[error("bracket schedule for {status:?} jumps from {expected} to {found}")]
    ScheduleGap {
        status: FilingStatus,
        expected: Decimal,
        found: Decimal,
    },

    /// A bounded tier whose max does not exceed its min.
    #[error("bracket tier for {status:?} has empty range [{min}, {max})")]
    EmptyTierRange {
        status: FilingStatus,
        min: Decimal,
        max: Decimal,
    },

    /// Only the last tier may be unbounded, and the last tier must be.
    #[error("bracket schedule for {0:?} is not open-topped")]
    ScheduleNotOpenTopped(FilingStatus),

    /// A rate or share that must lie in [0, 1].
    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange {
        field: &'static str,
        value: Decimal,
    },

    /// An amount that must be non-negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    /// An amount that must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount {
        field: &'static str,
        value: Decimal,
    },
}

/// A pre-tax contribution ceiling: the lesser of a percentage of income
/// and a flat annual cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreTaxCap {
    /// Share of gross income that may be contributed.
    pub pct: Decimal,
    /// Absolute annual ceiling (account limits plus HSA).
    pub flat_cap: Decimal,
}

impl PreTaxCap {
    /// Maximum allowable annual contribution at the given gross income.
    pub fn allowance(&self, income: Decimal) -> Decimal {
        (income * self.pct).min(self.flat_cap)
    }
}

/// Fixed national figures behind the population-scale projections.
///
/// These feed the collective-impact table only; no filer input is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssumptions {
    /// Size of the US workforce.
    pub workforce: Decimal,
    /// Total federal income tax withheld nationally per year.
    pub national_annual_withholding: Decimal,
    /// Median individual income.
    pub median_income: Decimal,
    /// Share of median income a typical filer recovers by optimizing.
    pub optimize_share: Decimal,
    /// Share of median income a typical filer redirects charitably.
    pub redirect_share: Decimal,
    /// Workforce fractions to project participation at, ascending.
    pub participation_fractions: Vec<Decimal>,
}

/// All constants for a single tax year.
///
/// Construct with a year constructor such as [`TaxYearConfig::year_2024`],
/// or build one by hand for tests. [`validate`](Self::validate) is called
/// once when an estimator is created; after that every derivation is total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,

    pub brackets: PerStatus<Vec<TaxBracket>>,
    pub standard_deduction: PerStatus<Decimal>,

    /// Credit per qualifying child under 17. Flat; no income phase-out is
    /// modeled (known simplification carried over from the source data).
    pub child_credit_per_child: Decimal,
    /// Credit per other dependent (17+, parents, etc.).
    pub other_dependent_credit: Decimal,

    /// Combined SE tax rate applied to net earnings.
    pub se_tax_rate: Decimal,
    /// Portion of gross SE income treated as net earnings.
    pub se_net_income_factor: Decimal,

    pub pre_tax_cap_w2: PreTaxCap,
    pub pre_tax_cap_se: PreTaxCap,

    /// Charitable redirection as a share of gross income (tier 2).
    pub charitable_pct: Decimal,

    /// Annualised underpayment penalty accrual rate (tier 3).
    pub underpayment_penalty_rate: Decimal,
    /// Flat penalty for a false withholding certificate (tier 3, wage
    /// earners only). Per occurrence, not per paycheck.
    pub false_exemption_penalty: Decimal,

    /// Default ratio of withheld amounts to actual liability when no
    /// observed figure is supplied; models typical over-withholding.
    pub default_withholding_multiplier: Decimal,

    pub impact: ImpactAssumptions,
}

impl TaxYearConfig {
    /// The 2024 federal constants: bracket schedules, standard deductions,
    /// dependent credits, SE rates, and contribution caps.
    pub fn year_2024() -> Self {
        fn tier(
            min: Decimal,
            max: Decimal,
            rate: Decimal,
        ) -> TaxBracket {
            TaxBracket::new(min, Some(max), rate)
        }
        fn top(
            min: Decimal,
            rate: Decimal,
        ) -> TaxBracket {
            TaxBracket::new(min, None, rate)
        }

        Self {
            tax_year: 2024,
            brackets: PerStatus {
                single: vec![
                    tier(dec!(0), dec!(11600), dec!(0.10)),
                    tier(dec!(11600), dec!(47150), dec!(0.12)),
                    tier(dec!(47150), dec!(100525), dec!(0.22)),
                    tier(dec!(100525), dec!(191950), dec!(0.24)),
                    tier(dec!(191950), dec!(243725), dec!(0.32)),
                    tier(dec!(243725), dec!(609350), dec!(0.35)),
                    top(dec!(609350), dec!(0.37)),
                ],
                married_jointly: vec![
                    tier(dec!(0), dec!(23200), dec!(0.10)),
                    tier(dec!(23200), dec!(94300), dec!(0.12)),
                    tier(dec!(94300), dec!(201050), dec!(0.22)),
                    tier(dec!(201050), dec!(383900), dec!(0.24)),
                    tier(dec!(383900), dec!(487450), dec!(0.32)),
                    tier(dec!(487450), dec!(731200), dec!(0.35)),
                    top(dec!(731200), dec!(0.37)),
                ],
                head_of_household: vec![
                    tier(dec!(0), dec!(16550), dec!(0.10)),
                    tier(dec!(16550), dec!(63100), dec!(0.12)),
                    tier(dec!(63100), dec!(100500), dec!(0.22)),
                    tier(dec!(100500), dec!(191950), dec!(0.24)),
                    tier(dec!(191950), dec!(243700), dec!(0.32)),
                    tier(dec!(243700), dec!(609350), dec!(0.35)),
                    top(dec!(609350), dec!(0.37)),
                ],
            },
            standard_deduction: PerStatus {
                single: dec!(14600),
                married_jointly: dec!(29200),
                head_of_household: dec!(21900),
            },
            child_credit_per_child: dec!(2000),
            other_dependent_credit: dec!(500),
            se_tax_rate: dec!(0.153),
            se_net_income_factor: dec!(0.9235),
            // 401k (23000) + HSA (4150); SEP-IRA / Solo 401k (66000) + HSA.
            pre_tax_cap_w2: PreTaxCap {
                pct: dec!(0.20),
                flat_cap: dec!(27150),
            },
            pre_tax_cap_se: PreTaxCap {
                pct: dec!(0.25),
                flat_cap: dec!(70150),
            },
            charitable_pct: dec!(0.10),
            underpayment_penalty_rate: dec!(0.08),
            false_exemption_penalty: dec!(500),
            default_withholding_multiplier: dec!(1.15),
            impact: ImpactAssumptions {
                workforce: dec!(130000000),
                national_annual_withholding: dec!(2100000000000),
                median_income: dec!(63000),
                optimize_share: dec!(0.03),
                redirect_share: dec!(0.07),
                participation_fractions: vec![dec!(0.01), dec!(0.05), dec!(0.10)],
            },
        }
    }

    pub fn brackets_for(
        &self,
        status: FilingStatus,
    ) -> &[TaxBracket] {
        self.brackets.get(status)
    }

    pub fn standard_deduction_for(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        *self.standard_deduction.get(status)
    }

    /// Checks every constant once, so the derivations can stay infallible.
    ///
    /// # Errors
    ///
    /// Returns [`TaxConfigError`] if a schedule is empty, gapped,
    /// overlapping, or not open-topped; if any rate or share falls outside
    /// [0, 1]; or if an amount has the wrong sign.
    pub fn validate(&self) -> Result<(), TaxConfigError> {
        for (status, schedule) in self.brackets.iter() {
            Self::validate_schedule(status, schedule)?;
        }

        for (_, deduction) in self.standard_deduction.iter() {
            Self::non_negative("standard deduction", *deduction)?;
        }

        Self::non_negative("child credit per child", self.child_credit_per_child)?;
        Self::non_negative("other dependent credit", self.other_dependent_credit)?;
        Self::non_negative("false exemption penalty", self.false_exemption_penalty)?;

        Self::rate("SE tax rate", self.se_tax_rate)?;
        Self::rate("SE net income factor", self.se_net_income_factor)?;
        Self::rate("charitable percentage", self.charitable_pct)?;
        Self::rate("underpayment penalty rate", self.underpayment_penalty_rate)?;
        Self::rate("W-2 pre-tax percentage", self.pre_tax_cap_w2.pct)?;
        Self::rate("SE pre-tax percentage", self.pre_tax_cap_se.pct)?;
        Self::non_negative("W-2 pre-tax flat cap", self.pre_tax_cap_w2.flat_cap)?;
        Self::non_negative("SE pre-tax flat cap", self.pre_tax_cap_se.flat_cap)?;

        Self::positive(
            "default withholding multiplier",
            self.default_withholding_multiplier,
        )?;

        Self::positive("workforce", self.impact.workforce)?;
        Self::non_negative(
            "national annual withholding",
            self.impact.national_annual_withholding,
        )?;
        Self::non_negative("median income", self.impact.median_income)?;
        Self::rate("optimize share", self.impact.optimize_share)?;
        Self::rate("redirect share", self.impact.redirect_share)?;
        for fraction in &self.impact.participation_fractions {
            Self::rate("participation fraction", *fraction)?;
        }

        Ok(())
    }

    fn validate_schedule(
        status: FilingStatus,
        schedule: &[TaxBracket],
    ) -> Result<(), TaxConfigError> {
        let Some(first) = schedule.first() else {
            return Err(TaxConfigError::EmptySchedule(status));
        };
        if first.min_income != Decimal::ZERO {
            return Err(TaxConfigError::ScheduleStartsAboveZero {
                status,
                found: first.min_income,
            });
        }

        let mut expected_min = Decimal::ZERO;
        for (index, tier) in schedule.iter().enumerate() {
            if tier.min_income != expected_min {
                return Err(TaxConfigError::ScheduleGap {
                    status,
                    expected: expected_min,
                    found: tier.min_income,
                });
            }
            Self::rate("bracket rate", tier.rate)?;

            match tier.max_income {
                Some(max) => {
                    if max <= tier.min_income {
                        return Err(TaxConfigError::EmptyTierRange {
                            status,
                            min: tier.min_income,
                            max,
                        });
                    }
                    expected_min = max;
                }
                // Unbounded tier: valid only in last position.
                None => {
                    if index != schedule.len() - 1 {
                        return Err(TaxConfigError::ScheduleNotOpenTopped(status));
                    }
                    return Ok(());
                }
            }
        }

        // Fell off the end without seeing an unbounded tier.
        Err(TaxConfigError::ScheduleNotOpenTopped(status))
    }

    fn rate(
        field: &'static str,
        value: Decimal,
    ) -> Result<(), TaxConfigError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(TaxConfigError::RateOutOfRange { field, value });
        }
        Ok(())
    }

    fn non_negative(
        field: &'static str,
        value: Decimal,
    ) -> Result<(), TaxConfigError> {
        if value < Decimal::ZERO {
            return Err(TaxConfigError::NegativeAmount { field, value });
        }
        Ok(())
    }

    fn positive(
        field: &'static str,
        value: Decimal,
    ) -> Result<(), TaxConfigError> {
        if value <= Decimal::ZERO {
            return Err(TaxConfigError::NonPositiveAmount { field, value });
        }
        Ok(())
    }
}
