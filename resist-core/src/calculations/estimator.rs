//! The composed derivation: one input record in, one result record out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::impact::{CollectiveImpact, collective_impact};
use crate::calculations::liability::{LiabilitySummary, LiabilityWorksheet, WithholdingEstimate};
use crate::calculations::scenarios::{
    OptimizeScenario, RedirectScenario, ScenarioPlanner, WithholdScenario,
};
use crate::models::{FilingInput, TaxConfigError, TaxYearConfig};

/// Complete output of one derivation pass.
///
/// Recomputed fresh from the full input on every call; nothing is cached
/// or incrementally updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedResult {
    pub current: LiabilitySummary,
    pub withholding: WithholdingEstimate,
    pub optimize: OptimizeScenario,
    pub redirect: RedirectScenario,
    pub withhold: WithholdScenario,
}

/// Stateless estimator over one tax year's configuration.
///
/// Owns nothing but the injected constants; every derivation is a pure,
/// idempotent function of the input record.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use resist_core::TaxEstimator;
/// use resist_core::models::{EmploymentType, FilingInput, FilingStatus};
///
/// let estimator = TaxEstimator::year_2024();
/// let mut input = FilingInput::new(FilingStatus::Single, EmploymentType::W2);
/// input.annual_income = dec!(65000);
///
/// let result = estimator.derive(&input);
///
/// assert_eq!(result.current.taxable_income, dec!(50400));
/// assert_eq!(result.current.actual_tax, dec!(6141));
/// assert_eq!(result.withholding.estimated_annual, dec!(7062.15));
/// assert_eq!(result.withholding.overpayment, dec!(921.15));
/// ```
#[derive(Debug, Clone)]
pub struct TaxEstimator {
    config: TaxYearConfig,
}

impl TaxEstimator {
    /// Creates an estimator over the given configuration.
    ///
    /// Validation happens here, once; the derivations themselves cannot
    /// fail afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TaxConfigError`] if the configuration is inconsistent.
    pub fn new(config: TaxYearConfig) -> Result<Self, TaxConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Estimator over the built-in 2024 constants, which are known valid.
    pub fn year_2024() -> Self {
        Self {
            config: TaxYearConfig::year_2024(),
        }
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Runs the full derivation for one filer.
    pub fn derive(
        &self,
        input: &FilingInput,
    ) -> DerivedResult {
        let worksheet = LiabilityWorksheet::new(&self.config);
        let planner = ScenarioPlanner::new(&self.config);

        let current = worksheet.assess(input);
        let withholding = worksheet.withholding(input, current.actual_tax);
        let optimize = planner.optimize(input, &current, &withholding);
        let redirect = planner.redirect(input, &current, &withholding);
        let withhold = planner.withhold(input, &current, &withholding);

        debug!(
            income = %input.annual_income,
            actual_tax = %current.actual_tax,
            optimize_savings = %optimize.savings,
            redirect_savings = %redirect.savings,
            "derived full result"
        );

        DerivedResult {
            current,
            withholding,
            optimize,
            redirect,
            withhold,
        }
    }

    /// The population-scale projection table. Depends only on the
    /// configured assumptions, never on a filer.
    pub fn collective_impact(&self) -> CollectiveImpact {
        collective_impact(&self.config.impact)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{EmploymentType, FilingStatus};

    use super::*;

    #[test]
    fn new_rejects_invalid_configuration() {
        let mut config = TaxYearConfig::year_2024();
        config.brackets.single.clear();

        assert_eq!(
            TaxEstimator::new(config).err(),
            Some(TaxConfigError::EmptySchedule(FilingStatus::Single))
        );
    }

    #[test]
    fn derive_is_idempotent() {
        let estimator = TaxEstimator::year_2024();
        let mut input = FilingInput::new(FilingStatus::HeadOfHousehold, EmploymentType::Mixed);
        input.annual_income = dec!(91234.56);
        input.pre_tax_contributions = dec!(1200);
        input.children_under_17 = 1;
        input.other_dependents = 2;

        assert_eq!(estimator.derive(&input), estimator.derive(&input));
    }

    #[test]
    fn derive_composes_the_worksheets() {
        let estimator = TaxEstimator::year_2024();
        let mut input = FilingInput::new(FilingStatus::Single, EmploymentType::W2);
        input.annual_income = dec!(65000);

        let result = estimator.derive(&input);

        assert_eq!(result.current.actual_tax, dec!(6141));
        assert_eq!(result.optimize.savings, dec!(2806.15));
        assert_eq!(result.redirect.savings, dec!(3586.15));
        assert_eq!(result.withhold.withheld_annual, dec!(7062.15));
    }
}
