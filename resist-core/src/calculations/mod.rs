//! Derivation pipeline for the resistance estimator.
//!
//! Organised the way the output reads: the current liability and
//! withholding estimate first, then the three strategy tiers against that
//! baseline, then the population-scale projections, all composed by
//! [`TaxEstimator`].

pub mod brackets;
pub mod common;
pub mod estimator;
pub mod impact;
pub mod liability;
pub mod scenarios;

pub use brackets::bracket_tax;
pub use estimator::{DerivedResult, TaxEstimator};
pub use impact::{CollectiveImpact, ImpactRow, ImpactTier, collective_impact};
pub use liability::{LiabilitySummary, LiabilityWorksheet, SelfEmploymentTax, WithholdingEstimate};
pub use scenarios::{OptimizeScenario, RedirectScenario, ScenarioPlanner, WithholdScenario};
