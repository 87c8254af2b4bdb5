//! Population-scale what-if projections.
//!
//! Pure constant-folding for display: three fixed per-person annual
//! averages multiplied by fixed participation counts. No filer input is
//! involved and nothing here depends on the derivation pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ImpactAssumptions;

/// One participation level of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRow {
    /// Fraction of the workforce participating (e.g. 0.01).
    pub fraction: Decimal,
    /// Number of participants at that fraction.
    pub participants: Decimal,
    /// Aggregate annual dollars across those participants.
    pub annual_total: Decimal,
}

/// A strategy tier's projection across all participation levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactTier {
    /// Average annual amount per participant.
    pub per_capita_annual: Decimal,
    pub rows: Vec<ImpactRow>,
}

/// Projections for all three strategy tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectiveImpact {
    /// Money kept by stopping overpayment (3% of median income each).
    pub optimize: ImpactTier,
    /// Money redirected to causes (7% of median income each).
    pub redirect: ImpactTier,
    /// Full average withholding kept back (national total ÷ workforce).
    pub withhold: ImpactTier,
}

/// Multiplies one per-capita average across the participation fractions.
pub fn project_tier(
    per_capita_annual: Decimal,
    assumptions: &ImpactAssumptions,
) -> ImpactTier {
    let rows = assumptions
        .participation_fractions
        .iter()
        .map(|fraction| {
            let participants = assumptions.workforce * fraction;
            ImpactRow {
                fraction: *fraction,
                participants,
                annual_total: per_capita_annual * participants,
            }
        })
        .collect();

    ImpactTier {
        per_capita_annual,
        rows,
    }
}

/// Builds the full three-tier projection from the fixed assumptions.
pub fn collective_impact(assumptions: &ImpactAssumptions) -> CollectiveImpact {
    let optimize_per_capita = assumptions.median_income * assumptions.optimize_share;
    let redirect_per_capita = assumptions.median_income * assumptions.redirect_share;
    let withhold_per_capita = assumptions.national_annual_withholding / assumptions.workforce;

    CollectiveImpact {
        optimize: project_tier(optimize_per_capita, assumptions),
        redirect: project_tier(redirect_per_capita, assumptions),
        withhold: project_tier(withhold_per_capita, assumptions),
    }
}
