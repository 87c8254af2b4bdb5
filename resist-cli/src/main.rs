//! Command-line front end for the resistance estimator.
//!
//! This is the "external collaborator" side of the core's function-call
//! boundary: it coerces raw field strings into a `FilingInput` (malformed
//! numbers become zero, unknown statuses fall back to their defaults),
//! invokes one derivation pass, and prints the complete result.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

use resist_core::TaxEstimator;
use resist_core::models::{EmploymentType, FilingInput, FilingStatus};

/// Estimate federal tax liability and the three resistance tiers.
///
/// Numeric fields accept raw form-style strings; anything that does not
/// parse is treated as zero rather than rejected.
#[derive(Parser, Debug)]
#[command(name = "resist")]
#[command(version, about, long_about = None)]
struct Args {
    /// Filing status: single, married_jointly, or head_of_household
    #[arg(short = 's', long, default_value = "single")]
    filing_status: String,

    /// Employment type: w2, self, or both
    #[arg(short = 'e', long, default_value = "w2")]
    employment: String,

    /// Gross annual income
    #[arg(short = 'i', long, default_value = "0")]
    income: String,

    /// Current annual pre-tax contributions (401k, SEP-IRA, HSA, ...)
    #[arg(short = 'p', long, default_value = "0")]
    pre_tax: String,

    /// Children under 17
    #[arg(short = 'c', long, default_value = "0")]
    children: String,

    /// Other dependents (17+, parents, etc.)
    #[arg(short = 'o', long, default_value = "0")]
    other_dependents: String,

    /// Observed federal tax per biweekly paycheck (W-2) or per quarterly
    /// payment (self-employed / mixed); enables the exact-figures path
    #[arg(short = 'w', long)]
    withholding_per_period: Option<String>,

    /// Also print the population-scale projection table
    #[arg(long, default_value_t = false)]
    impact: bool,
}

/// Display cadence for per-period figures: biweekly paychecks for pure
/// W-2 filers, quarterly payments otherwise.
fn periods_per_year(employment: EmploymentType) -> Decimal {
    if employment == EmploymentType::W2 {
        Decimal::from(26u32)
    } else {
        Decimal::from(4u32)
    }
}

fn build_input(args: &Args) -> FilingInput {
    let filing_status = FilingStatus::parse(&args.filing_status).unwrap_or_default();
    let employment_type = EmploymentType::parse(&args.employment).unwrap_or_default();

    let mut input = FilingInput::new(filing_status, employment_type);
    input.annual_income = FilingInput::parse_amount(&args.income);
    input.pre_tax_contributions = FilingInput::parse_amount(&args.pre_tax);
    input.children_under_17 = FilingInput::parse_count(&args.children);
    input.other_dependents = FilingInput::parse_count(&args.other_dependents);

    if let Some(raw) = &args.withholding_per_period {
        input.custom_withholding = Some(FilingInput::parse_amount(raw));
        input.use_advanced = true;
    }

    input
}

fn row(
    label: &str,
    amount: Decimal,
) {
    println!("  {label:<28} {:>14}", amount.round_dp(2));
}

fn main() -> Result<()> {
    logging::init_default_logging().context("initialize logging")?;

    let args = Args::parse();
    let estimator = TaxEstimator::year_2024();
    let input = build_input(&args);
    debug!(?input, "coerced command-line input");

    let result = estimator.derive(&input);
    let periods = periods_per_year(input.employment_type);
    let period_label = if input.employment_type == EmploymentType::W2 {
        "per paycheck"
    } else {
        "per quarter"
    };

    println!(
        "Tax year {} | {} | {} | income {}",
        estimator.config().tax_year,
        input.filing_status.as_str(),
        input.employment_type.as_str(),
        input.annual_income.round_dp(2),
    );
    if input.total_dependents() > 0 {
        println!(
            "{} dependent(s): {} under 17, {} other",
            input.total_dependents(),
            input.children_under_17,
            input.other_dependents,
        );
    }
    println!();

    println!("Current position");
    if result.current.se.tax > Decimal::ZERO {
        row("SE net earnings", result.current.se.net_earnings);
        row("SE tax", result.current.se.tax);
        row("SE tax deduction", result.current.se.deduction);
    }
    row("Standard deduction", result.current.standard_deduction);
    row("Taxable income", result.current.taxable_income);
    row("Tax before credits", result.current.tax_before_credits);
    if result.current.total_credits > Decimal::ZERO {
        row("Dependent credits", result.current.total_credits);
    }
    row("Actual tax owed", result.current.actual_tax);
    let source = if result.withholding.from_custom_figure {
        "from your figures"
    } else {
        "estimated at 115% of tax"
    };
    println!(
        "  {:<28} {:>14}  ({source})",
        "Annual withholding",
        result.withholding.estimated_annual.round_dp(2),
    );
    row("Overpayment", result.withholding.overpayment);
    println!();

    println!("Tier 1 - optimize (zero risk)");
    row("Max pre-tax allowance", result.optimize.max_pre_tax);
    row("Additional headroom", result.optimize.additional_pre_tax);
    row("Scenario tax", result.optimize.tax);
    row("Kept from the Treasury", result.optimize.savings);
    row(period_label, result.optimize.savings / periods);
    println!();

    println!("Tier 2 - redirect (low risk)");
    row("Charitable redirection", result.redirect.charitable_contribution);
    row("Scenario tax", result.redirect.tax);
    row("Kept from the Treasury", result.redirect.savings);
    println!();

    println!("Tier 3 - withhold (real risk)");
    row("Withheld from remittance", result.withhold.withheld_annual);
    row(period_label, result.withhold.withheld_annual / periods);
    row("Underpayment penalty", result.withhold.underpayment_penalty);
    if result.withhold.false_exemption_penalty > Decimal::ZERO {
        row(
            "False-certificate penalty",
            result.withhold.false_exemption_penalty,
        );
    }
    row("Total penalty risk", result.withhold.total_risk);
    row("Worst case at filing", result.withhold.worst_case_exposure);

    if args.impact {
        println!();
        println!("Collective impact per year");
        let impact = estimator.collective_impact();
        for (label, tier) in [
            ("optimize", &impact.optimize),
            ("redirect", &impact.redirect),
            ("withhold", &impact.withhold),
        ] {
            for level in &tier.rows {
                println!(
                    "  {label:<9} {:>5}% of the workforce ({:>10}) {:>22}",
                    (level.fraction * Decimal::ONE_HUNDRED).round_dp(0),
                    level.participants.round_dp(0),
                    level.annual_total.round_dp(0),
                );
            }
        }
    }

    Ok(())
}
