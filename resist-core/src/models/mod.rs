mod employment_type;
mod filing_input;
mod filing_status;
mod tax_bracket;
mod year_config;

pub use employment_type::EmploymentType;
pub use filing_input::FilingInput;
pub use filing_status::{FilingStatus, PerStatus};
pub use tax_bracket::TaxBracket;
pub use year_config::{ImpactAssumptions, PreTaxCap, TaxConfigError, TaxYearConfig};
