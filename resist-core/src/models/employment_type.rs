use serde::{Deserialize, Serialize};

/// How the filer earns income. Drives self-employment tax, the pre-tax
/// contribution cap, the withholding cadence, and the tier-3 penalty mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Wages only; the employer withholds on a biweekly paycheck.
    #[default]
    W2,
    /// 1099 / self-employment income only; quarterly estimated payments.
    SelfEmployed,
    /// Both W-2 wages and self-employment income.
    Mixed,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W2 => "w2",
            Self::SelfEmployed => "self",
            Self::Mixed => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "w2" => Some(Self::W2),
            "self" => Some(Self::SelfEmployed),
            "both" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// True when any portion of income arrives as W-2 wages.
    ///
    /// Wage earners file a withholding certificate, so the tier-3
    /// false-exemption penalty applies to them.
    pub fn has_wages(&self) -> bool {
        matches!(self, Self::W2 | Self::Mixed)
    }

    /// True when any portion of income is self-employment income, which
    /// makes SE tax and its deductible half apply.
    pub fn has_se_income(&self) -> bool {
        matches!(self, Self::SelfEmployed | Self::Mixed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_type() {
        for ty in [
            EmploymentType::W2,
            EmploymentType::SelfEmployed,
            EmploymentType::Mixed,
        ] {
            assert_eq!(EmploymentType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn unknown_type_falls_back_to_w2() {
        assert_eq!(
            EmploymentType::parse("contractor").unwrap_or_default(),
            EmploymentType::W2
        );
        assert_eq!(
            EmploymentType::parse("").unwrap_or_default(),
            EmploymentType::W2
        );
    }

    #[test]
    fn mixed_has_both_income_kinds() {
        assert!(EmploymentType::Mixed.has_wages());
        assert!(EmploymentType::Mixed.has_se_income());
    }

    #[test]
    fn w2_has_no_se_income() {
        assert!(!EmploymentType::W2.has_se_income());
    }

    #[test]
    fn self_employed_has_no_wages() {
        assert!(!EmploymentType::SelfEmployed.has_wages());
    }
}
