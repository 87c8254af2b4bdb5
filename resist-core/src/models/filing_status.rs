use serde::{Deserialize, Serialize};

/// Federal filing status. Selects the bracket schedule and standard
/// deduction used for a filer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJointly,
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedJointly => "married_jointly",
            Self::HeadOfHousehold => "head_of_household",
        }
    }

    /// Parses the form-field value supplied by the presentation layer.
    ///
    /// Returns `None` for anything unrecognised; callers that want the
    /// lenient boundary behavior fall back with `unwrap_or_default()`,
    /// which yields [`FilingStatus::Single`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married_jointly" => Some(Self::MarriedJointly),
            "head_of_household" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}

/// A value held once per filing status.
///
/// Bracket schedules and standard deductions both come in threes; this
/// keeps the lookup total so no status can be missing a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerStatus<T> {
    pub single: T,
    pub married_jointly: T,
    pub head_of_household: T,
}

impl<T> PerStatus<T> {
    pub fn get(&self, status: FilingStatus) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedJointly => &self.married_jointly,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }

    /// Visits each per-status value in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FilingStatus, &T)> {
        [
            (FilingStatus::Single, &self.single),
            (FilingStatus::MarriedJointly, &self.married_jointly),
            (FilingStatus::HeadOfHousehold, &self.head_of_household),
        ]
        .into_iter()
    }
}
