use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed age bands the questionnaire is authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Ages 2-3.
    Toddler,
    /// Ages 4-5.
    Preschool,
    /// Ages 6-8.
    School,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Toddler, Self::Preschool, Self::School]
    }

    /// Maps an age in whole years to its band. Total over all integers:
    /// anything under 2 is a toddler and anything over 8 is school age.
    pub const fn classify(age_years: i32) -> Self {
        match age_years {
            i32::MIN..=3 => Self::Toddler,
            4..=5 => Self::Preschool,
            _ => Self::School,
        }
    }

    /// Short code persisted alongside results.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Toddler => "2-3",
            Self::Preschool => "4-5",
            Self::School => "6-8",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Toddler => "Toddler (2-3 years)",
            Self::Preschool => "Preschool (4-5 years)",
            Self::School => "School age (6-8 years)",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
