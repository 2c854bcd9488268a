use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domains::scale::ScaleError;

/// Gender of the person being rated. Selects the criterion catalog,
/// the category table and gendered wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Genitive form used in the prompt header ("Анализ партнёра ...").
    pub fn subject_label(&self) -> &'static str {
        match self {
            Gender::Male => "партнёра",
            Gender::Female => "партнёрши",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ScaleError::UnknownGender(other.to_string())),
        }
    }
}
