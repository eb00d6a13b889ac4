use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The closed set of supported readability formulas.
///
/// Variant order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormulaId {
    #[serde(rename = "ARI")]
    Ari,
    #[serde(rename = "FK")]
    Fk,
    #[serde(rename = "SMOG")]
    Smog,
    #[serde(rename = "CL")]
    Cl,
}

impl FormulaId {
    pub const ALL: [Self; 4] = [Self::Ari, Self::Fk, Self::Smog, Self::Cl];

    /// Short identifier accepted on input (`ARI`, `FK`, `SMOG`, `CL`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::Fk => "FK",
            Self::Smog => "SMOG",
            Self::Cl => "CL",
        }
    }

    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::Fk => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::Cl => "Coleman–Liau index",
        }
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FormulaId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ARI" => Ok(Self::Ari),
            "FK" => Ok(Self::Fk),
            "SMOG" => Ok(Self::Smog),
            "CL" => Ok(Self::Cl),
            other => Err(format!("Unknown score: {other}")),
        }
    }
}
