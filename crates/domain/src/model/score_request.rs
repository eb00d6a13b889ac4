use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::FormulaId;

/// Shorthand token that selects every formula.
pub const ALL_TOKEN: &str = "ALL";

/// Set of formulas the caller asked for, iterated in reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreRequest(BTreeSet<FormulaId>);

impl ScoreRequest {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        FormulaId::ALL.into_iter().collect()
    }

    /// Parses a free-form selection such as `"ari, fk"` or `"all"`.
    ///
    /// Tokens are separated by whitespace, `,` or `+`. Unknown tokens and
    /// duplicates are ignored.
    pub fn parse(input: &str) -> Self {
        let mut formulas = BTreeSet::new();
        for token in input.split(is_separator).filter(|t| !t.is_empty()) {
            let token = token.to_ascii_uppercase();
            if token == ALL_TOKEN {
                formulas.extend(FormulaId::ALL);
                continue;
            }
            match token.parse::<FormulaId>() {
                Ok(formula) => {
                    formulas.insert(formula);
                }
                Err(_) => log::warn!("ignoring unknown score selection '{token}'"),
            }
        }
        Self(formulas)
    }

    pub fn contains(&self, formula: FormulaId) -> bool {
        self.0.contains(&formula)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FormulaId> + '_ {
        self.0.iter().copied()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '+'
}

impl FromIterator<FormulaId> for ScoreRequest {
    fn from_iter<I: IntoIterator<Item = FormulaId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
