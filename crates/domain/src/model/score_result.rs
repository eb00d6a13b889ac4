use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FormulaId;

/// One score per requested formula; unrequested formulas are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreResult(BTreeMap<FormulaId, f64>);

impl ScoreResult {
    pub fn get(&self, formula: FormulaId) -> Option<f64> {
        self.0.get(&formula).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormulaId, f64)> + '_ {
        self.0.iter().map(|(formula, value)| (*formula, *value))
    }
}

impl FromIterator<(FormulaId, f64)> for ScoreResult {
    fn from_iter<I: IntoIterator<Item = (FormulaId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
