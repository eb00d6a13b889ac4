// crates/ports/src/selection.rs
use readability_shared_kernel::Result;

/// Port returning the raw, unparsed formula selection (e.g. `"ari, fk"`).
pub trait FormulaSelector {
    fn read_selection(&self) -> Result<String>;
}
