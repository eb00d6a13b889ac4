// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod prompt;
pub mod text_source;

pub use prompt::{FixedSelector, PROMPT, PromptSelector};
pub use text_source::FileTextSource;
