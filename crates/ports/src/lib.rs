//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`text_source`]: loading the document to score
//! - [`selection`]: obtaining the user's formula selection
//!
//! These ports keep the use case independent of files and consoles.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod selection;
pub mod text_source;
