//! widl-util — shared foundation types for the Web IDL front end.
//!
//! This crate holds the small amount of state that is common to the lexer
//! and the parser but is not itself grammar: source positions and the
//! per-parse name registry (§3, §4.2.7 of the design). It carries no
//! parsing logic.

pub mod registry;
pub mod span;

pub use registry::{NameRegistry, RegistryError};
pub use span::Span;

pub use rustc_hash::FxHashMap;
