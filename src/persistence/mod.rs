//! Template persistence layer
//!
//! File-backed storage for named schema templates, plus the fixed set of
//! built-in example templates that every installation exposes.

pub mod error;
pub mod store;

pub use error::PersistenceError;
pub use store::{builtin_templates, FileTemplateStore, TemplateStore};

#[cfg(test)]
mod store_test;
