//! Reference names for refkit.
//!
//! This crate checks and sanitizes reference names (branches, tags, remote
//! tracking refs, notes, and ref-spec patterns) against git's formatting
//! rules, and provides the name and reference types that carry them.
//!
//! # Architecture
//!
//! - The **rule table** ([`RULES`]) lists ten formatting rules in a fixed
//!   order. Each has a detection predicate, a repair, and possibly a
//!   structural option that changes it.
//! - Each rule runs in one [`RuleMode`]: skipped, validated (a violation is
//!   an error), or sanitized (a violation is rewritten away).
//! - A [`RefNameChecker`] runs one name through the table once. The first
//!   validation failure stops the pass; sanitize rewrites accumulate and are
//!   seen by every later rule.
//!
//! # Modules
//!
//! - [`error`] - [`RefNameError`] (one variant per rule) and [`RefError`]
//! - [`rules`] - The rule table: [`Rule`], [`RuleDefinition`], [`RULES`]
//! - [`options`] - [`RuleMode`], [`StructuralOptions`], [`RuleActionSet`]
//! - [`checker`] - The [`RefNameChecker`] pass
//! - [`config`] - [`CheckerConfig`] presets and TOML/JSON loading
//! - [`names`] - [`ReferenceName`] and canonical-name builders
//! - [`types`] - [`Reference`] and [`ReferenceType`]

pub mod checker;
pub mod config;
pub mod error;
pub mod names;
pub mod options;
pub mod rules;
pub mod types;

pub use checker::RefNameChecker;
pub use config::CheckerConfig;
pub use error::{RefError, RefNameError, Result};
pub use names::ReferenceName;
pub use options::{RuleActionSet, RuleMode, StructuralOption, StructuralOptions};
pub use rules::{Rule, RuleDefinition, RULES};
pub use types::{Reference, ReferenceType};
