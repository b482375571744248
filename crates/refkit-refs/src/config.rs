//! Checker configuration: presets and TOML/JSON loading.

use serde::{Deserialize, Serialize};

use crate::checker::RefNameChecker;
use crate::error::{RefError, Result};
use crate::names::ReferenceName;
use crate::options::{RuleActionSet, StructuralOptions};

/// Configuration for reference name checking.
///
/// Bundles the structural switches with the per-rule modes. Missing fields
/// fall back to their defaults, so a document only needs to name the rules
/// it wants enabled:
///
/// ```toml
/// [options]
/// normalize = true
///
/// [actions]
/// leading_dot = "validate"
/// consecutive_forward_slashes = "sanitize"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub options: StructuralOptions,
    pub actions: RuleActionSet,
}

impl CheckerConfig {
    pub fn new(options: StructuralOptions, actions: RuleActionSet) -> Self {
        Self { options, actions }
    }

    /// Every rule enforced, no structural relaxations.
    pub fn strict() -> Self {
        Self::new(StructuralOptions::default(), RuleActionSet::validate_all())
    }

    /// Every rule repaired where a repair exists.
    ///
    /// One-level names are allowed and slash runs are collapsed, so a check
    /// under this configuration never fails.
    pub fn sanitizing() -> Self {
        Self::new(
            StructuralOptions::default()
                .with_allow_one_level(true)
                .with_normalize(true),
            RuleActionSet::sanitize_all(),
        )
    }

    /// Strict checking that also accepts one interior `*` wildcard.
    pub fn refspec_pattern() -> Self {
        Self::new(
            StructuralOptions::default().with_refspec_pattern(true),
            RuleActionSet::validate_all(),
        )
    }

    /// Build a checker for `name` with this configuration.
    pub fn checker(&self, name: impl Into<ReferenceName>) -> RefNameChecker {
        RefNameChecker::new(name, self.options, self.actions)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RefError::Config(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| RefError::Config(e.to_string()))
    }

    /// Serialize to a JSON document.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RefError::Config(e.to_string()))
    }
}
