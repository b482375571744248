//! The reference name checker.
//!
//! A [`RefNameChecker`] owns one candidate name and runs it through the
//! [rule table](crate::rules::RULES) once. Validate-mode rules fail fast;
//! sanitize-mode rules rewrite the name in place, and every later rule sees
//! the rewritten name.

use tracing::{debug, trace};

use crate::error::RefNameError;
use crate::names::ReferenceName;
use crate::options::{RuleActionSet, RuleMode, StructuralOptions};
use crate::rules::{Rule, RULES};

/// Checks and sanitizes a single reference name.
///
/// # Examples
///
/// ```
/// use refkit_refs::{
///     RefNameChecker, RefNameError, Rule, RuleActionSet, RuleMode, StructuralOptions,
/// };
///
/// let actions = RuleActionSet::default()
///     .with(Rule::LeadingDot, RuleMode::Sanitize)
///     .with(Rule::TrailingLock, RuleMode::Validate);
///
/// let mut checker = RefNameChecker::new(".a/name", StructuralOptions::default(), actions);
/// assert!(checker.check_ref_name().is_ok());
/// assert_eq!(checker.as_str(), "a/name");
///
/// checker.reset("a/name.lock");
/// assert_eq!(checker.check_ref_name(), Err(RefNameError::TrailingLock));
/// ```
#[derive(Clone, Debug)]
pub struct RefNameChecker {
    name: ReferenceName,
    options: StructuralOptions,
    actions: RuleActionSet,
}

impl RefNameChecker {
    /// Create a checker for `name`.
    pub fn new(
        name: impl Into<ReferenceName>,
        options: StructuralOptions,
        actions: RuleActionSet,
    ) -> Self {
        Self {
            name: name.into(),
            options,
            actions,
        }
    }

    /// Run every configured rule once, in table order.
    ///
    /// Returns the error of the first rule that rejects the name. Rewrites
    /// made by sanitize-mode rules before that point are kept.
    pub fn check_ref_name(&mut self) -> Result<(), RefNameError> {
        for def in &RULES {
            self.check_rule(def.rule)?;
        }
        Ok(())
    }

    /// Apply a single rule under its configured mode.
    pub fn check_rule(&mut self, rule: Rule) -> Result<(), RefNameError> {
        let mode = self.actions.mode(rule);
        if mode == RuleMode::Skip {
            return Ok(());
        }

        let def = rule.definition();
        let current = self.name.as_str();
        let option_active = def.option_active(&self.options);
        trace!(%rule, ?mode, option_active, name = current, "checking ref name rule");

        if !def.violated_by(current, &self.options) {
            return Ok(());
        }

        if mode == RuleMode::Sanitize {
            if let Some(repaired) = def.repair(current, &self.options) {
                debug!(%rule, before = current, after = %repaired, "sanitized ref name");
                self.name = ReferenceName::new(repaired);
                return Ok(());
            }
        }

        debug!(%rule, ?mode, name = current, "ref name rejected");
        Err(def.error())
    }

    /// The current name, including any sanitize rewrites.
    pub fn name(&self) -> &ReferenceName {
        &self.name
    }

    /// The current name as plain text.
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// Consume the checker and return the current name.
    pub fn into_name(self) -> ReferenceName {
        self.name
    }

    /// Replace the candidate name, keeping the options, for another pass.
    pub fn reset(&mut self, name: impl Into<ReferenceName>) {
        self.name = name.into();
    }

    pub fn options(&self) -> &StructuralOptions {
        &self.options
    }

    pub fn actions(&self) -> &RuleActionSet {
        &self.actions
    }
}
