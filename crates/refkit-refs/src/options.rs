//! Checker options: per-rule modes and the structural switches that modulate
//! individual rules.

use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// What the checker does with one rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// The rule is not evaluated.
    #[default]
    Skip,
    /// A violation is reported as an error and the name is left untouched.
    Validate,
    /// A violation is repaired by rewriting the name.
    Sanitize,
}

impl RuleMode {
    /// Returns `true` if the rule is evaluated at all.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// One of the switches in [`StructuralOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralOption {
    /// Names without any `/` are accepted.
    AllowOneLevel,
    /// A single interior `*` is accepted as a wildcard.
    RefSpecPattern,
    /// Runs of `/` may be collapsed instead of rejected.
    Normalize,
}

/// Switches that relax or change specific rules.
///
/// All switches default to `false`. Build with [`Default`] and the `with_*`
/// methods:
///
/// ```
/// use refkit_refs::StructuralOptions;
///
/// let opts = StructuralOptions::default()
///     .with_allow_one_level(true)
///     .with_normalize(true);
/// assert!(opts.allow_one_level);
/// assert!(!opts.refspec_pattern);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralOptions {
    /// Waive the "at least one forward slash" rule.
    pub allow_one_level: bool,
    /// Accept one `*` that is neither the first nor the last character.
    ///
    /// Applies in both modes: Validate accepts such a name and Sanitize
    /// keeps the `*` while stripping the other excluded characters.
    pub refspec_pattern: bool,
    /// Let sanitize collapse consecutive slashes.
    pub normalize: bool,
}

impl StructuralOptions {
    pub fn with_allow_one_level(mut self, allow: bool) -> Self {
        self.allow_one_level = allow;
        self
    }

    pub fn with_refspec_pattern(mut self, pattern: bool) -> Self {
        self.refspec_pattern = pattern;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Returns whether the given switch is set.
    pub fn is_set(&self, option: StructuralOption) -> bool {
        match option {
            StructuralOption::AllowOneLevel => self.allow_one_level,
            StructuralOption::RefSpecPattern => self.refspec_pattern,
            StructuralOption::Normalize => self.normalize,
        }
    }
}

/// The mode assigned to each of the ten rules.
///
/// Every rule defaults to [`RuleMode::Skip`], so an empty set checks nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleActionSet {
    pub leading_dot: RuleMode,
    pub trailing_lock: RuleMode,
    pub at_least_one_forward_slash: RuleMode,
    pub double_dots: RuleMode,
    pub excluded_characters: RuleMode,
    pub leading_forward_slash: RuleMode,
    pub trailing_forward_slash: RuleMode,
    pub consecutive_forward_slashes: RuleMode,
    pub trailing_dot: RuleMode,
    pub at_open_brace: RuleMode,
}

impl RuleActionSet {
    /// A set with every rule in the same mode.
    pub fn uniform(mode: RuleMode) -> Self {
        Rule::ALL
            .iter()
            .fold(Self::default(), |set, rule| set.with(*rule, mode))
    }

    /// Every rule in [`RuleMode::Validate`].
    pub fn validate_all() -> Self {
        Self::uniform(RuleMode::Validate)
    }

    /// Every rule in [`RuleMode::Sanitize`].
    pub fn sanitize_all() -> Self {
        Self::uniform(RuleMode::Sanitize)
    }

    /// Return a copy with `rule` set to `mode`.
    pub fn with(mut self, rule: Rule, mode: RuleMode) -> Self {
        self.set(rule, mode);
        self
    }

    /// Set the mode for `rule` in place.
    pub fn set(&mut self, rule: Rule, mode: RuleMode) {
        *self.slot(rule) = mode;
    }

    /// The mode configured for `rule`.
    pub fn mode(&self, rule: Rule) -> RuleMode {
        match rule {
            Rule::LeadingDot => self.leading_dot,
            Rule::TrailingLock => self.trailing_lock,
            Rule::AtLeastOneForwardSlash => self.at_least_one_forward_slash,
            Rule::DoubleDots => self.double_dots,
            Rule::ExcludedCharacters => self.excluded_characters,
            Rule::LeadingForwardSlash => self.leading_forward_slash,
            Rule::TrailingForwardSlash => self.trailing_forward_slash,
            Rule::ConsecutiveForwardSlashes => self.consecutive_forward_slashes,
            Rule::TrailingDot => self.trailing_dot,
            Rule::AtOpenBrace => self.at_open_brace,
        }
    }

    /// Rules that are not skipped, in table order.
    pub fn enabled(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL
            .iter()
            .copied()
            .filter(|rule| self.mode(*rule).is_enabled())
    }

    fn slot(&mut self, rule: Rule) -> &mut RuleMode {
        match rule {
            Rule::LeadingDot => &mut self.leading_dot,
            Rule::TrailingLock => &mut self.trailing_lock,
            Rule::AtLeastOneForwardSlash => &mut self.at_least_one_forward_slash,
            Rule::DoubleDots => &mut self.double_dots,
            Rule::ExcludedCharacters => &mut self.excluded_characters,
            Rule::LeadingForwardSlash => &mut self.leading_forward_slash,
            Rule::TrailingForwardSlash => &mut self.trailing_forward_slash,
            Rule::ConsecutiveForwardSlashes => &mut self.consecutive_forward_slashes,
            Rule::TrailingDot => &mut self.trailing_dot,
            Rule::AtOpenBrace => &mut self.at_open_brace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skips_everything() {
        let set = RuleActionSet::default();
        for rule in Rule::ALL {
            assert_eq!(set.mode(rule), RuleMode::Skip);
        }
        assert_eq!(set.enabled().count(), 0);
    }

    #[test]
    fn with_sets_only_one_rule() {
        let set = RuleActionSet::default().with(Rule::DoubleDots, RuleMode::Validate);
        assert_eq!(set.mode(Rule::DoubleDots), RuleMode::Validate);
        assert_eq!(set.mode(Rule::LeadingDot), RuleMode::Skip);
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec![Rule::DoubleDots]);
    }

    #[test]
    fn uniform_presets() {
        let validate = RuleActionSet::validate_all();
        let sanitize = RuleActionSet::sanitize_all();
        for rule in Rule::ALL {
            assert_eq!(validate.mode(rule), RuleMode::Validate);
            assert_eq!(sanitize.mode(rule), RuleMode::Sanitize);
        }
    }

    #[test]
    fn enabled_follows_table_order() {
        let set = RuleActionSet::default()
            .with(Rule::AtOpenBrace, RuleMode::Sanitize)
            .with(Rule::LeadingDot, RuleMode::Validate);
        assert_eq!(
            set.enabled().collect::<Vec<_>>(),
            vec![Rule::LeadingDot, Rule::AtOpenBrace]
        );
    }

    #[test]
    fn structural_option_lookup() {
        let opts = StructuralOptions::default().with_refspec_pattern(true);
        assert!(opts.is_set(StructuralOption::RefSpecPattern));
        assert!(!opts.is_set(StructuralOption::AllowOneLevel));
        assert!(!opts.is_set(StructuralOption::Normalize));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let set: RuleActionSet =
            serde_json::from_str(r#"{"leading_dot":"validate","at_open_brace":"sanitize"}"#)
                .unwrap();
        assert_eq!(set.leading_dot, RuleMode::Validate);
        assert_eq!(set.at_open_brace, RuleMode::Sanitize);
        assert_eq!(set.double_dots, RuleMode::Skip);
    }
}
