//! The rule table.
//!
//! [`RULES`] lists the ten formatting rules in the order the checker applies
//! them. Each entry pairs a detection predicate with a repair transform and
//! names the structural option, if any, that changes its behavior. The table
//! and the patterns it uses are immutable and shared by every checker.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RefNameError;
use crate::options::{StructuralOption, StructuralOptions};

/// Identifier of a single formatting rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    LeadingDot,
    TrailingLock,
    AtLeastOneForwardSlash,
    DoubleDots,
    ExcludedCharacters,
    LeadingForwardSlash,
    TrailingForwardSlash,
    ConsecutiveForwardSlashes,
    TrailingDot,
    AtOpenBrace,
}

impl Rule {
    /// All rules, in checking order.
    pub const ALL: [Rule; 10] = [
        Rule::LeadingDot,
        Rule::TrailingLock,
        Rule::AtLeastOneForwardSlash,
        Rule::DoubleDots,
        Rule::ExcludedCharacters,
        Rule::LeadingForwardSlash,
        Rule::TrailingForwardSlash,
        Rule::ConsecutiveForwardSlashes,
        Rule::TrailingDot,
        Rule::AtOpenBrace,
    ];

    /// Stable snake_case name, matching the serde and config key.
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::LeadingDot => "leading_dot",
            Rule::TrailingLock => "trailing_lock",
            Rule::AtLeastOneForwardSlash => "at_least_one_forward_slash",
            Rule::DoubleDots => "double_dots",
            Rule::ExcludedCharacters => "excluded_characters",
            Rule::LeadingForwardSlash => "leading_forward_slash",
            Rule::TrailingForwardSlash => "trailing_forward_slash",
            Rule::ConsecutiveForwardSlashes => "consecutive_forward_slashes",
            Rule::TrailingDot => "trailing_dot",
            Rule::AtOpenBrace => "at_open_brace",
        }
    }

    /// The error reported when this rule rejects a name.
    pub fn error(self) -> RefNameError {
        match self {
            Rule::LeadingDot => RefNameError::LeadingDot,
            Rule::TrailingLock => RefNameError::TrailingLock,
            Rule::AtLeastOneForwardSlash => RefNameError::AtLeastOneForwardSlash,
            Rule::DoubleDots => RefNameError::DoubleDots,
            Rule::ExcludedCharacters => RefNameError::ExcludedCharacters,
            Rule::LeadingForwardSlash => RefNameError::LeadingForwardSlash,
            Rule::TrailingForwardSlash => RefNameError::TrailingForwardSlash,
            Rule::ConsecutiveForwardSlashes => RefNameError::ConsecutiveForwardSlashes,
            Rule::TrailingDot => RefNameError::TrailingDot,
            Rule::AtOpenBrace => RefNameError::AtOpenBrace,
        }
    }

    /// This rule's entry in [`RULES`].
    pub fn definition(self) -> &'static RuleDefinition {
        &RULES[self as usize]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Detect = fn(&str, &StructuralOptions) -> bool;
type Repair = fn(&str, &StructuralOptions) -> Option<String>;

/// One row of the rule table.
pub struct RuleDefinition {
    /// Which rule this row defines.
    pub rule: Rule,
    /// The structural option that changes this rule, if any.
    pub option: Option<StructuralOption>,
    detect: Detect,
    repair: Repair,
}

impl RuleDefinition {
    /// Returns `true` if `name` violates this rule under `options`.
    pub fn violated_by(&self, name: &str, options: &StructuralOptions) -> bool {
        (self.detect)(name, options)
    }

    /// Rewrite `name` so the violation disappears.
    ///
    /// Returns `None` when the rule has no repair under `options`; the
    /// checker then reports the rule's error even in sanitize mode.
    pub fn repair(&self, name: &str, options: &StructuralOptions) -> Option<String> {
        (self.repair)(name, options)
    }

    /// The error reported when this rule rejects a name.
    pub fn error(&self) -> RefNameError {
        self.rule.error()
    }

    /// Returns `true` if this rule depends on a structural option and that
    /// option is set.
    pub fn option_active(&self, options: &StructuralOptions) -> bool {
        self.option.is_some_and(|option| options.is_set(option))
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("rule", &self.rule)
            .field("option", &self.option)
            .finish_non_exhaustive()
    }
}

/// The rule table, in checking order. Indexed by `Rule as usize`.
pub static RULES: [RuleDefinition; 10] = [
    RuleDefinition {
        rule: Rule::LeadingDot,
        option: None,
        detect: leading_dot,
        repair: strip_leading_dot,
    },
    RuleDefinition {
        rule: Rule::TrailingLock,
        option: None,
        detect: trailing_lock,
        repair: strip_trailing_lock,
    },
    RuleDefinition {
        rule: Rule::AtLeastOneForwardSlash,
        option: Some(StructuralOption::AllowOneLevel),
        detect: missing_forward_slash,
        repair: no_repair,
    },
    RuleDefinition {
        rule: Rule::DoubleDots,
        option: None,
        detect: double_dots,
        repair: remove_double_dots,
    },
    RuleDefinition {
        rule: Rule::ExcludedCharacters,
        option: Some(StructuralOption::RefSpecPattern),
        detect: excluded_characters,
        repair: strip_excluded_characters,
    },
    RuleDefinition {
        rule: Rule::LeadingForwardSlash,
        option: None,
        detect: leading_forward_slash,
        repair: strip_leading_forward_slash,
    },
    RuleDefinition {
        rule: Rule::TrailingForwardSlash,
        option: None,
        detect: trailing_forward_slash,
        repair: strip_trailing_forward_slash,
    },
    RuleDefinition {
        rule: Rule::ConsecutiveForwardSlashes,
        option: Some(StructuralOption::Normalize),
        detect: consecutive_forward_slashes,
        repair: collapse_forward_slashes,
    },
    RuleDefinition {
        rule: Rule::TrailingDot,
        option: None,
        detect: trailing_dot,
        repair: strip_trailing_dot,
    },
    RuleDefinition {
        rule: Rule::AtOpenBrace,
        option: None,
        detect: at_open_brace,
        repair: remove_at_open_brace,
    },
];

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[allow(clippy::expect_used)] // Static regex pattern is hardcoded and valid
fn excluded_characters_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\x00-\x1F\x7F ~^:?*\[]+").expect("valid regex"))
}

/// Same as [`excluded_characters_regex`] but lets `*` through.
#[allow(clippy::expect_used)] // Static regex pattern is hardcoded and valid
fn excluded_characters_pattern_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\x00-\x1F\x7F ~^:?\[]+").expect("valid regex"))
}

#[allow(clippy::expect_used)] // Static regex pattern is hardcoded and valid
fn forward_slash_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"//+").expect("valid regex"))
}

/// A ref-spec pattern may hold one `*`, but not as its first or last
/// character.
fn has_single_interior_wildcard(name: &str) -> bool {
    name.matches('*').count() == 1 && !name.starts_with('*') && !name.ends_with('*')
}

fn excluded_set(name: &str, options: &StructuralOptions) -> &'static Regex {
    if options.refspec_pattern && has_single_interior_wildcard(name) {
        excluded_characters_pattern_regex()
    } else {
        excluded_characters_regex()
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

fn leading_dot(name: &str, _: &StructuralOptions) -> bool {
    name.starts_with('.')
}

fn trailing_lock(name: &str, _: &StructuralOptions) -> bool {
    name.ends_with(".lock")
}

fn missing_forward_slash(name: &str, options: &StructuralOptions) -> bool {
    !options.allow_one_level && !name.contains('/')
}

fn double_dots(name: &str, _: &StructuralOptions) -> bool {
    name.contains("..")
}

fn excluded_characters(name: &str, options: &StructuralOptions) -> bool {
    excluded_set(name, options).is_match(name)
}

fn leading_forward_slash(name: &str, _: &StructuralOptions) -> bool {
    name.starts_with('/')
}

fn trailing_forward_slash(name: &str, _: &StructuralOptions) -> bool {
    name.ends_with('/')
}

fn consecutive_forward_slashes(name: &str, _: &StructuralOptions) -> bool {
    name.contains("//")
}

fn trailing_dot(name: &str, _: &StructuralOptions) -> bool {
    name.ends_with('.')
}

fn at_open_brace(name: &str, _: &StructuralOptions) -> bool {
    name.contains("@{")
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

fn strip_leading_dot(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.strip_prefix('.').unwrap_or(name).to_owned())
}

fn strip_trailing_lock(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.strip_suffix(".lock").unwrap_or(name).to_owned())
}

fn no_repair(_: &str, _: &StructuralOptions) -> Option<String> {
    None
}

fn remove_double_dots(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.replace("..", ""))
}

fn strip_excluded_characters(name: &str, options: &StructuralOptions) -> Option<String> {
    Some(excluded_set(name, options).replace_all(name, "").into_owned())
}

fn strip_leading_forward_slash(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.strip_prefix('/').unwrap_or(name).to_owned())
}

fn strip_trailing_forward_slash(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.strip_suffix('/').unwrap_or(name).to_owned())
}

fn collapse_forward_slashes(name: &str, options: &StructuralOptions) -> Option<String> {
    if !options.normalize {
        return None;
    }
    Some(forward_slash_run_regex().replace_all(name, "/").into_owned())
}

fn strip_trailing_dot(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.strip_suffix('.').unwrap_or(name).to_owned())
}

fn remove_at_open_brace(name: &str, _: &StructuralOptions) -> Option<String> {
    Some(name.replace("@{", ""))
}
