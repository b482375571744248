//! Reference names and the git-style namespace they live in.
//!
//! A [`ReferenceName`] is just text: holding one says nothing about whether
//! it is well formed. Run it through a
//! [`RefNameChecker`](crate::checker::RefNameChecker), or call
//! [`ReferenceName::check`], to validate or sanitize it.
//!
//! Canonical names follow the usual layout:
//!
//! - `refs/heads/*` for branches
//! - `refs/tags/*` for tags
//! - `refs/remotes/{remote}/*` for remote tracking refs
//! - `refs/notes/*` for notes

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::RefNameChecker;
use crate::config::CheckerConfig;
use crate::error::RefNameError;

pub const REFS_PREFIX: &str = "refs/";
pub const BRANCH_PREFIX: &str = "refs/heads/";
pub const TAG_PREFIX: &str = "refs/tags/";
pub const REMOTE_PREFIX: &str = "refs/remotes/";
pub const NOTE_PREFIX: &str = "refs/notes/";

/// `(prefix, suffix)` pairs used to shorten names, most specific first.
///
/// These are git's rev-parse rules minus the bare `%s` rule.
const SHORTEN_RULES: [(&str, &str); 5] = [
    (REMOTE_PREFIX, "/HEAD"),
    (REMOTE_PREFIX, ""),
    (BRANCH_PREFIX, ""),
    (TAG_PREFIX, ""),
    (REFS_PREFIX, ""),
];

/// A slash-delimited reference name such as `refs/heads/main`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceName(String);

impl ReferenceName {
    /// The symbolic `HEAD` reference.
    pub const HEAD: &'static str = "HEAD";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Join path segments with `/`.
    ///
    /// ```
    /// use refkit_refs::ReferenceName;
    ///
    /// let name = ReferenceName::from_segments(["refs", "remotes", "origin", "master"]);
    /// assert_eq!(name.as_str(), "refs/remotes/origin/master");
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name = String::new();
        for (index, segment) in segments.into_iter().enumerate() {
            if index > 0 {
                name.push('/');
            }
            name.push_str(segment.as_ref());
        }
        Self(name)
    }

    pub fn head() -> Self {
        Self::new(Self::HEAD)
    }

    /// `refs/heads/{name}`
    pub fn branch(name: &str) -> Self {
        Self(format!("{BRANCH_PREFIX}{name}"))
    }

    /// `refs/tags/{name}`
    pub fn tag(name: &str) -> Self {
        Self(format!("{TAG_PREFIX}{name}"))
    }

    /// `refs/notes/{name}`
    pub fn note(name: &str) -> Self {
        Self(format!("{NOTE_PREFIX}{name}"))
    }

    /// `refs/remotes/{remote}/{name}`
    pub fn remote(remote: &str, name: &str) -> Self {
        Self(format!("{REMOTE_PREFIX}{remote}/{name}"))
    }

    /// `refs/remotes/{remote}/HEAD`
    pub fn remote_head(remote: &str) -> Self {
        Self::remote(remote, Self::HEAD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_branch(&self) -> bool {
        self.0.starts_with(BRANCH_PREFIX)
    }

    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAG_PREFIX)
    }

    pub fn is_remote(&self) -> bool {
        self.0.starts_with(REMOTE_PREFIX)
    }

    pub fn is_note(&self) -> bool {
        self.0.starts_with(NOTE_PREFIX)
    }

    /// The shortest form that still identifies the ref, as git displays it.
    ///
    /// `refs/heads/main` becomes `main`, `refs/remotes/origin/HEAD` becomes
    /// `origin`, and `refs/notes/foo` becomes `notes/foo`. Names outside
    /// `refs/` are returned unchanged.
    pub fn short(&self) -> &str {
        SHORTEN_RULES
            .iter()
            .find_map(|&(prefix, suffix)| {
                self.0
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_suffix(suffix))
                    .filter(|rest| !rest.is_empty())
            })
            .unwrap_or(self.0.as_str())
    }

    /// Run this name through a checker built from `config`.
    ///
    /// Returns the name with all sanitize rewrites applied, or the first
    /// validation error.
    pub fn check(self, config: &CheckerConfig) -> Result<Self, RefNameError> {
        let mut checker = RefNameChecker::new(self, config.options, config.actions);
        checker.check_ref_name()?;
        Ok(checker.into_name())
    }
}

impl fmt::Debug for ReferenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceName({:?})", self.0)
    }
}

impl fmt::Display for ReferenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReferenceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for ReferenceName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<ReferenceName> for String {
    fn from(name: ReferenceName) -> Self {
        name.0
    }
}

impl AsRef<str> for ReferenceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ReferenceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        assert_eq!(ReferenceName::branch("foo").as_str(), "refs/heads/foo");
        assert_eq!(ReferenceName::tag("foo").as_str(), "refs/tags/foo");
        assert_eq!(ReferenceName::note("foo").as_str(), "refs/notes/foo");
        assert_eq!(
            ReferenceName::remote("bar", "foo").as_str(),
            "refs/remotes/bar/foo"
        );
        assert_eq!(
            ReferenceName::remote_head("foo").as_str(),
            "refs/remotes/foo/HEAD"
        );
        assert_eq!(ReferenceName::head().as_str(), "HEAD");
    }

    #[test]
    fn segments_match_joined_name() {
        let cases: [(&[&str], &str); 3] = [
            (&["origin", "master"], "origin/master"),
            (&["remotes", "origin", "master"], "remotes/origin/master"),
            (&["refs", "remotes", "origin", "master"], "refs/remotes/origin/master"),
        ];
        for (segments, joined) in cases {
            assert_eq!(
                ReferenceName::from_segments(segments.iter()),
                ReferenceName::new(joined)
            );
        }
        assert_eq!(ReferenceName::from_segments(Vec::<String>::new()).as_str(), "");
    }

    #[test]
    fn kind_predicates() {
        assert!(ReferenceName::new("refs/heads/v4").is_branch());
        assert!(ReferenceName::new("refs/notes/foo").is_note());
        assert!(ReferenceName::new("refs/remotes/origin/master").is_remote());
        assert!(ReferenceName::new("refs/tags/v3.1.").is_tag());
        assert!(!ReferenceName::new("refs/tags/v3").is_branch());
        assert!(!ReferenceName::head().is_branch());
    }

    #[test]
    fn short_names() {
        assert_eq!(ReferenceName::new("refs/heads/v4").short(), "v4");
        assert_eq!(ReferenceName::new("refs/tags/v1.0").short(), "v1.0");
        assert_eq!(
            ReferenceName::new("refs/remotes/origin/feature/AllowSlashes").short(),
            "origin/feature/AllowSlashes"
        );
        assert_eq!(ReferenceName::new("refs/notes/foo").short(), "notes/foo");
        assert_eq!(ReferenceName::remote_head("origin").short(), "origin");
        assert_eq!(ReferenceName::head().short(), "HEAD");
        assert_eq!(ReferenceName::new("refs/heads/").short(), "heads/");
    }

    #[test]
    fn serde_is_transparent() {
        let name = ReferenceName::branch("main");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"refs/heads/main\"");
        let parsed: ReferenceName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
