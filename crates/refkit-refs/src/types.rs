//! Reference values: a name bound either to an object hash or to another
//! reference name.

use std::fmt;

use refkit_types::ObjectHash;
use serde::{Deserialize, Serialize};

use crate::error::{RefError, Result};
use crate::names::ReferenceName;

/// Prefix marking the target of a symbolic reference in its textual form.
pub const SYMREF_PREFIX: &str = "ref: ";

/// The kind of a [`Reference`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    Invalid,
    Hash,
    Symbolic,
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceType::Invalid => "invalid-reference",
            ReferenceType::Hash => "hash-reference",
            ReferenceType::Symbolic => "symbolic-reference",
        })
    }
}

/// A named reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reference {
    /// Points directly at an object.
    Hash {
        name: ReferenceName,
        hash: ObjectHash,
    },
    /// Points at another reference, as `HEAD` points at the current branch.
    Symbolic {
        name: ReferenceName,
        target: ReferenceName,
    },
}

impl Reference {
    pub fn new_hash(name: impl Into<ReferenceName>, hash: ObjectHash) -> Self {
        Reference::Hash {
            name: name.into(),
            hash,
        }
    }

    pub fn new_symbolic(name: impl Into<ReferenceName>, target: impl Into<ReferenceName>) -> Self {
        Reference::Symbolic {
            name: name.into(),
            target: target.into(),
        }
    }

    /// Build a reference from its textual form.
    ///
    /// A target of the form `ref: <name>` makes a symbolic reference;
    /// anything else must be a full hex object hash.
    ///
    /// ```
    /// use refkit_refs::{Reference, ReferenceType};
    ///
    /// let head = Reference::from_strings("HEAD", "ref: refs/heads/main").unwrap();
    /// assert_eq!(head.reference_type(), ReferenceType::Symbolic);
    /// assert_eq!(head.target().unwrap().as_str(), "refs/heads/main");
    /// ```
    pub fn from_strings(name: &str, target: &str) -> Result<Self> {
        if let Some(symbolic) = target.strip_prefix(SYMREF_PREFIX) {
            let symbolic = symbolic.trim();
            if symbolic.is_empty() {
                return Err(RefError::InvalidReference {
                    name: name.to_owned(),
                    reason: "symbolic target is empty".into(),
                });
            }
            return Ok(Self::new_symbolic(name, symbolic));
        }
        let hash = ObjectHash::from_hex(target.trim())?;
        Ok(Self::new_hash(name, hash))
    }

    pub fn name(&self) -> &ReferenceName {
        match self {
            Reference::Hash { name, .. } | Reference::Symbolic { name, .. } => name,
        }
    }

    pub fn reference_type(&self) -> ReferenceType {
        match self {
            Reference::Hash { .. } => ReferenceType::Hash,
            Reference::Symbolic { .. } => ReferenceType::Symbolic,
        }
    }

    /// The object hash, for hash references.
    pub fn hash(&self) -> Option<&ObjectHash> {
        match self {
            Reference::Hash { hash, .. } => Some(hash),
            Reference::Symbolic { .. } => None,
        }
    }

    /// The referenced name, for symbolic references.
    pub fn target(&self) -> Option<&ReferenceName> {
        match self {
            Reference::Symbolic { target, .. } => Some(target),
            Reference::Hash { .. } => None,
        }
    }

    /// The `[name, target]` pair accepted by [`Reference::from_strings`].
    pub fn strings(&self) -> [String; 2] {
        let target = match self {
            Reference::Hash { hash, .. } => hash.to_hex(),
            Reference::Symbolic { target, .. } => format!("{SYMREF_PREFIX}{target}"),
        };
        [self.name().to_string(), target]
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [name, target] = self.strings();
        write!(f, "{target} {name}")
    }
}
