//! Editor configuration.

use std::{collections::HashSet, fmt, str::FromStr};

/// How a record editor names the records it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Keep the identity the record was built with, generating one only when
    /// the source has none.
    #[default]
    Preserve,
    /// Generate a fresh identity on every reduction.
    Regenerate,
}

impl IdentityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityPolicy::Preserve => "preserve",
            IdentityPolicy::Regenerate => "regenerate",
        }
    }
}

impl FromStr for IdentityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preserve" => Ok(IdentityPolicy::Preserve),
            "regenerate" => Ok(IdentityPolicy::Regenerate),
            other => Err(format!(
                "unknown identity policy '{other}' (expected 'preserve' or 'regenerate')"
            )),
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_RECORD_PREFIX: &str = "record";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub identity: IdentityPolicy,
    /// Prefix of generated record identities (`{prefix}_{n}`).
    pub record_prefix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            identity: IdentityPolicy::default(),
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn with_identity_policy(mut self, identity: IdentityPolicy) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_record_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.record_prefix = prefix.into();
        self
    }
}

/// Per-tree generator of record identities.
///
/// Every identity a record holds is reserved, so a generated name never
/// repeats one already in the tree.
#[derive(Debug, Clone)]
pub(crate) struct Identities {
    prefix: String,
    next: u64,
    taken: HashSet<String>,
}

impl Identities {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
            taken: HashSet::new(),
        }
    }

    pub(crate) fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub(crate) fn reserve(&mut self, name: &str) {
        if !self.taken.contains(name) {
            self.taken.insert(name.to_string());
        }
    }

    /// Next `{prefix}_{n}` that is neither reserved nor rejected by `clashes`
    /// (the record's own field names).
    pub(crate) fn generate(&mut self, clashes: impl Fn(&str) -> bool) -> String {
        loop {
            let id = format!("{}_{}", self.prefix, self.next);
            self.next += 1;
            if !self.taken.contains(&id) && !clashes(&id) {
                return id;
            }
        }
    }
}
