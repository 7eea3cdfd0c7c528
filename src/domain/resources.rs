//! Resource vocabulary and log scraping
//!
//! Resources are referenced in free-form log text as `<type>:<identifier>`. The
//! identifier runs up to the next whitespace, so trailing noise such as
//! `(deleted)` stays part of it.

use std::{collections::HashSet, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The identifier class is the complement of ECMAScript `\s`: Unicode
/// `White_Space` minus U+0085, plus U+FEFF.
pub const RESOURCE_PATTERN: &str = r"(vm|bucket):([^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+)";

static RESOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RESOURCE_PATTERN).expect("resource pattern compiles"));

static VALID_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").expect("id pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Vm,
    Bucket,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Vm, ResourceKind::Bucket];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vm => "vm",
            Self::Bucket => "bucket",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResourceKind(pub String);

impl fmt::Display for UnknownResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource type `{}`", self.0)
    }
}

impl std::error::Error for UnknownResourceKind {}

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "vm" => Ok(Self::Vm),
            "bucket" => Ok(Self::Bucket),
            other => Err(UnknownResourceKind(other.to_string())),
        }
    }
}

/// A `(type, id)` pair scraped from log text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn healthy_outcome(&self) -> String {
        format!("{self} is healthy")
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Ok,
    NotFound,
}

impl ResourceStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ok" => Some(Self::Ok),
            "notfound" => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// Distinct references in `text`, in order of first appearance.
pub fn extract_references(text: &str) -> Vec<ResourceRef> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for captures in RESOURCE_REGEX.captures_iter(text) {
        let (_, [kind, id]) = captures.extract();
        let Ok(kind) = kind.parse::<ResourceKind>() else {
            continue;
        };

        let reference = ResourceRef::new(kind, id);
        if seen.insert(reference.to_string()) {
            references.push(reference);
        }
    }

    references
}

pub fn is_valid_id(id: &str) -> bool {
    VALID_ID_REGEX.is_match(id)
}
