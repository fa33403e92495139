use std::fmt;

use serde::{Deserialize, Serialize};

/// A UniProt accession as read from the identifier list.
///
/// The archive is the authority on which accessions exist, so the token is
/// kept opaque: no length or alphabet check, and an empty line in the input
/// becomes an empty identifier that simply fails to resolve downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniprotId(String);

impl UniprotId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniprotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UniprotId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// AlphaFold prediction-model release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    V4,
    V3,
    V2,
    V1,
}

impl ModelVersion {
    /// The release probed first for every identifier.
    pub const LATEST: ModelVersion = ModelVersion::V4;

    /// Older releases probed when the latest one is unavailable, in probe
    /// order. Each successful probe overwrites the selection, so the last
    /// available tag in this list wins (v1 over v2 over v3).
    pub const FALLBACKS: [ModelVersion; 3] =
        [ModelVersion::V3, ModelVersion::V2, ModelVersion::V1];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVersion::V4 => "v4",
            ModelVersion::V3 => "v3",
            ModelVersion::V2 => "v2",
            ModelVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
