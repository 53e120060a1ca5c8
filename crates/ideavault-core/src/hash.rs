use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Minimum number of hex chars accepted when resolving an id by prefix.
pub const MIN_PREFIX_LEN: usize = 4;

/// Identifier of an idea: the SHA-256 of its canonical submission bytes,
/// stored as 64 lowercase hex chars.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct IdeaId(String);

impl IdeaId {
    /// Derive an id by hashing raw bytes.
    pub fn hash(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Self(hex::encode(digest))
    }

    /// Parse a full 64-char hex string.
    pub fn parse(hex_str: &str) -> Result<Self, CoreError> {
        let hex_str = hex_str.trim();
        if hex_str.len() != 64 || !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidIdeaId(hex_str.to_string()));
        }
        Ok(Self(hex_str.to_lowercase()))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// First 8 chars, used for display.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }

    /// Case-insensitive prefix match.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(&prefix.to_lowercase())
    }
}

impl TryFrom<String> for IdeaId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdeaId> for String {
    fn from(id: IdeaId) -> Self {
        id.0
    }
}

impl fmt::Debug for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdeaId({})", self.short())
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
