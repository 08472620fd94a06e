use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier correlating all cart lines belonging to one anonymous
/// visitor session. Minted once per session by the request layer and passed
/// explicitly into every cart operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(String);

impl CartId {
    /// Creates a CartId from an identifier the session layer already holds.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh globally-unique identifier for a first-contact visitor.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
