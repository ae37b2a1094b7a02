/// Session ID domain type. Wraps ULID for non-sequential, unguessable-order identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(ulid::Ulid);

impl SessionId {
    /// Generate a new random ULID.
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    /// Get as string for storage and the session cookie.
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    /// Parse from string.
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(ulid::Ulid::from_string(s)?))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}
