//! Selected-profile identifier.

use crate::config::DEFAULT_PROFILE_ID;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token naming the tracked subject whose data screens display.
///
/// The shell stores it verbatim. Whether an id refers to a real profile is
/// decided by whoever offers the choices (the header's roster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_ID)
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        assert_eq!(ProfileId::default().as_str(), "1");
    }

    #[test]
    fn test_stores_verbatim() {
        let id = ProfileId::from("  not-validated  ");
        assert_eq!(id.as_str(), "  not-validated  ");
    }
}
