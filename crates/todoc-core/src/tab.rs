//! Navigation tabs.
//!
//! `Tab` is a closed enum, so inside the core an unrecognised tab cannot
//! exist. Untyped input (strings from callers or stored values) goes through
//! [`Tab::parse_lenient`], which resolves anything unknown to [`Tab::Home`].
//! Matching is exact: `"Chat"` or `"chat "` are not tabs.

use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tab selecting which screen is mounted in the authenticated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Record,
    Chat,
    Community,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Record, Tab::Chat, Tab::Community];

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Record => "record",
            Tab::Chat => "chat",
            Tab::Community => "community",
        }
    }

    /// Human-readable label for navigation.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Record => "Record",
            Tab::Chat => "Chat",
            Tab::Community => "Community",
        }
    }

    /// Parse untyped input, falling back to [`Tab::Home`] for anything unknown.
    pub fn parse_lenient(raw: &str) -> Tab {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for Tab {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Tab::Home),
            "record" => Ok(Tab::Record),
            "chat" => Ok(Tab::Chat),
            "community" => Ok(Tab::Community),
            _ => Err(ShellError::UnknownTab(s.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_strict_parse_known() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>(), Ok(tab));
        }
    }

    #[test]
    fn test_strict_parse_is_exact() {
        for raw in [" Chat ", "Chat", "chat ", " RECORD", "Home"] {
            assert_eq!(
                raw.parse::<Tab>(),
                Err(ShellError::UnknownTab(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_strict_parse_unknown() {
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(ShellError::UnknownTab("settings".to_string()))
        );
    }

    #[test]
    fn test_lenient_parse_falls_back_to_home() {
        assert_eq!(Tab::parse_lenient("community"), Tab::Community);
        assert_eq!(Tab::parse_lenient(""), Tab::Home);
        assert_eq!(Tab::parse_lenient("profile"), Tab::Home);
        assert_eq!(Tab::parse_lenient("Chat"), Tab::Home);
        assert_eq!(Tab::parse_lenient(" record"), Tab::Home);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Tab::Record).unwrap();
        assert_eq!(json, "\"record\"");
        let tab: Tab = serde_json::from_str("\"community\"").unwrap();
        assert_eq!(tab, Tab::Community);
    }
}
