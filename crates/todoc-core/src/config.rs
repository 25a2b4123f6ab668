//! Production configuration.
//!
//! Constants used across the shell, plus [`ShellConfig`], the runtime
//! configuration the UI crate provides through context.
//!
//! # Usage
//!
//! ```
//! use todoc_core::config::{ShellConfig, DARK_MODE_CLASS};
//!
//! let config = ShellConfig::default();
//! assert_eq!(config.dark_mode_class, DARK_MODE_CLASS);
//! ```

use crate::error::ShellError;
use crate::presentation::is_valid_class_name;
use crate::profile::ProfileId;
use crate::toast::ToastPosition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Shell defaults
// =============================================================================

/// Profile selected at startup.
pub const DEFAULT_PROFILE_ID: &str = "1";

/// Class placed on the document root while dark mode is on.
///
/// Stylesheets key their dark palette off `.dark` on `<html>`.
pub const DARK_MODE_CLASS: &str = "dark";

// =============================================================================
// Toast surface
// =============================================================================

/// Maximum toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// How long a toast stays up before auto-dismissal.
pub const TOAST_LIFETIME_MS: u64 = 4_000;

/// Interval at which the UI advances the toast clock.
pub const TOAST_TICK_MS: u64 = 250;

/// A profile the header offers for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOption {
    pub id: ProfileId,
    pub name: String,
}

impl ProfileOption {
    pub fn new(id: impl Into<ProfileId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Runtime configuration for the app shell.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Profile selected at startup
    pub default_profile: ProfileId,
    /// Choices offered by the header's profile selector
    pub profiles: Vec<ProfileOption>,
    /// Document-root class toggled by dark mode
    pub dark_mode_class: String,
    /// Anchor of the toast surface
    pub toast_position: ToastPosition,
    pub max_visible_toasts: usize,
    pub toast_lifetime_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_profile: ProfileId::default(),
            profiles: vec![ProfileOption::new(DEFAULT_PROFILE_ID, "Baby")],
            dark_mode_class: DARK_MODE_CLASS.to_string(),
            toast_position: ToastPosition::default(),
            max_visible_toasts: MAX_VISIBLE_TOASTS,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShellError> {
        if !is_valid_class_name(&self.dark_mode_class) {
            return Err(ShellError::InvalidConfig(format!(
                "dark_mode_class must match [A-Za-z0-9_-]+, got {:?}",
                self.dark_mode_class
            )));
        }

        if self.max_visible_toasts == 0 {
            return Err(ShellError::InvalidConfig(
                "max_visible_toasts must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(ShellError::InvalidConfig(format!(
                    "duplicate profile id {}",
                    profile.id
                )));
            }
        }

        Ok(())
    }

    /// Display name for a profile id, if the roster knows it.
    pub fn profile_name(&self, id: &ProfileId) -> Option<&str> {
        self.profiles
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.name.as_str())
    }
}
