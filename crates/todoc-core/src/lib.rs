//! # todoc Core
//!
//! Platform-independent state and decisions behind the todoc app shell.
//!
//! The UI crate renders whatever this crate decides. Nothing here depends on
//! Dioxus, so every transition and layout decision is testable without a
//! rendering environment.
//!
//! ## Modules
//!
//! - [`tab`] - The closed set of navigation tabs and lenient parsing
//! - [`profile`] - Opaque selected-profile identifier
//! - [`presentation`] - Injected document-root presentation seam (dark mode)
//! - [`screen`] - Tab to screen dispatch
//! - [`shell`] - Shell state, actions and transitions
//! - [`layout`] - Derived layout with collaborator prop snapshots
//! - [`toast`] - Bounded toast notification queue
//! - [`config`] - Production constants and `ShellConfig`
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod layout;
pub mod presentation;
pub mod profile;
pub mod screen;
pub mod shell;
pub mod tab;
pub mod toast;

pub use config::{ProfileOption, ShellConfig};
pub use error::{PresentationError, ShellError};
pub use layout::{HeaderSnapshot, Layout, NavigationSnapshot};
pub use presentation::{Presentation, RootClassList};
pub use profile::ProfileId;
pub use screen::Screen;
pub use shell::{ShellAction, ShellState};
pub use tab::Tab;
pub use toast::{ToastId, ToastLevel, ToastPosition, ToastQueue};
