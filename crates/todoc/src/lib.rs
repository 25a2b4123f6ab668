//! todoc - baby-tracking app shell.
//!
//! A Dioxus front end whose root component gates the app behind login,
//! switches between the Home, Record, Chat and Community screens, tracks the
//! selected profile and toggles dark mode.
//!
//! # Architecture
//!
//! - **Core** (`todoc-core`): shell state, transitions, screen dispatch and
//!   the presentation seam. No UI dependency.
//! - **Components**: the `App` shell plus leaf collaborators (header, dial
//!   navigation, screens, toast surface). Collaborators get props and
//!   callbacks; only the shell writes shell state.
//! - **Platform**: document-root class toggling and timers for web (WASM)
//!   and desktop.

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod utils;
