//! App shell state and transitions.
//!
//! `ShellState` owns the four cells the shell is responsible for: session,
//! active tab, selected profile and display mode. Collaborators never touch
//! the cells; they raise a [`ShellAction`] and the shell applies it.
//!
//! # Transitions
//!
//! | Action          | Effect                                              |
//! |-----------------|-----------------------------------------------------|
//! | `Login`         | logged in                                           |
//! | `Logout`        | logged out, tab reset to home                       |
//! | `SelectTab(t)`  | tab = t                                             |
//! | `OpenRecord`    | tab = record                                        |
//! | `OpenChat`      | tab = chat                                          |
//! | `SelectProfile` | profile stored verbatim                             |
//! | `SetDarkMode`   | flag stored, document-root class set or cleared     |
//! | `OpenSettings`  | diagnostic trace only                               |
//!
//! Logout leaves the profile and display mode alone.

use crate::config::ShellConfig;
use crate::error::PresentationError;
use crate::presentation::Presentation;
use crate::profile::ProfileId;
use crate::screen::Screen;
use crate::tab::Tab;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SessionState {
    logged_in: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DisplayMode {
    dark: bool,
}

/// Events collaborators raise against the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Login,
    Logout,
    SelectTab(Tab),
    OpenRecord,
    OpenChat,
    SelectProfile(ProfileId),
    SetDarkMode(bool),
    /// Settings entry point. Reserved for a settings surface; traces today.
    OpenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    session: SessionState,
    active_tab: Tab,
    selected_profile: ProfileId,
    display_mode: DisplayMode,
    dark_mode_class: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::with_config(&ShellConfig::default())
    }
}

impl ShellState {
    /// Logged out, on home, default profile, light mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self {
            session: SessionState::default(),
            active_tab: Tab::default(),
            selected_profile: config.default_profile.clone(),
            display_mode: DisplayMode::default(),
            dark_mode_class: config.dark_mode_class.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn is_logged_in(&self) -> bool {
        self.session.logged_in
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_profile(&self) -> &ProfileId {
        &self.selected_profile
    }

    pub fn is_dark_mode(&self) -> bool {
        self.display_mode.dark
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn login(&mut self) {
        self.session.logged_in = true;
        info!("Session started");
    }

    pub fn logout(&mut self) {
        self.session.logged_in = false;
        self.active_tab = Tab::Home;
        info!("Session ended");
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        debug!(from = %self.active_tab, to = %tab, "Tab change");
        self.active_tab = tab;
    }

    /// Select a tab from untyped input. Unknown names select home.
    pub fn set_active_tab_str(&mut self, raw: &str) {
        self.set_active_tab(Tab::parse_lenient(raw));
    }

    pub fn open_record(&mut self) {
        self.set_active_tab(Tab::Record);
    }

    pub fn open_chat(&mut self) {
        self.set_active_tab(Tab::Chat);
    }

    pub fn set_selected_profile(&mut self, id: impl Into<ProfileId>) {
        self.selected_profile = id.into();
        debug!(profile = %self.selected_profile, "Profile selected");
    }

    /// Store the dark-mode flag and mirror it onto the document root.
    ///
    /// The stored flag is updated even if the presentation backend fails, so
    /// the next successful call brings the root back in line.
    pub fn set_display_mode<P: Presentation + ?Sized>(
        &mut self,
        enabled: bool,
        presentation: &mut P,
    ) -> Result<(), PresentationError> {
        self.display_mode.dark = enabled;
        debug!(dark = enabled, "Display mode");
        presentation.set_root_class(&self.dark_mode_class, enabled)
    }

    /// Settings click. No settings surface exists yet, so this only traces.
    pub fn request_settings(&self) {
        info!("Settings clicked");
    }

    /// Apply a collaborator action.
    pub fn apply<P: Presentation + ?Sized>(
        &mut self,
        action: ShellAction,
        presentation: &mut P,
    ) -> Result<(), PresentationError> {
        debug!(?action, "Shell action");
        match action {
            ShellAction::Login => self.login(),
            ShellAction::Logout => self.logout(),
            ShellAction::SelectTab(tab) => self.set_active_tab(tab),
            ShellAction::OpenRecord => self.open_record(),
            ShellAction::OpenChat => self.open_chat(),
            ShellAction::SelectProfile(id) => self.set_selected_profile(id),
            ShellAction::SetDarkMode(enabled) => {
                return self.set_display_mode(enabled, presentation);
            }
            ShellAction::OpenSettings => self.request_settings(),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Screen for the active tab.
    pub fn dispatch_screen(&self) -> Screen {
        Screen::for_tab(self.active_tab, self.display_mode.dark)
    }

    /// Screen for untyped tab input under the current display mode.
    pub fn dispatch_screen_str(&self, raw: &str) -> Screen {
        Screen::for_raw_tab(raw, self.display_mode.dark)
    }
}
