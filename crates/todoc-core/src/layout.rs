//! Layout decision.
//!
//! The shell renders one of two layouts. While logged out only the login
//! collaborator (and the toast surface) is shown, and none of the tab,
//! profile or display state is handed to anything. Once logged in, the
//! header, the dispatched screen and the dial navigation each get a
//! read-only snapshot of the state they consume.

use crate::profile::ProfileId;
use crate::screen::Screen;
use crate::shell::ShellState;
use crate::tab::Tab;

/// State the header reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub selected_profile_id: ProfileId,
    pub dark_mode: bool,
}

/// State the dial navigation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub active_tab: Tab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Login,
    Authenticated {
        header: HeaderSnapshot,
        screen: Screen,
        navigation: NavigationSnapshot,
    },
}

impl Layout {
    pub fn is_login(&self) -> bool {
        matches!(self, Layout::Login)
    }

    /// Mounted screen, if authenticated.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Layout::Login => None,
            Layout::Authenticated { screen, .. } => Some(*screen),
        }
    }
}

impl ShellState {
    pub fn layout(&self) -> Layout {
        if !self.is_logged_in() {
            return Layout::Login;
        }

        Layout::Authenticated {
            header: HeaderSnapshot {
                selected_profile_id: self.selected_profile().clone(),
                dark_mode: self.is_dark_mode(),
            },
            screen: self.dispatch_screen(),
            navigation: NavigationSnapshot {
                active_tab: self.active_tab(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_layout_carries_no_state() {
        let mut shell = ShellState::new();
        shell.set_active_tab(Tab::Community);
        assert_eq!(shell.layout(), Layout::Login);
        assert_eq!(shell.layout().screen(), None);
    }

    #[test]
    fn test_authenticated_layout_snapshots() {
        let mut shell = ShellState::new();
        shell.login();
        shell.set_selected_profile("3");
        shell.open_chat();

        match shell.layout() {
            Layout::Authenticated {
                header,
                screen,
                navigation,
            } => {
                assert_eq!(header.selected_profile_id.as_str(), "3");
                assert!(!header.dark_mode);
                assert_eq!(screen, Screen::Chat);
                assert_eq!(navigation.active_tab, Tab::Chat);
            }
            Layout::Login => panic!("expected authenticated layout"),
        }
    }
}
