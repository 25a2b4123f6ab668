//! Tab to screen dispatch.

use crate::tab::Tab;

/// Screen collaborator mounted in the authenticated layout, with the props
/// the shell feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Home; wired to the open-record and open-chat shortcuts
    Home,
    /// Record; the only screen that reads the display mode
    Record { dark_mode: bool },
    Chat,
    Community,
}

impl Screen {
    /// Map a tab to its screen. Total over the closed tab set.
    pub fn for_tab(tab: Tab, dark_mode: bool) -> Screen {
        match tab {
            Tab::Home => Screen::Home,
            Tab::Record => Screen::Record { dark_mode },
            Tab::Chat => Screen::Chat,
            Tab::Community => Screen::Community,
        }
    }

    /// Dispatch untyped tab input. Unknown values resolve to [`Screen::Home`].
    pub fn for_raw_tab(raw: &str, dark_mode: bool) -> Screen {
        Screen::for_tab(Tab::parse_lenient(raw), dark_mode)
    }
}
