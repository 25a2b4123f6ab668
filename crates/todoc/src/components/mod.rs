//! UI components for the todoc application.
//!
//! - `app_shell`: Header, DialNavigation, Toaster
//! - `screens`: LoginScreen, HomeScreen, RecordScreen, ChatScreen, CommunityScreen
//!
//! # Context Providers
//!
//! [`App`] provides shared state through Dioxus context:
//!
//! ```ignore
//! // Runtime configuration (profile roster, toast settings)
//! let config = use_shell_config();
//!
//! // Toast queue; App expires entries on its own ticker
//! let toasts = use_toasts();
//! show_toast(toasts, ToastLevel::Info, "Saved");
//! ```
//!
//! Shell state itself is not in context. Collaborators only see the props and
//! callbacks `App` hands them.

mod app_shell;
mod screens;

pub use app_shell::{DialNavigation, Header, Toaster};
pub use screens::{ChatScreen, CommunityScreen, HomeScreen, LoginScreen, RecordScreen};

use crate::platform::{sleep_ms, DocumentRoot};
use crate::utils::SignalExt;
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use todoc_core::config::TOAST_TICK_MS;
use todoc_core::{Layout, Screen, ShellAction, ShellConfig, ShellState, ToastLevel, ToastQueue};

/// Bundled runtime configuration.
const SHELL_CONFIG_JSON: &str = include_str!("../../assets/todoc.json");

// ============================================================================
// Context providers
// ============================================================================

pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>()
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Push a toast. It expires on the App-level toast clock, so it survives the
/// caller unmounting.
pub fn show_toast(mut toasts: Signal<ToastQueue>, level: ToastLevel, message: impl Into<String>) {
    toasts.mutate(|queue| queue.push(level, message));
}

/// Parse the bundled config, falling back to defaults if it is invalid.
fn load_shell_config() -> ShellConfig {
    match ShellConfig::from_json(SHELL_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            warn!("Bundled shell config rejected, using defaults: {}", e);
            ShellConfig::default()
        }
    }
}

// ============================================================================
// App shell
// ============================================================================

/// Apply a collaborator action to the shell against the live document.
fn apply_action(mut shell: Signal<ShellState>, action: ShellAction) {
    let result = shell.mutate(|state| state.apply(action, &mut DocumentRoot));
    if let Err(e) = result {
        error!("Shell action left presentation out of sync: {}", e);
    }
}

/// Mount the screen collaborator the shell dispatched.
fn render_screen(screen: Screen, shell: Signal<ShellState>) -> Element {
    match screen {
        Screen::Home => rsx! {
            HomeScreen {
                on_add_record_requested: move |_| apply_action(shell, ShellAction::OpenRecord),
                on_open_chat_requested: move |_| apply_action(shell, ShellAction::OpenChat),
            }
        },
        Screen::Record { dark_mode } => rsx! {
            RecordScreen { dark_mode }
        },
        Screen::Chat => rsx! {
            ChatScreen {}
        },
        Screen::Community => rsx! {
            CommunityScreen {}
        },
    }
}

/// Root component: owns the shell state and composes the collaborators.
#[component]
pub fn App() -> Element {
    let config = use_hook(load_shell_config);
    use_context_provider(|| config.clone());

    let mut toasts = use_signal(|| {
        ToastQueue::with_settings(config.max_visible_toasts, config.toast_lifetime_ms)
    });
    use_context_provider(|| toasts);

    // Owned by the root scope so expiry keeps running across layout switches
    use_future(move || async move {
        loop {
            sleep_ms(TOAST_TICK_MS).await;
            if !toasts.peek().is_empty() {
                toasts.mutate(|queue| queue.advance(TOAST_TICK_MS));
            }
        }
    });

    let shell = use_signal(|| ShellState::with_config(&config));

    let toast_position = config.toast_position;
    let layout = shell.read().layout();

    match layout {
        Layout::Login => rsx! {
            LoginScreen {
                on_login_success: move |_| apply_action(shell, ShellAction::Login),
            }
            Toaster { position: toast_position }
        },
        Layout::Authenticated {
            header,
            screen,
            navigation,
        } => rsx! {
            div { class: "td-app",
                Header {
                    selected_profile_id: header.selected_profile_id.to_string(),
                    on_profile_change: move |id: String| {
                        apply_action(shell, ShellAction::SelectProfile(id.into()))
                    },
                    on_settings_click: move |_| apply_action(shell, ShellAction::OpenSettings),
                    on_logout_click: move |_| {
                        apply_action(shell, ShellAction::Logout);
                        show_toast(toasts, ToastLevel::Info, "Logged out");
                    },
                    dark_mode: header.dark_mode,
                    on_dark_mode_change: move |enabled: bool| {
                        apply_action(shell, ShellAction::SetDarkMode(enabled))
                    },
                }

                // Bottom padding keeps content clear of the dial
                main { class: "td-main", {render_screen(screen, shell)} }

                DialNavigation {
                    active_tab: navigation.active_tab,
                    on_tab_change: move |tab| apply_action(shell, ShellAction::SelectTab(tab)),
                }
            }
            Toaster { position: toast_position }
        },
    }
}
