use dioxus::prelude::*;

use crate::components::use_shell_config;

/// Top bar with profile selector, dark-mode switch, settings and logout.
#[component]
pub fn Header(
    selected_profile_id: String,
    on_profile_change: EventHandler<String>,
    on_settings_click: EventHandler<()>,
    on_logout_click: EventHandler<()>,
    dark_mode: bool,
    on_dark_mode_change: EventHandler<bool>,
) -> Element {
    let config = use_shell_config();

    // An id the roster doesn't know is still shown, so the select never lies
    // about what the shell holds.
    let known = config
        .profiles
        .iter()
        .any(|p| p.id.as_str() == selected_profile_id);

    rsx! {
        header { class: "td-header",
            div { class: "td-header-left",
                div { class: "td-logo",
                    span { class: "td-logo-word", "to" }
                    span { class: "td-logo-word td-logo-word--accent", "doc" }
                }
                select {
                    class: "td-profile-select",
                    "aria-label": "Selected profile",
                    value: "{selected_profile_id}",
                    onchange: move |evt| on_profile_change.call(evt.value()),
                    for profile in config.profiles.iter() {
                        option {
                            key: "{profile.id}",
                            value: "{profile.id}",
                            selected: profile.id.as_str() == selected_profile_id,
                            "{profile.name}"
                        }
                    }
                    if !known {
                        option {
                            value: "{selected_profile_id}",
                            selected: true,
                            "Profile {selected_profile_id}"
                        }
                    }
                }
            }
            div { class: "td-header-right",
                label { class: "td-switch",
                    input {
                        r#type: "checkbox",
                        checked: dark_mode,
                        "aria-label": "Dark mode",
                        onchange: move |evt| on_dark_mode_change.call(evt.checked()),
                    }
                    span { class: "td-switch-label",
                        if dark_mode { "Dark" } else { "Light" }
                    }
                }
                button {
                    class: "td-icon-btn",
                    "aria-label": "Settings",
                    onclick: move |_| on_settings_click.call(()),
                    "\u{2699}"
                }
                button {
                    class: "td-btn td-btn--secondary",
                    onclick: move |_| on_logout_click.call(()),
                    "Log out"
                }
            }
        }
    }
}
