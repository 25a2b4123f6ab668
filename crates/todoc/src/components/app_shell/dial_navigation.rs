use dioxus::prelude::*;
use todoc_core::Tab;

/// Glyph shown on the dial for each tab.
fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "\u{1F3E0}",
        Tab::Record => "\u{1F4DD}",
        Tab::Chat => "\u{1F4AC}",
        Tab::Community => "\u{1F465}",
    }
}

pub(crate) fn tab_class(tab: Tab, active_tab: Tab) -> &'static str {
    if tab == active_tab {
        "td-dial-item td-dial-item--active"
    } else {
        "td-dial-item"
    }
}

/// Bottom dial navigation across the four tabs.
#[component]
pub fn DialNavigation(active_tab: Tab, on_tab_change: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "td-dial", "aria-label": "Main navigation",
            for tab in Tab::ALL {
                button {
                    key: "{tab}",
                    class: tab_class(tab, active_tab),
                    "aria-current": if tab == active_tab { "page" } else { "false" },
                    onclick: move |_| on_tab_change.call(tab),
                    span { class: "td-dial-icon", "{tab_icon(tab)}" }
                    span { class: "td-dial-label", "{tab.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_tab_highlighted() {
        let active: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|t| tab_class(*t, Tab::Chat).contains("--active"))
            .collect();
        assert_eq!(active, vec![Tab::Chat]);
    }
}
