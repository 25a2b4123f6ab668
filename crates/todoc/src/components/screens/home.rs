use dioxus::prelude::*;

/// Landing screen with shortcuts into recording and chat.
#[component]
pub fn HomeScreen(
    on_add_record_requested: EventHandler<()>,
    on_open_chat_requested: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "td-screen td-home",
            h1 { class: "td-screen-title", "Today" }
            p { class: "td-screen-subtitle", "Nothing recorded yet today." }

            div { class: "td-home-actions",
                button {
                    class: "td-btn td-btn--primary",
                    onclick: move |_| on_add_record_requested.call(()),
                    "Add record"
                }
                button {
                    class: "td-btn td-btn--secondary",
                    onclick: move |_| on_open_chat_requested.call(()),
                    "Ask the assistant"
                }
            }
        }
    }
}
