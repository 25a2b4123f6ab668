use dioxus::prelude::*;

/// Assistant chat screen.
#[component]
pub fn ChatScreen() -> Element {
    rsx! {
        section { class: "td-screen td-chat",
            h1 { class: "td-screen-title", "Chat" }
            div { class: "td-empty-state",
                p { "Ask about feeding, sleep or growth." }
            }
        }
    }
}
