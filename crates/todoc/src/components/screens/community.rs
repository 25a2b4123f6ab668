use dioxus::prelude::*;

#[component]
pub fn CommunityScreen() -> Element {
    rsx! {
        section { class: "td-screen td-community",
            h1 { class: "td-screen-title", "Community" }
            div { class: "td-empty-state",
                p { "No posts yet." }
            }
        }
    }
}
