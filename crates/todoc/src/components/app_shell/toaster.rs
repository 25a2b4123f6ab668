use dioxus::prelude::*;
use todoc_core::ToastPosition;

use crate::components::use_toasts;
use crate::utils::SignalExt;

/// Toast notification surface anchored at `position`.
///
/// Mounted in both the login and authenticated layouts.
#[component]
pub fn Toaster(position: ToastPosition) -> Element {
    let mut toasts = use_toasts();
    let visible: Vec<_> = toasts.read().visible().cloned().collect();

    rsx! {
        section {
            class: "td-toaster td-toaster--{position.as_str()}",
            "aria-live": "polite",
            for toast in visible {
                div {
                    key: "{toast.id.as_u64()}",
                    class: "td-toast td-toast--{toast.level.as_str()}",
                    role: "status",
                    span { class: "td-toast-message", "{toast.message}" }
                    button {
                        class: "td-toast-close",
                        "aria-label": "Dismiss notification",
                        onclick: move |_| {
                            toasts.mutate(|queue| queue.dismiss(toast.id));
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
