use dioxus::prelude::*;

/// Kinds of entry the record screen offers.
const RECORD_KINDS: [(&str, &str); 5] = [
    ("meal", "Meal"),
    ("sleep", "Sleep"),
    ("stool", "Diaper"),
    ("health", "Health"),
    ("growth", "Growth"),
];

fn panel_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "td-record-panel td-record-panel--dark"
    } else {
        "td-record-panel"
    }
}

/// Record entry screen. Reads the display mode for its chart palette.
#[component]
pub fn RecordScreen(dark_mode: bool) -> Element {
    let mut selected = use_signal(|| RECORD_KINDS[0].0);

    rsx! {
        section { class: "td-screen td-record",
            h1 { class: "td-screen-title", "Record" }
            div { class: "td-chip-row",
                for (kind, label) in RECORD_KINDS {
                    button {
                        key: "{kind}",
                        class: if selected() == kind { "td-chip td-chip--active" } else { "td-chip" },
                        onclick: move |_| selected.set(kind),
                        "{label}"
                    }
                }
            }
            div { class: panel_class(dark_mode),
                p { class: "td-empty-state", "No {selected} entries yet." }
            }
        }
    }
}
