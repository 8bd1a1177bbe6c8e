use dioxus::prelude::*;

/// Horizontal rule with a short caption in the middle.
#[component]
pub fn Divider(#[props(default)] text: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "divider", role: "separator",
            span { class: "divider-line" }
            if !text.is_empty() {
                span { class: "divider-text", "{text}" }
                span { class: "divider-line" }
            }
        }
    }
}
