use dioxus::prelude::*;

/// Labelled text input with an optional leading icon and trailing slot
/// (used for the password visibility toggle).
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] icon: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = VNode::empty())] trailing: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-wrap",
                if !icon.is_empty() {
                    span { class: "input-icon", "{icon}" }
                }
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
                {trailing}
            }
        }
    }
}
