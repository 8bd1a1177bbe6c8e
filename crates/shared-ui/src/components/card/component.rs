use dioxus::prelude::*;

/// Rounded surface that groups related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Header row of a Card: an optional icon tile followed by title and subtitle.
#[component]
pub fn CardHeader(
    #[props(default)] icon: String,
    #[props(default)] icon_tone: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            if !icon.is_empty() {
                div { class: "card-icon {icon_tone}", "{icon}" }
            }
            div { class: "card-heading", {children} }
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

/// A headline number with a caption, e.g. "17 / Total Students".
///
/// `value` is `None` while the number is still loading; a skeleton stands in
/// for it so no placeholder number is ever shown.
#[component]
pub fn StatCard(
    icon: String,
    label: String,
    value: Option<String>,
    #[props(default)] tone: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card {tone}",
            div { class: "stat-icon", "{icon}" }
            div { class: "stat-content",
                match value {
                    Some(v) => rsx! { div { class: "stat-number", "{v}" } },
                    None => rsx! {
                        div { class: "stat-number stat-loading", "aria-busy": "true",
                            crate::Skeleton { style: "height: 1.75rem; width: 3rem;" }
                        }
                    },
                }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}
