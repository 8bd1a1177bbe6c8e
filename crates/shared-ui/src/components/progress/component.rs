use dioxus::prelude::*;

const RING_RADIUS: f64 = 50.0;

/// Circumference of a ring of radius `r`.
fn circumference(r: f64) -> f64 {
    2.0 * std::f64::consts::PI * r
}

/// Stroke offset that leaves `percent` of the ring visible.
/// Values outside 0..=100 are clamped.
pub fn ring_dash_offset(percent: f64, r: f64) -> f64 {
    let pct = percent.clamp(0.0, 100.0);
    circumference(r) * (1.0 - pct / 100.0)
}

/// A circular progress indicator with the percentage printed in the middle.
#[component]
pub fn ProgressRing(
    value: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "progress-ring", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let dash = format!("{:.0}", circumference(RING_RADIUS));
    let offset = format!("{:.0}", ring_dash_offset(value, RING_RADIUS));
    let label = format!("{:.0}%", value.clamp(0.0, 100.0));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            svg {
                class: "progress-ring-svg",
                view_box: "0 0 120 120",
                circle {
                    class: "progress-ring-track",
                    cx: "60",
                    cy: "60",
                    r: "50",
                    fill: "none",
                    stroke_width: "10",
                }
                circle {
                    class: "progress-ring-value",
                    cx: "60",
                    cy: "60",
                    r: "50",
                    fill: "none",
                    stroke_width: "10",
                    stroke_linecap: "round",
                    stroke_dasharray: "{dash}",
                    stroke_dashoffset: "{offset}",
                    transform: "rotate(-90 60 60)",
                }
                text {
                    class: "progress-ring-label",
                    x: "60",
                    y: "60",
                    dy: "8",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}
