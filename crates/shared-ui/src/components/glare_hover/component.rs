use std::rc::Rc;

use dioxus::prelude::*;

use super::state::{overlay_style, scroll_offset, GlareConfig, GlareTracker};

/// Wraps its children in a clipped container and paints a radial highlight
/// that follows the pointer.
///
/// The container is measured every time the pointer enters and its origin
/// kept in page coordinates, so the move handler itself is plain arithmetic
/// and survives scrolling.
#[component]
pub fn GlareHover(
    #[props(default = "#ffffff".to_string())] glare_color: String,
    #[props(default = 0.3)] glare_opacity: f64,
    #[props(default = -30.0)] glare_angle: f64,
    #[props(default = 300.0)] glare_size: f64,
    #[props(default = 800)] transition_duration: u32,
    #[props(default = false)] play_once: bool,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let config = GlareConfig {
        color: glare_color,
        opacity: glare_opacity,
        angle: glare_angle,
        size: glare_size,
        transition_ms: transition_duration,
        play_once,
    };

    let mut tracker = use_signal(GlareTracker::new);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);

    // `scroll` is the page scroll at the time of the triggering event.
    let measure = move |scroll: (f64, f64)| async move {
        let Some(node) = container() else {
            return;
        };
        if let Ok(rect) = node.get_client_rect().await {
            tracker.write().set_bounds(rect.origin.x, rect.origin.y, scroll);
        }
    };

    let overlay = overlay_style(&config, tracker.read().visual());
    let move_config = config.clone();
    let leave_config = config;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "glare-hover {class}",
            style: "position: relative; overflow: hidden; {style}",
            onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),
            onmouseenter: move |evt: MouseEvent| {
                let page = evt.page_coordinates();
                let client = evt.client_coordinates();
                spawn(measure(scroll_offset((page.x, page.y), (client.x, client.y))));
            },
            onmousemove: move |evt: MouseEvent| {
                let page = evt.page_coordinates();
                if tracker.peek().needs_bounds() {
                    // Pointer was already inside when the card mounted.
                    let client = evt.client_coordinates();
                    spawn(measure(scroll_offset((page.x, page.y), (client.x, client.y))));
                    return;
                }
                if !tracker.peek().tracks_moves(&move_config) {
                    return;
                }
                tracker.write().pointer_move(&move_config, page.x, page.y);
            },
            onmouseleave: move |_| {
                tracker.write().pointer_leave(&leave_config);
            },
            {children}
            div { class: "glare-hover-overlay", style: "{overlay}" }
        }
    }
}
