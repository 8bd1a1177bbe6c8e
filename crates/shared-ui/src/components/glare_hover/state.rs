//! Pointer-tracking state behind [`GlareHover`](super::GlareHover).
//!
//! Kept free of any rendering so the behaviour can be driven directly from
//! tests: feed it bounds and pointer events, read back the visual state.

/// Configuration of a glare overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct GlareConfig {
    /// Any CSS color; the center of the gradient.
    pub color: String,
    /// Opacity while the pointer is inside, 0.0..=1.0.
    pub opacity: f64,
    /// Rotation of the overlay in degrees.
    pub angle: f64,
    /// Gradient radius in pixels.
    pub size: f64,
    /// Fade duration in milliseconds.
    pub transition_ms: u32,
    /// Show the effect at most once per mount.
    pub play_once: bool,
}

impl Default for GlareConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            opacity: 0.3,
            angle: -30.0,
            size: 300.0,
            transition_ms: 800,
            play_once: false,
        }
    }
}

/// What the overlay currently looks like.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlareVisual {
    pub opacity: f64,
    pub background: Option<String>,
    pub rotation: Option<f64>,
}

impl GlareVisual {
    /// Inline CSS for the visual part of the overlay.
    pub fn css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        if let Some(bg) = &self.background {
            css.push_str(&format!(" background: {bg};"));
        }
        if let Some(deg) = self.rotation {
            css.push_str(&format!(" transform: rotate({deg}deg);"));
        }
        css
    }
}

/// Gradient centered at `(x, y)` relative to the container's top-left corner.
pub fn radial_gradient(config: &GlareConfig, x: f64, y: f64) -> String {
    format!(
        "radial-gradient(circle {}px at {x}px {y}px, {}, transparent)",
        config.size, config.color
    )
}

/// Full inline style of the overlay element.
pub fn overlay_style(config: &GlareConfig, visual: &GlareVisual) -> String {
    format!(
        "position: absolute; inset: 0; pointer-events: none; transition: opacity {}ms ease; {}",
        config.transition_ms,
        visual.css()
    )
}

/// Scroll offset of the page, recovered from one pointer event's page and
/// client coordinates.
pub fn scroll_offset(page: (f64, f64), client: (f64, f64)) -> (f64, f64) {
    (page.0 - client.0, page.1 - client.1)
}

/// Tracks the container origin, the visual state, and whether a play-once
/// effect has already been used up.
///
/// The origin is kept in page coordinates, so scrolling while the pointer
/// stays inside does not shift the gradient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlareTracker {
    origin: Option<(f64, f64)>,
    visual: GlareVisual,
    has_played: bool,
}

impl GlareTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the container's top-left corner. `left`/`top` are client
    /// coordinates measured while the page was scrolled by `scroll`.
    pub fn set_bounds(&mut self, left: f64, top: f64, scroll: (f64, f64)) {
        self.origin = Some((left + scroll.0, top + scroll.1));
    }

    pub fn needs_bounds(&self) -> bool {
        self.origin.is_none()
    }

    pub fn visual(&self) -> &GlareVisual {
        &self.visual
    }

    /// Whether a pointer move would change anything. False before the
    /// container has been measured and after a play-once effect ran.
    pub fn tracks_moves(&self, config: &GlareConfig) -> bool {
        self.origin.is_some() && !(config.play_once && self.has_played)
    }

    /// Handle a pointer move at page coordinates `(page_x, page_y)`.
    /// Returns `true` when the visual state was updated.
    pub fn pointer_move(&mut self, config: &GlareConfig, page_x: f64, page_y: f64) -> bool {
        if !self.tracks_moves(config) {
            return false;
        }
        let Some((left, top)) = self.origin else {
            return false;
        };
        let x = page_x - left;
        let y = page_y - top;
        self.visual = GlareVisual {
            opacity: config.opacity,
            background: Some(radial_gradient(config, x, y)),
            rotation: Some(config.angle),
        };
        true
    }

    /// Handle the pointer leaving the container.
    ///
    /// The gradient stays in place so it fades out instead of vanishing.
    pub fn pointer_leave(&mut self, config: &GlareConfig) {
        self.visual.opacity = 0.0;
        if config.play_once {
            self.has_played = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn measured() -> GlareTracker {
        let mut t = GlareTracker::new();
        t.set_bounds(100.0, 50.0, (0.0, 0.0));
        t
    }

    #[test]
    fn starts_hidden() {
        let t = GlareTracker::new();
        assert_eq!(t.visual().opacity, 0.0);
        assert_eq!(t.visual().background, None);
        assert_eq!(t.visual().css(), "opacity: 0;");
    }

    #[test]
    fn move_positions_gradient_relative_to_origin() {
        let config = GlareConfig::default();
        let mut t = measured();
        assert!(t.pointer_move(&config, 130.0, 80.5));

        let v = t.visual();
        assert_eq!(v.opacity, 0.3);
        assert_eq!(
            v.background.as_deref(),
            Some("radial-gradient(circle 300px at 30px 30.5px, #ffffff, transparent)")
        );
        assert_eq!(v.rotation, Some(-30.0));
    }

    #[test]
    fn move_uses_configured_values() {
        let config = GlareConfig {
            color: "#a78bfa".into(),
            opacity: 0.18,
            angle: -30.0,
            size: 280.0,
            transition_ms: 700,
            play_once: false,
        };
        let mut t = measured();
        t.pointer_move(&config, 100.0, 50.0);
        assert_eq!(
            t.visual().css(),
            "opacity: 0.18; background: radial-gradient(circle 280px at 0px 0px, #a78bfa, transparent); transform: rotate(-30deg);"
        );
    }

    #[test]
    fn leave_hides_but_keeps_gradient_for_fade() {
        let config = GlareConfig::default();
        let mut t = measured();
        t.pointer_move(&config, 110.0, 60.0);
        t.pointer_leave(&config);
        assert_eq!(t.visual().opacity, 0.0);
        assert!(t.visual().background.is_some());
        assert!(t.tracks_moves(&config));
    }

    #[test]
    fn glare_reappears_without_play_once() {
        let config = GlareConfig::default();
        let mut t = measured();
        t.pointer_move(&config, 110.0, 60.0);
        t.pointer_leave(&config);
        assert!(t.pointer_move(&config, 120.0, 70.0));
        assert_eq!(t.visual().opacity, 0.3);
    }

    #[test]
    fn play_once_freezes_after_first_leave() {
        let config = GlareConfig {
            play_once: true,
            ..GlareConfig::default()
        };
        let mut t = measured();
        assert!(t.pointer_move(&config, 110.0, 60.0));
        t.pointer_leave(&config);
        assert!(!t.tracks_moves(&config));

        let frozen = t.visual().clone();
        for i in 0..5 {
            assert!(!t.pointer_move(&config, 110.0 + i as f64, 60.0));
        }
        assert_eq!(t.visual(), &frozen);
        assert_eq!(t.visual().opacity, 0.0);
    }

    #[test]
    fn move_before_measurement_is_ignored() {
        let config = GlareConfig::default();
        let mut t = GlareTracker::new();
        assert!(t.needs_bounds());
        assert!(!t.tracks_moves(&config));
        assert!(!t.pointer_move(&config, 10.0, 10.0));
        assert_eq!(t.visual(), &GlareVisual::default());
    }

    #[test]
    fn leave_before_measurement_is_harmless() {
        let config = GlareConfig {
            play_once: true,
            ..GlareConfig::default()
        };
        let mut t = GlareTracker::new();
        t.pointer_leave(&config);
        assert_eq!(t.visual().opacity, 0.0);

        t.set_bounds(0.0, 0.0, (0.0, 0.0));
        assert!(!t.tracks_moves(&config));
    }

    #[test]
    fn scrolling_inside_the_box_keeps_gradient_under_pointer() {
        let config = GlareConfig::default();
        let mut t = measured();
        assert!(!t.needs_bounds());

        // Page scrolled 200px down: the box now sits at client top -150, and
        // a pointer at client y 0 is 150px below the box's top edge.
        let scroll = (0.0, 200.0);
        let (page_x, page_y) = (130.0 + scroll.0, 0.0 + scroll.1);
        t.pointer_move(&config, page_x, page_y);
        assert_eq!(
            t.visual().background.as_deref(),
            Some("radial-gradient(circle 300px at 30px 150px, #ffffff, transparent)")
        );
    }

    #[test]
    fn bounds_measured_while_scrolled_are_stored_in_page_space() {
        let config = GlareConfig::default();
        let mut t = GlareTracker::new();
        // Measured with the page scrolled 40px right and 300px down.
        t.set_bounds(100.0, 50.0, (40.0, 300.0));
        t.pointer_move(&config, 150.0, 360.0);
        assert_eq!(
            t.visual().background.as_deref(),
            Some("radial-gradient(circle 300px at 10px 10px, #ffffff, transparent)")
        );
    }

    #[test]
    fn scroll_offset_from_event_coordinates() {
        assert_eq!(scroll_offset((130.0, 420.0), (130.0, 20.0)), (0.0, 400.0));
        assert_eq!(scroll_offset((10.0, 10.0), (10.0, 10.0)), (0.0, 0.0));
    }

    #[test]
    fn pointer_outside_box_yields_negative_offsets() {
        let config = GlareConfig::default();
        let mut t = measured();
        t.pointer_move(&config, 90.0, 40.0);
        assert_eq!(
            t.visual().background.as_deref(),
            Some("radial-gradient(circle 300px at -10px -10px, #ffffff, transparent)")
        );
    }

    #[test]
    fn overlay_style_includes_transition() {
        let config = GlareConfig {
            transition_ms: 700,
            ..GlareConfig::default()
        };
        let style = overlay_style(&config, &GlareVisual::default());
        assert_eq!(
            style,
            "position: absolute; inset: 0; pointer-events: none; transition: opacity 700ms ease; opacity: 0;"
        );
    }
}
