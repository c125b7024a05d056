use crate::constants::*;
use crate::core::targets::ElementId;
use crate::core::tween::{Ease, TweenSink, TweenVars};
use crate::core::viewport::Viewport;
use rand::Rng;

// ---------------- Anchor smooth scroll ----------------

/// Selector for an in-page anchor `href`, or `None` when it names no
/// element (`"#"`, empty, or not a fragment).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(fragment) if !fragment.is_empty() => Some(href),
        _ => None,
    }
}

/// Scroll position that leaves the target clear of the fixed header.
#[inline]
pub fn scroll_target_y(offset_top: f64) -> f64 {
    offset_top - SCROLL_HEADER_OFFSET
}

pub fn smooth_scroll_to(offset_top: f64, sink: &mut impl TweenSink) -> f64 {
    let y = scroll_target_y(offset_top);
    sink.scroll_to(
        y,
        &TweenVars::over(SCROLL_DURATION).ease(Ease::Power2Out),
    );
    y
}

// ---------------- Join buttons ----------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationPlan {
    pub url: String,
    pub delay_ms: i32,
    pub target: &'static str,
    pub features: &'static str,
}

/// Only buttons embedded in a card with a link navigate.
pub fn join_plan(in_card: bool, href: Option<&str>) -> Option<NavigationPlan> {
    if !in_card {
        return None;
    }
    let url = href.map(str::trim).filter(|u| !u.is_empty())?;
    Some(NavigationPlan {
        url: url.to_string(),
        delay_ms: NAVIGATION_DELAY_MS,
        target: NAVIGATION_TARGET,
        features: NAVIGATION_FEATURES,
    })
}

pub fn press_feedback(button: ElementId, sink: &mut impl TweenSink) {
    let from = TweenVars::new().scale(1.0);
    let to = TweenVars::over(PRESS_DURATION)
        .scale(PRESS_SCALE)
        .yoyo()
        .repeat(1);
    sink.from_to(&[button], &from, &to);
}

// ---------------- Focus mode ----------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    /// `Some(true)` when Tab switches keyboard mode on.
    pub fn on_key_down(&mut self, key: &str) -> Option<bool> {
        if key == "Tab" && !self.keyboard {
            self.keyboard = true;
            return Some(true);
        }
        None
    }

    /// `Some(false)` when a pointer press ends keyboard mode.
    pub fn on_pointer_down(&mut self) -> Option<bool> {
        if self.keyboard {
            self.keyboard = false;
            return Some(false);
        }
        None
    }

    #[cfg(test)]
    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }
}

// ---------------- Hero particles ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn style(&self) -> [(&'static str, String); 5] {
        [
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

pub fn spawn_particles(rng: &mut impl Rng, count: usize) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            size_px: rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            delay_s: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
        })
        .collect()
}

// ---------------- Mobile adaptation ----------------

/// Seconds of the first entry of a computed `animation-duration`.
pub fn parse_css_seconds(value: &str) -> Option<f64> {
    let first = value.split(',').next()?.trim();
    let (number, per_second) = if let Some(ms) = first.strip_suffix("ms") {
        (ms, 1000.0)
    } else if let Some(s) = first.strip_suffix('s') {
        (s, 1.0)
    } else {
        (first, 1.0)
    };
    let v = number.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v / per_second)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutAdaptation {
    pub remove_particles: bool,
    /// New duration in seconds per shape; `None` leaves a shape unchanged.
    pub shape_durations: Vec<Option<f64>>,
}

impl LayoutAdaptation {
    pub fn is_noop(&self) -> bool {
        !self.remove_particles && self.shape_durations.iter().all(Option::is_none)
    }
}

/// Narrow viewports drop the particles and slow the CSS shape animations.
pub fn adapt_layout(viewport: Viewport, shape_durations: &[Option<f64>]) -> LayoutAdaptation {
    if viewport.is_desktop() {
        return LayoutAdaptation {
            remove_particles: false,
            shape_durations: vec![None; shape_durations.len()],
        };
    }
    LayoutAdaptation {
        remove_particles: true,
        shape_durations: shape_durations
            .iter()
            .map(|d| d.filter(|v| *v > 0.0).map(|v| v * MOBILE_DURATION_FACTOR))
            .collect(),
    }
}

// ---------------- Badge visibility ----------------

pub const BADGE_SECTION_STYLE: &[(&str, &str)] = &[("display", "block"), ("visibility", "visible")];

pub const BADGE_CARD_STYLE: &[(&str, &str)] = &[
    ("display", "block"),
    ("visibility", "visible"),
    ("opacity", "1"),
];
