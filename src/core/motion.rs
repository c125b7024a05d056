use crate::constants::*;
use crate::core::targets::{ElementId, Role, TargetTable};
use crate::core::tween::{Ease, TweenSink, TweenVars};
use crate::core::viewport::{Rect, Viewport};
use glam::DVec2;
use rand::Rng;

/// Smoothed cursor dot and outline trail the pointer.
pub fn follow_pointer(pos: DVec2, table: &TargetTable, sink: &mut impl TweenSink) {
    if let Some(dot) = table.first(Role::CursorDot) {
        let vars = TweenVars::over(CURSOR_DOT_DURATION)
            .xy(pos.x - CURSOR_DOT_OFFSET, pos.y - CURSOR_DOT_OFFSET)
            .ease(Ease::Power3)
            .overwrite_auto();
        sink.to(&[dot], &vars);
    }
    if let Some(outline) = table.first(Role::CursorOutline) {
        let vars = TweenVars::over(CURSOR_OUTLINE_DURATION)
            .xy(pos.x - CURSOR_OUTLINE_OFFSET, pos.y - CURSOR_OUTLINE_OFFSET)
            .ease(Ease::Power3)
            .overwrite_auto();
        sink.to(&[outline], &vars);
    }
}

pub fn hover_enter(table: &TargetTable, sink: &mut impl TweenSink) {
    scale_outline(table, CURSOR_HOVER_SCALE, sink);
}

pub fn hover_leave(table: &TargetTable, sink: &mut impl TweenSink) {
    scale_outline(table, 1.0, sink);
}

fn scale_outline(table: &TargetTable, scale: f64, sink: &mut impl TweenSink) {
    if let Some(outline) = table.first(Role::CursorOutline) {
        sink.to(
            &[outline],
            &TweenVars::over(CURSOR_HOVER_DURATION).scale(scale),
        );
    }
}

#[inline]
fn sample(rng: &mut impl Rng, (lo, hi): (f64, f64)) -> f64 {
    rng.gen_range(lo..=hi)
}

/// Drift vars for the shape at `index`: random offset, scale and period,
/// yoyo forever with a staggered start.
pub fn drift_vars(index: usize, rng: &mut impl Rng) -> TweenVars {
    let x = sample(rng, DRIFT_OFFSET_RANGE);
    let y = sample(rng, DRIFT_OFFSET_RANGE);
    let scale = sample(rng, DRIFT_SCALE_RANGE);
    let duration = sample(rng, DRIFT_DURATION_RANGE);
    TweenVars::over(duration)
        .xy(x, y)
        .scale(scale)
        .repeat(-1)
        .yoyo()
        .ease(Ease::SineInOut)
        .delay(index as f64 * DRIFT_STAGGER_SEC)
}

pub fn spawn_drift(shapes: &[ElementId], rng: &mut impl Rng, sink: &mut impl TweenSink) -> usize {
    for (i, shape) in shapes.iter().enumerate() {
        sink.to(&[*shape], &drift_vars(i, rng));
    }
    shapes.len()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxGroup {
    pub role: Role,
    pub factor: f64,
    pub duration: f64,
}

pub const PARALLAX_GROUPS: [ParallaxGroup; 3] = [
    ParallaxGroup {
        role: Role::Parallax1,
        factor: PARALLAX_GROUP_1.0,
        duration: PARALLAX_GROUP_1.1,
    },
    ParallaxGroup {
        role: Role::Parallax2,
        factor: PARALLAX_GROUP_2.0,
        duration: PARALLAX_GROUP_2.1,
    },
    ParallaxGroup {
        role: Role::Parallax3,
        factor: PARALLAX_GROUP_3.0,
        duration: PARALLAX_GROUP_3.1,
    },
];

/// Pointer position relative to the viewport centre, in `[-0.5, 0.5]`.
pub fn parallax_offset(pointer: DVec2, viewport: Viewport) -> DVec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return DVec2::ZERO;
    }
    DVec2::new(
        pointer.x / viewport.width - 0.5,
        pointer.y / viewport.height - 0.5,
    )
}

pub fn apply_parallax(
    table: &TargetTable,
    pointer: DVec2,
    viewport: Viewport,
    sink: &mut impl TweenSink,
) {
    let offset = parallax_offset(pointer, viewport);
    for group in PARALLAX_GROUPS.iter() {
        let targets = table.get(group.role);
        if targets.is_empty() {
            continue;
        }
        let vars = TweenVars::over(group.duration)
            .xy(offset.x * group.factor, offset.y * group.factor)
            .ease(Ease::Power2Out);
        sink.to(targets, &vars);
    }
}

/// `(rotation_x, rotation_y)` in degrees for a pointer over a card.
pub fn tilt_angles(pointer: DVec2, rect: Rect) -> (f64, f64) {
    let local = pointer - DVec2::new(rect.left, rect.top);
    let center = DVec2::new(rect.width / 2.0, rect.height / 2.0);
    (
        (local.y - center.y) / TILT_DIVISOR,
        (center.x - local.x) / TILT_DIVISOR,
    )
}

pub fn tilt_card(card: ElementId, pointer: DVec2, rect: Rect, sink: &mut impl TweenSink) {
    let (rx, ry) = tilt_angles(pointer, rect);
    let vars = TweenVars::over(TILT_DURATION)
        .rotation(rx, ry)
        .perspective(TILT_PERSPECTIVE)
        .ease(Ease::Power2Out);
    sink.to(&[card], &vars);
}

pub fn reset_tilt(card: ElementId, sink: &mut impl TweenSink) {
    sink.to(&[card], &TweenVars::over(TILT_DURATION).rotation(0.0, 0.0));
}
