// Host-side tests for cursor, drift, parallax and tilt motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
include!("support/harness.rs");

use crate::core::motion::*;
use crate::core::targets::{ElementId, Role, TargetTable};
use crate::core::tween::{Ease, TweenVars};
use crate::core::viewport::{Rect, Viewport};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recording::{Call, RecordingSink};

fn cursor_table() -> TargetTable {
    TargetTable::new()
        .with(Role::CursorDot, &[ElementId(1)])
        .with(Role::CursorOutline, &[ElementId(2)])
}

#[test]
fn cursor_parts_trail_with_their_offsets() {
    let mut sink = RecordingSink::default();
    follow_pointer(DVec2::new(300.0, 200.0), &cursor_table(), &mut sink);

    let calls = sink.to_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, vec![ElementId(1)]);
    assert_eq!(
        calls[0].1,
        TweenVars::over(0.3)
            .xy(296.0, 196.0)
            .ease(Ease::Power3)
            .overwrite_auto()
    );
    assert_eq!(calls[1].0, vec![ElementId(2)]);
    assert_eq!(calls[1].1.x, Some(284.0));
    assert_eq!(calls[1].1.y, Some(184.0));
    assert_eq!(calls[1].1.duration, Some(0.6));
}

#[test]
fn cursor_without_elements_is_silent() {
    let mut sink = RecordingSink::default();
    follow_pointer(DVec2::new(10.0, 10.0), &TargetTable::new(), &mut sink);
    hover_enter(&TargetTable::new(), &mut sink);
    assert!(sink.calls.is_empty());
}

#[test]
fn hover_scales_the_outline_only() {
    let mut sink = RecordingSink::default();
    let table = cursor_table();
    hover_enter(&table, &mut sink);
    hover_leave(&table, &mut sink);
    let calls = sink.to_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(t, _)| t == &vec![ElementId(2)]));
    assert_eq!(calls[0].1, TweenVars::over(0.3).scale(1.5));
    assert_eq!(calls[1].1, TweenVars::over(0.3).scale(1.0));
}

#[test]
fn drift_is_seeded_and_in_range() {
    let shapes: Vec<ElementId> = (0..6).map(ElementId).collect();
    let mut a = RecordingSink::default();
    let mut b = RecordingSink::default();
    assert_eq!(spawn_drift(&shapes, &mut StdRng::seed_from_u64(7), &mut a), 6);
    spawn_drift(&shapes, &mut StdRng::seed_from_u64(7), &mut b);
    assert_eq!(a.calls, b.calls);

    for (i, (targets, vars)) in a.to_calls().into_iter().enumerate() {
        assert_eq!(targets, vec![shapes[i]]);
        let x = vars.x.unwrap();
        let y = vars.y.unwrap();
        let scale = vars.scale.unwrap();
        let duration = vars.duration.unwrap();
        assert!((-100.0..=100.0).contains(&x));
        assert!((-100.0..=100.0).contains(&y));
        assert!((0.9..=1.1).contains(&scale));
        assert!((15.0..=25.0).contains(&duration));
        assert_eq!(vars.repeat, Some(-1));
        assert_eq!(vars.yoyo, Some(true));
        assert_eq!(vars.ease, Some(Ease::SineInOut));
        assert!((vars.delay.unwrap() - 0.3 * i as f64).abs() < 1e-12);
    }
}

#[test]
fn drift_values_differ_between_shapes() {
    let mut rng = StdRng::seed_from_u64(42);
    let first = drift_vars(0, &mut rng);
    let second = drift_vars(1, &mut rng);
    assert_ne!((first.x, first.y), (second.x, second.y));
}

#[test]
fn no_shapes_no_drift() {
    let mut sink = RecordingSink::default();
    assert_eq!(spawn_drift(&[], &mut StdRng::seed_from_u64(1), &mut sink), 0);
    assert!(sink.calls.is_empty());
}

#[test]
fn parallax_offset_is_centred() {
    let vp = Viewport::new(1000.0, 800.0);
    assert_eq!(parallax_offset(DVec2::new(500.0, 400.0), vp), DVec2::ZERO);
    assert_eq!(
        parallax_offset(DVec2::new(0.0, 800.0), vp),
        DVec2::new(-0.5, 0.5)
    );
    assert_eq!(
        parallax_offset(DVec2::new(5.0, 5.0), Viewport::new(0.0, 0.0)),
        DVec2::ZERO
    );
}

#[test]
fn parallax_groups_scale_the_offset() {
    let table = TargetTable::new()
        .with(Role::Parallax1, &[ElementId(10), ElementId(11)])
        .with(Role::Parallax3, &[ElementId(30)]);
    let mut sink = RecordingSink::default();
    // offset (0.25, -0.25)
    apply_parallax(
        &table,
        DVec2::new(750.0, 200.0),
        Viewport::new(1000.0, 800.0),
        &mut sink,
    );
    let calls = sink.to_calls();
    assert_eq!(calls.len(), 2, "empty group 2 is skipped");
    assert_eq!(calls[0].0, vec![ElementId(10), ElementId(11)]);
    assert_eq!(calls[0].1.x, Some(12.5));
    assert_eq!(calls[0].1.y, Some(-12.5));
    assert_eq!(calls[0].1.duration, Some(1.5));
    assert_eq!(calls[1].0, vec![ElementId(30)]);
    assert_eq!(calls[1].1.x, Some(15.0));
    assert_eq!(calls[1].1.duration, Some(1.3));
    assert!(calls.iter().all(|(_, v)| v.ease == Some(Ease::Power2Out)));
}

#[test]
fn parallax_group_two_moves_against_the_pointer() {
    let g = PARALLAX_GROUPS[1];
    assert_eq!(g.role, Role::Parallax2);
    assert_eq!(g.factor, -40.0);
    assert_eq!(g.duration, 1.7);
}

#[test]
fn tilt_angles_from_card_centre() {
    let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(tilt_angles(DVec2::new(200.0, 100.0), rect), (0.0, 0.0));
    // top-left corner: local (0, 0)
    assert_eq!(tilt_angles(DVec2::new(100.0, 50.0), rect), (-2.5, 5.0));
    // bottom-right corner: local (200, 100)
    assert_eq!(tilt_angles(DVec2::new(300.0, 150.0), rect), (2.5, -5.0));
}

#[test]
fn tilt_and_reset_target_the_card() {
    let mut sink = RecordingSink::default();
    let card = ElementId(5);
    tilt_card(
        card,
        DVec2::new(100.0, 50.0),
        Rect::new(100.0, 50.0, 200.0, 100.0),
        &mut sink,
    );
    reset_tilt(card, &mut sink);
    match &sink.calls[..] {
        [Call::To(t1, tilt), Call::To(t2, reset)] => {
            assert_eq!(t1, &vec![card]);
            assert_eq!(t2, &vec![card]);
            assert_eq!(
                *tilt,
                TweenVars::over(0.5)
                    .rotation(-2.5, 5.0)
                    .perspective(1000.0)
                    .ease(Ease::Power2Out)
            );
            assert_eq!(*reset, TweenVars::over(0.5).rotation(0.0, 0.0));
        }
        other => panic!("unexpected calls: {other:?}"),
    }
}
