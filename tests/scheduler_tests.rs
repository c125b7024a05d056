// Host-side tests for frame coalescing, debouncing, loop cancellation and
// page lifecycle handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
include!("support/harness.rs");

use crate::core::scheduler::*;

#[test]
fn coalescer_requests_once_per_frame() {
    let mut c = FrameCoalescer::default();
    let scheduled = (0..5).filter(|_| c.request()).count();
    assert_eq!(scheduled, 1);
    assert!(c.is_pending());
    c.complete();
    assert!(!c.is_pending());
    assert!(c.request());
}

#[test]
fn debounce_fires_once_after_the_last_trigger() {
    let mut d = Debouncer::new(250.0);
    let _a = d.trigger(0.0);
    let _b = d.trigger(100.0);
    let c = d.trigger(200.0);
    assert_eq!(d.poll(c, 449.0), DebouncePoll::Wait(1.0));
    assert_eq!(d.poll(c, 450.0), DebouncePoll::Fire);
    assert_eq!(d.poll(c, 500.0), DebouncePoll::Stale);
}

#[test]
fn early_timer_gets_the_remaining_wait() {
    let mut d = Debouncer::new(250.0);
    let t = d.trigger(1000.0);
    // timer woke at 249.5ms on a different clock
    match d.poll(t, 1249.5) {
        DebouncePoll::Wait(ms) => assert!((ms - 0.5).abs() < 1e-9),
        other => panic!("expected a wait, got {other:?}"),
    }
    assert_eq!(d.poll(t, 1250.0), DebouncePoll::Fire);
}

#[test]
fn stale_tickets_never_fire() {
    let mut d = Debouncer::new(250.0);
    let first = d.trigger(0.0);
    let second = d.trigger(10.0);
    assert_eq!(d.poll(first, 1000.0), DebouncePoll::Stale);
    assert_eq!(d.poll(second, 1000.0), DebouncePoll::Fire);
    assert_eq!(d.poll(second, 2000.0), DebouncePoll::Stale);
}

#[test]
fn burst_of_timers_yields_one_refresh() {
    let mut d = Debouncer::new(250.0);
    let tickets: Vec<_> = (0..8).map(|i| d.trigger(i as f64 * 16.0)).collect();
    let now = 7.0 * 16.0 + 250.0;
    let fired = tickets
        .into_iter()
        .filter(|t| d.poll(*t, now) == DebouncePoll::Fire)
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn driver_runs_until_cancelled() {
    let token = CancelToken::new();
    let mut driver = FrameDriver::new(token.clone());
    let mut ran = 0;
    assert!(driver.step(|| ran += 1));
    assert!(driver.step(|| ran += 1));
    token.cancel();
    assert!(!driver.step(|| ran += 1));
    assert_eq!(ran, 2);
    assert_eq!(driver.frames(), 2);
}

#[test]
fn cancel_inside_frame_stops_rescheduling() {
    let token = CancelToken::new();
    let mut driver = FrameDriver::new(token.clone());
    let inner = token.clone();
    assert!(!driver.step(move || inner.cancel()));
    assert_eq!(driver.frames(), 1);
}

#[test]
fn back_forward_cache_restore_restarts_the_loop() {
    let mut page = PageLifecycle::default();
    // initial load
    assert_eq!(page.on_show(false), LoopCommand::Keep);
    assert_eq!(page.on_hide(true), LoopCommand::Stop);
    assert_eq!(page.on_show(true), LoopCommand::Restart);
    // and again on the next trip through the cache
    assert_eq!(page.on_hide(true), LoopCommand::Stop);
    assert_eq!(page.on_show(true), LoopCommand::Restart);
    assert_eq!(page.on_show(true), LoopCommand::Keep);
}

#[test]
fn unloaded_page_stays_stopped() {
    let mut page = PageLifecycle::default();
    assert_eq!(page.on_hide(false), LoopCommand::Stop);
    assert_eq!(page.on_hide(false), LoopCommand::Keep);
    assert_eq!(page.on_show(true), LoopCommand::Keep);
}

#[test]
fn restarted_driver_runs_on_a_fresh_token() {
    let mut page = PageLifecycle::default();
    let first = CancelToken::new();
    if page.on_hide(true) == LoopCommand::Stop {
        first.cancel();
    }
    assert!(first.is_cancelled());
    assert_eq!(page.on_show(true), LoopCommand::Restart);
    let mut driver = FrameDriver::new(CancelToken::new());
    let mut ran = false;
    assert!(driver.step(|| ran = true));
    assert!(ran);
}
