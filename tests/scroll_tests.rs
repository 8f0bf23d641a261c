// Host-side tests for the scroll model, the momentum scroller and the frame ticker.

use folio_core::lifecycle::LoopGate;
use folio_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scroller(offset: f64, extent: f64) -> Scroller {
    Scroller::new(ScrollerOptions::default(), ScrollState::new(offset, extent))
}

#[test]
fn progress_is_offset_over_extent() {
    let s = ScrollState::new(250.0, 1000.0);
    assert_eq!(s.progress(), Some(0.25));
    assert_eq!(s.progress_width_css().as_deref(), Some("25%"));
    assert_eq!(ScrollState::new(0.0, 1000.0).progress_width_css().as_deref(), Some("0%"));
    assert_eq!(ScrollState::new(1000.0, 1000.0).progress_width_css().as_deref(), Some("100%"));
}

#[test]
fn progress_is_not_clamped() {
    let p = ScrollState::new(1100.0, 1000.0).progress().unwrap();
    assert!(approx(p, 1.1));
    let p = ScrollState::new(-50.0, 1000.0).progress().unwrap();
    assert!(approx(p, -0.05));
}

#[test]
fn progress_without_scrollable_extent_is_none() {
    assert_eq!(ScrollState::new(0.0, 0.0).progress(), None);
    assert_eq!(ScrollState::new(10.0, 0.0).progress_width_css(), None);
}

#[test]
fn default_options_match_the_page_configuration() {
    let o = ScrollerOptions::default();
    assert_eq!(o.duration_sec, 1.2);
    assert_eq!(o.easing, Easing::ExpoOut);
    assert_eq!(o.wheel_multiplier, 1.0);
    assert_eq!(o.touch_multiplier, 2.0);
    assert!(!o.smooth_touch);
}

#[test]
fn wheel_eases_toward_target_over_duration() {
    let mut s = scroller(0.0, 2000.0);
    assert!(s.on_wheel(100.0));
    assert_eq!(s.target(), 100.0);
    assert!(s.is_animating());

    // First frame only anchors the animation start.
    assert_eq!(s.raf(1000.0), None);

    let ev = s.raf(1600.0).expect("moved");
    assert!(approx(ev.scroll, 100.0 * (1.0 - 2f64.powi(-5))));
    assert_eq!(ev.direction, 1);
    assert_eq!(ev.limit, 2000.0);

    let ev = s.raf(2200.0).expect("finished");
    assert_eq!(ev.scroll, 100.0);
    assert!(!s.is_animating());
    assert_eq!(s.raf(2300.0), None);
}

#[test]
fn wheel_target_is_clamped_to_limit() {
    let mut s = scroller(0.0, 500.0);
    s.on_wheel(-80.0);
    assert_eq!(s.target(), 0.0);
    assert!(!s.is_animating());

    s.on_wheel(10_000.0);
    assert_eq!(s.target(), 500.0);
}

#[test]
fn consecutive_wheel_events_accumulate_target() {
    let mut s = scroller(0.0, 2000.0);
    s.on_wheel(100.0);
    s.raf(0.0);
    s.raf(300.0);
    s.on_wheel(100.0);
    assert_eq!(s.target(), 200.0);
    let mid = s.scroll();
    assert!(mid > 0.0 && mid < 100.0);
    // A new animation starts from where the last one was.
    assert_eq!(s.raf(400.0), None);
    let ev = s.raf(400.0 + 1200.0).unwrap();
    assert_eq!(ev.scroll, 200.0);
}

#[test]
fn touch_is_left_to_the_browser() {
    let mut s = scroller(0.0, 1000.0);
    assert!(!s.on_touch(40.0));
    assert!(!s.is_animating());
}

#[test]
fn sync_follows_native_scroll_when_idle() {
    let mut s = scroller(0.0, 1000.0);
    let ev = s.sync(300.0).unwrap();
    assert_eq!(ev.scroll, 300.0);
    assert_eq!(ev.velocity, 300.0);
    assert_eq!(s.target(), 300.0);

    let ev = s.sync(250.0).unwrap();
    assert_eq!(ev.direction, -1);
    assert_eq!(s.sync(250.0), None);
}

#[test]
fn sync_is_ignored_while_animating() {
    let mut s = scroller(0.0, 1000.0);
    s.on_wheel(200.0);
    assert_eq!(s.sync(37.0), None);
    assert_eq!(s.target(), 200.0);
}

#[test]
fn scroll_to_immediate_jumps() {
    let mut s = scroller(800.0, 1000.0);
    let ev = s.scroll_to(0.0, true).unwrap();
    assert_eq!(ev.scroll, 0.0);
    assert_eq!(ev.direction, -1);
    assert!(!s.is_animating());
}

#[test]
fn scroll_to_animated_reaches_top() {
    let mut s = scroller(800.0, 1000.0);
    assert_eq!(s.scroll_to(0.0, false), None);
    assert!(s.is_animating());
    s.raf(0.0);
    let ev = s.raf(1200.0).unwrap();
    assert_eq!(ev.scroll, 0.0);
}

#[test]
fn shrinking_limit_clamps_target() {
    let mut s = scroller(0.0, 1000.0);
    s.on_wheel(900.0);
    s.set_limit(400.0);
    assert_eq!(s.target(), 400.0);
    assert_eq!(s.limit(), 400.0);
}

#[test]
fn ticker_first_tick_is_zero() {
    let mut t = Ticker::new();
    let tick = t.tick(5000.0);
    assert_eq!(tick.time, 0.0);
    assert_eq!(tick.delta, 0.0);
    assert_eq!(tick.frame, 0);
}

#[test]
fn ticker_reports_seconds_and_milliseconds() {
    let mut t = Ticker::new();
    t.tick(1000.0);
    let tick = t.tick(1016.0);
    assert!(approx(tick.time, 0.016));
    assert!(approx(tick.delta, 0.016));
    assert!(approx(tick.time_ms(), 16.0));
    assert_eq!(tick.frame, 1);
}

#[test]
fn ticker_smooths_long_stalls_by_default() {
    let mut t = Ticker::new();
    assert!(t.lag_smoothing_enabled());
    t.tick(1000.0);
    t.tick(1016.0);
    let tick = t.tick(3016.0);
    assert!(approx(tick.delta, 0.033));
    assert!(approx(tick.time, 0.049));
}

#[test]
fn ticker_without_lag_smoothing_reports_real_time() {
    let mut t = Ticker::new();
    t.lag_smoothing(0.0, 0.0);
    assert!(!t.lag_smoothing_enabled());
    t.tick(1000.0);
    t.tick(1016.0);
    let tick = t.tick(3016.0);
    assert!(approx(tick.delta, 2.0));
    assert!(approx(tick.time, 2.016));
}

#[test]
fn easing_endpoints_and_shape() {
    for e in [Easing::Linear, Easing::Power4Out] {
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
    }
    assert_eq!(Easing::ExpoOut.apply(0.0), 0.0);
    assert!(Easing::ExpoOut.apply(1.0) > 0.999);
    assert!((Easing::Power4Out.apply(0.5) - 0.9375).abs() < 1e-6);
    assert!((Easing::ExpoOut.apply_f64(0.1) - 0.5).abs() < 1e-12);
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::Linear.apply(2.0), 1.0);
    assert_eq!(Easing::Power4Out.apply_f64(3.0), 1.0);
}

#[test]
fn scroll_to_goes_through_the_scroller_when_present() {
    let mut s = scroller(800.0, 1000.0);
    assert_eq!(route_scroll_to(Some(&mut s), 0.0), ScrollRoute::Smooth);
    assert_eq!(s.target(), 0.0);
    assert!(s.is_animating());
    // Nothing moves until frames arrive.
    assert_eq!(s.scroll(), 800.0);

    s.raf(0.0);
    let mid = s.raf(600.0).unwrap();
    assert!(mid.scroll > 0.0 && mid.scroll < 800.0);
    assert_eq!(mid.direction, -1);
    assert_eq!(s.raf(1200.0).unwrap().scroll, 0.0);
}

#[test]
fn scroll_to_without_scroller_falls_back_to_native() {
    assert_eq!(route_scroll_to(None, 0.0), ScrollRoute::Native(0.0));
    assert_eq!(route_scroll_to(None, 350.0), ScrollRoute::Native(350.0));
    assert_eq!(route_scroll_to(None, -20.0), ScrollRoute::Native(0.0));
}

#[test]
fn wheel_still_moves_after_a_paused_frame_loop_resumes() {
    // A wheel during a pause is consumed but only takes effect once frames
    // flow again.
    let mut s = scroller(0.0, 1000.0);
    let mut gate = LoopGate::new();
    assert!(gate.request());
    gate.pause();
    assert!(s.on_wheel(300.0));
    assert!(!gate.enter_frame());
    assert_eq!(s.sync(0.0), None);

    assert!(gate.resume());
    assert!(gate.enter_frame());
    s.raf(10_000.0);
    let ev = s.raf(11_200.0).unwrap();
    assert_eq!(ev.scroll, 300.0);
}
