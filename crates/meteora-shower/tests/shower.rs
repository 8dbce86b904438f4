use std::time::{Duration, Instant};

use meteora_core::{Rgb, Viewport};
use meteora_shower::{FrameOutcome, FrameScheduler, MeteoriteShower, ShowerSettings};

fn wide() -> Viewport {
    Viewport::new(1000.0, 600.0)
}

fn shower(viewport: Viewport, seed: u64) -> MeteoriteShower {
    MeteoriteShower::create(Some(viewport), ShowerSettings::default(), Some(seed))
        .expect("container is present")
}

/// One meteorite per 25 px of width, fixed for the shower's lifetime.
#[test]
fn population_is_sized_from_initial_width() {
    let mut s = shower(wide(), 1);
    assert_eq!(s.meteorites().len(), 40);

    s.resize(Viewport::new(2000.0, 600.0));
    for _ in 0..1000 {
        s.frame();
    }
    assert_eq!(s.meteorites().len(), 40);
}

/// Meteorites keep falling forever: anything leaving the canvas re-enters
/// above it, so after many frames nothing has drifted far away.
#[test]
fn meteorites_recycle_instead_of_escaping() {
    let mut s = shower(wide(), 2);
    for _ in 0..5000 {
        assert_eq!(s.frame(), FrameOutcome::Continue);
    }
    let viewport = s.viewport();
    for m in s.meteorites() {
        assert!(m.x >= -m.h - 1.5, "x={} h={}", m.x, m.h);
        assert!(m.y <= viewport.height + m.h + 1.5, "y={} h={}", m.y, m.h);
        assert!(m.x <= viewport.width * 1.5);
        assert!((20.0..50.0).contains(&m.h));
        assert_eq!((m.vx, m.vy), (-1.5, 1.5));
    }
}

#[test]
fn narrow_canvas_stops_after_one_frame() {
    let mut s = shower(Viewport::new(700.0, 400.0), 3);
    assert!(!s.should_animate());
    assert_eq!(s.frame(), FrameOutcome::Stopped);
    assert!(!s.is_animating());

    // Growing the canvas again restarts the loop.
    assert!(s.resize(wide()));
    assert!(s.should_animate());
    assert_eq!(s.frame(), FrameOutcome::Continue);
    assert!(s.is_animating());
}

#[test]
fn shrinking_while_running_stops_on_next_frame() {
    let mut s = shower(wide(), 4);
    assert_eq!(s.frame(), FrameOutcome::Continue);
    // Already animating: no extra frame is requested.
    assert!(!s.resize(Viewport::new(640.0, 600.0)));
    assert_eq!(s.frame(), FrameOutcome::Stopped);
    assert!(!s.is_animating());
}

#[test]
fn threshold_is_inclusive() {
    let s = shower(Viewport::new(800.0, 400.0), 5);
    assert!(s.should_animate());
    let s = shower(Viewport::new(799.0, 400.0), 5);
    assert!(!s.should_animate());
}

#[test]
fn same_seed_gives_same_shower() {
    let mut a = shower(wide(), 77);
    let mut b = shower(wide(), 77);
    for _ in 0..300 {
        a.frame();
        b.frame();
    }
    assert_eq!(a.meteorites(), b.meteorites());
}

#[test]
fn custom_palette_is_used() {
    let red = Rgb::new(255, 0, 0);
    let settings = ShowerSettings {
        palette: vec![red],
        ..ShowerSettings::default()
    };
    let mut s = MeteoriteShower::create(Some(wide()), settings, Some(6)).expect("container");
    for _ in 0..2000 {
        s.frame();
    }
    assert!(s.meteorites().iter().all(|m| m.colour == red));
}

/// Drive a shower through the scheduler the way the event loop does.
#[test]
fn scheduler_loop_runs_until_shower_stops() {
    let mut s = shower(wide(), 8);
    let mut scheduler = FrameScheduler::new(Duration::from_millis(16));
    let start = Instant::now();
    scheduler.request(start);

    let mut now = start;
    let mut frames = 0;
    for tick in 0..100 {
        if tick == 50 {
            s.resize(Viewport::new(500.0, 600.0));
        }
        if scheduler.take(now) {
            frames += 1;
            if s.frame() == FrameOutcome::Continue {
                scheduler.request(now);
            }
        }
        now += Duration::from_millis(16);
    }
    assert_eq!(frames, 51);
    assert!(!scheduler.is_pending());
    assert!(!s.is_animating());
}
