//! Meteorite outlines and their canvas painting.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::meteorite::Meteorite;

/// Skew applied per pixel of streak height.
pub const SHOWER_ANGLE: f64 = std::f64::consts::PI / 3.5;

/// Horizontal thickness of a streak.
pub const STREAK_WIDTH: f64 = 10.0;

/// Radius of the rounded streak corners.
const CORNER_RADIUS: f64 = 5.0;

/// Distance between sample points when filling an outline.
const SAMPLE_STEP: f64 = 2.0;

/// Axis-aligned bounding box in simulation space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Whether `(px, py)` lies inside the streak anchored at `(x, y)`.
///
/// The streak is a rounded rectangle `STREAK_WIDTH` wide and `h` tall,
/// sheared so its bottom edge sits `SHOWER_ANGLE * h` to the left of its
/// top edge.
pub(crate) fn streak_contains(x: f64, y: f64, h: f64, px: f64, py: f64) -> bool {
    if h <= 0.0 {
        return false;
    }
    let v = py - y;
    if !(0.0..=h).contains(&v) {
        return false;
    }
    let skew = SHOWER_ANGLE * h;
    let u = px - (x - skew * v / h);
    if !(0.0..=STREAK_WIDTH).contains(&u) {
        return false;
    }

    // Rounded corners, evaluated in the unsheared frame.
    let r = CORNER_RADIUS.min(STREAK_WIDTH / 2.0).min(h / 2.0);
    let cu = u.clamp(r, STREAK_WIDTH - r);
    let cv = v.clamp(r, h - r);
    (u - cu).powi(2) + (v - cv).powi(2) <= r * r
}

pub(crate) fn streak_bounds(x: f64, y: f64, h: f64) -> Bounds {
    Bounds {
        min_x: x - SHOWER_ANGLE * h,
        min_y: y,
        max_x: x + STREAK_WIDTH,
        max_y: y + h,
    }
}

pub(crate) fn circle_contains(cx: f64, cy: f64, r: f64, px: f64, py: f64) -> bool {
    (px - cx).powi(2) + (py - cy).powi(2) <= r * r
}

pub(crate) fn circle_bounds(cx: f64, cy: f64, r: f64) -> Bounds {
    Bounds {
        min_x: cx - r,
        min_y: cy - r,
        max_x: cx + r,
        max_y: cy + r,
    }
}

/// A meteorite ready to be painted on a canvas.
///
/// Canvas coordinates grow upward, so every sample is flipped against
/// `canvas_height`.
pub(crate) struct MeteoriteSprite<'a> {
    pub meteorite: &'a Meteorite,
    pub color: Color,
    pub canvas_height: f64,
}

impl Shape for MeteoriteSprite<'_> {
    fn draw(&self, painter: &mut Painter) {
        let bounds = self.meteorite.bounds();
        let mut py = bounds.min_y;
        while py <= bounds.max_y {
            let mut px = bounds.min_x;
            while px <= bounds.max_x {
                if self.meteorite.contains(px, py)
                    && let Some((cx, cy)) = painter.get_point(px, self.canvas_height - py)
                {
                    painter.paint(cx, cy, self.color);
                }
                px += SAMPLE_STEP;
            }
            py += SAMPLE_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_contains_its_spine() {
        let (x, y, h) = (100.0, 50.0, 30.0);
        let skew = SHOWER_ANGLE * h;
        for step in 1..10 {
            let v = h * step as f64 / 10.0;
            let centre = x - skew * v / h + STREAK_WIDTH / 2.0;
            assert!(streak_contains(x, y, h, centre, y + v), "row {v}");
        }
    }

    #[test]
    fn streak_leans_left_toward_the_bottom() {
        let (x, y, h) = (100.0, 0.0, 40.0);
        // Top-right area is inside, the same column near the bottom is not.
        assert!(streak_contains(x, y, h, x + 6.0, y + 1.0));
        assert!(!streak_contains(x, y, h, x + 6.0, y + h - 1.0));
        // Bottom end is shifted by the skew.
        let bottom_centre = x - SHOWER_ANGLE * h + STREAK_WIDTH / 2.0;
        assert!(streak_contains(x, y, h, bottom_centre, y + h - 1.0));
    }

    #[test]
    fn streak_corners_are_rounded() {
        let (x, y, h) = (0.0, 0.0, 40.0);
        // The exact top-left corner of the unrounded shape is cut away.
        assert!(!streak_contains(x, y, h, x, y));
        assert!(!streak_contains(x, y, h, x + STREAK_WIDTH, y));
        assert!(streak_contains(x, y, h, x + STREAK_WIDTH / 2.0, y));
    }

    #[test]
    fn streak_rejects_points_outside_rows() {
        assert!(!streak_contains(0.0, 0.0, 20.0, 5.0, -0.1));
        assert!(!streak_contains(0.0, 0.0, 20.0, 5.0, 20.1));
        assert!(!streak_contains(0.0, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn streak_bounds_cover_skew() {
        let b = streak_bounds(100.0, 10.0, 35.0);
        assert!((b.min_x - (100.0 - SHOWER_ANGLE * 35.0)).abs() < 1e-9);
        assert_eq!((b.min_y, b.max_x, b.max_y), (10.0, 110.0, 45.0));
    }

    #[test]
    fn circle_contains_disc() {
        assert!(circle_contains(10.0, 10.0, 5.0, 10.0, 10.0));
        assert!(circle_contains(10.0, 10.0, 5.0, 13.0, 14.0));
        assert!(!circle_contains(10.0, 10.0, 5.0, 14.0, 14.0));
        let b = circle_bounds(10.0, 10.0, 5.0);
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (5.0, 5.0, 15.0, 15.0));
    }
}
