//! A single meteorite particle.

use meteora_core::{Rgb, Viewport};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::shape::{self, Bounds};

/// Horizontal velocity in pixels per frame.
const VELOCITY_X: f64 = -1.5;
/// Vertical velocity in pixels per frame.
const VELOCITY_Y: f64 = 1.5;

/// Used only if the palette is empty.
const FALLBACK_COLOUR: Rgb = Rgb::new(0x6e, 0xce, 0xb2);

/// Outline drawn for a meteorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeteoriteShape {
    /// Slanted bar with rounded ends.
    Streak,
    /// Filled disc.
    Circle,
}

/// State for a single meteorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Meteorite {
    /// Left edge of the streak top, or disc centre.
    pub x: f64,
    /// Top of the streak, or disc centre.
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Size: streak height, or 1.8 times the disc radius.
    pub h: f64,
    pub colour: Rgb,
    pub shape: MeteoriteShape,
}

impl Meteorite {
    /// Spawn a meteorite anywhere over an area 1.5 times the viewport.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, palette: &[Rgb]) -> Self {
        let h = 25.0 + rng.random::<f64>() * 25.0;
        let x = rng.random::<f64>() * viewport.width * 1.5;
        let y = rng.random::<f64>() * viewport.height * 1.5;
        Self {
            x,
            y,
            vx: VELOCITY_X,
            vy: VELOCITY_Y,
            h,
            colour: pick_colour(rng, palette),
            shape: pick_shape(rng, 0.35),
        }
    }

    /// Re-enter above the top edge with a fresh size, colour and shape.
    ///
    /// Velocity is left untouched.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, palette: &[Rgb]) {
        self.x = rng.random::<f64>() * viewport.width * 1.5;
        self.y = -(rng.random::<f64>() * viewport.height);
        self.h = 20.0 + rng.random::<f64>() * 25.0;
        self.colour = pick_colour(rng, palette);
        self.shape = pick_shape(rng, 0.15);
    }

    /// Move by one frame of velocity.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Whether the meteorite has drifted past the left or bottom edge.
    pub fn is_out_of_bounds(&self, canvas_height: f64) -> bool {
        self.x < -self.h || self.y > canvas_height + self.h
    }

    /// Disc radius when drawn as a circle.
    pub fn radius(&self) -> f64 {
        self.h / 1.8
    }

    /// Whether the point `(px, py)` lies inside the drawn outline.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match self.shape {
            MeteoriteShape::Streak => shape::streak_contains(self.x, self.y, self.h, px, py),
            MeteoriteShape::Circle => {
                shape::circle_contains(self.x, self.y, self.radius(), px, py)
            }
        }
    }

    /// Axis-aligned box enclosing the drawn outline.
    pub fn bounds(&self) -> Bounds {
        match self.shape {
            MeteoriteShape::Streak => shape::streak_bounds(self.x, self.y, self.h),
            MeteoriteShape::Circle => shape::circle_bounds(self.x, self.y, self.radius()),
        }
    }
}

fn pick_colour<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette.choose(rng).copied().unwrap_or(FALLBACK_COLOUR)
}

fn pick_shape<R: Rng + ?Sized>(rng: &mut R, circle_probability: f64) -> MeteoriteShape {
    if rng.random_bool(circle_probability) {
        MeteoriteShape::Circle
    } else {
        MeteoriteShape::Streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PALETTE: [Rgb; 2] = [Rgb::new(0x6e, 0xce, 0xb2), Rgb::new(0x27, 0x23, 0x61)];

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 600.0)
    }

    #[test]
    fn spawn_stays_in_extended_area() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let m = Meteorite::spawn(&mut rng, viewport(), &PALETTE);
            assert!((25.0..50.0).contains(&m.h));
            assert!((0.0..1500.0).contains(&m.x));
            assert!((0.0..900.0).contains(&m.y));
            assert_eq!((m.vx, m.vy), (VELOCITY_X, VELOCITY_Y));
            assert!(PALETTE.contains(&m.colour));
        }
    }

    #[test]
    fn reset_places_meteorite_above_canvas() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut m = Meteorite::spawn(&mut rng, viewport(), &PALETTE);
        for _ in 0..500 {
            m.reset(&mut rng, viewport(), &PALETTE);
            assert!(m.y <= 0.0 && m.y > -600.0);
            assert!((20.0..45.0).contains(&m.h));
            assert!((0.0..1500.0).contains(&m.x));
        }
    }

    #[test]
    fn circles_are_rarer_after_reset() {
        let mut rng = StdRng::seed_from_u64(3);
        let spawned = (0..4000)
            .map(|_| Meteorite::spawn(&mut rng, viewport(), &PALETTE))
            .filter(|m| m.shape == MeteoriteShape::Circle)
            .count();
        let mut m = Meteorite::spawn(&mut rng, viewport(), &PALETTE);
        let reset = (0..4000)
            .filter(|_| {
                m.reset(&mut rng, viewport(), &PALETTE);
                m.shape == MeteoriteShape::Circle
            })
            .count();
        // 35% vs 15% of 4000 draws.
        assert!((1200..1600).contains(&spawned), "spawned circles: {spawned}");
        assert!((450..750).contains(&reset), "reset circles: {reset}");
    }

    #[test]
    fn advance_moves_down_and_left() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut m = Meteorite::spawn(&mut rng, viewport(), &PALETTE);
        let (x, y) = (m.x, m.y);
        m.advance();
        assert_eq!(m.x, x - 1.5);
        assert_eq!(m.y, y + 1.5);
    }

    #[test]
    fn out_of_bounds_uses_size_margin() {
        let mut m = Meteorite {
            x: 10.0,
            y: 10.0,
            vx: VELOCITY_X,
            vy: VELOCITY_Y,
            h: 30.0,
            colour: PALETTE[0],
            shape: MeteoriteShape::Streak,
        };
        assert!(!m.is_out_of_bounds(600.0));
        m.x = -29.0;
        assert!(!m.is_out_of_bounds(600.0));
        m.x = -31.0;
        assert!(m.is_out_of_bounds(600.0));
        m.x = 10.0;
        m.y = 630.0;
        assert!(!m.is_out_of_bounds(600.0));
        m.y = 631.0;
        assert!(m.is_out_of_bounds(600.0));
    }

    #[test]
    fn circle_radius_is_size_over_one_point_eight() {
        let m = Meteorite {
            x: 100.0,
            y: 100.0,
            vx: VELOCITY_X,
            vy: VELOCITY_Y,
            h: 36.0,
            colour: PALETTE[0],
            shape: MeteoriteShape::Circle,
        };
        assert!((m.radius() - 20.0).abs() < 1e-9);
        let bounds = m.bounds();
        assert!((bounds.max_x - bounds.min_x - 2.0 * 36.0 / 1.8).abs() < 1e-9);
        assert!((bounds.max_y - bounds.min_y - 40.0).abs() < 1e-9);
        assert!(m.contains(119.0, 100.0));
        assert!(!m.contains(121.0, 100.0));
    }

    #[test]
    fn empty_palette_falls_back() {
        let mut rng = StdRng::seed_from_u64(5);
        let m = Meteorite::spawn(&mut rng, viewport(), &[]);
        assert_eq!(m.colour, FALLBACK_COLOUR);
    }
}
