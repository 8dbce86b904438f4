//! Meteorite shower state.

use meteora_core::{Rgb, Viewport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::meteorite::Meteorite;

/// Opacity every meteorite is painted with.
pub const GLOBAL_ALPHA: f32 = 0.3;

/// Tunables for a shower.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowerSettings {
    /// Canvas width below which the animation stops after the current frame.
    pub min_width_px: f64,
    /// One meteorite per this many pixels of initial canvas width.
    pub meteorite_spacing_px: f64,
    /// Colours picked uniformly for each meteorite.
    pub palette: Vec<Rgb>,
}

impl Default for ShowerSettings {
    fn default() -> Self {
        Self {
            min_width_px: 800.0,
            meteorite_spacing_px: 25.0,
            palette: vec![Rgb::new(0x6e, 0xce, 0xb2), Rgb::new(0x27, 0x23, 0x61)],
        }
    }
}

/// Result of running one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Another frame should be scheduled.
    Continue,
    /// The canvas is too narrow; the loop has stopped.
    Stopped,
}

/// A running (or paused) meteorite shower bound to one canvas.
#[derive(Debug)]
pub struct MeteoriteShower {
    meteorites: Vec<Meteorite>,
    viewport: Viewport,
    settings: ShowerSettings,
    rng: StdRng,
    should_animate: bool,
    animating: bool,
    frames: u64,
}

impl MeteoriteShower {
    /// Create a shower on a canvas container.
    ///
    /// Returns `None` when there is no container to draw into. The
    /// population size is derived from the container width once and kept
    /// for the lifetime of the shower. The new shower is not animating yet:
    /// the caller schedules the first frame.
    pub fn create(
        container: Option<Viewport>,
        settings: ShowerSettings,
        seed: Option<u64>,
    ) -> Option<Self> {
        let viewport = container?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };

        let count = meteorite_count(viewport.width, settings.meteorite_spacing_px);
        let meteorites = (0..count)
            .map(|_| Meteorite::spawn(&mut rng, viewport, &settings.palette))
            .collect();

        let mut shower = Self {
            meteorites,
            viewport,
            settings,
            rng,
            should_animate: false,
            animating: false,
            frames: 0,
        };
        shower.resize(viewport);
        tracing::debug!(
            count,
            width = viewport.width,
            height = viewport.height,
            should_animate = shower.should_animate,
            "meteorite shower created"
        );
        Some(shower)
    }

    /// Track new canvas dimensions.
    ///
    /// Returns `true` when the loop is idle and a frame must be scheduled to
    /// pick the new size up.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        self.should_animate = viewport.width >= self.settings.min_width_px;
        !self.animating
    }

    /// Advance every meteorite by one frame.
    pub fn frame(&mut self) -> FrameOutcome {
        self.animating = true;
        self.frames += 1;

        let height = self.viewport.height;
        for meteorite in &mut self.meteorites {
            meteorite.advance();
            if meteorite.is_out_of_bounds(height) {
                meteorite.reset(&mut self.rng, self.viewport, &self.settings.palette);
            }
        }

        if self.should_animate {
            FrameOutcome::Continue
        } else {
            self.animating = false;
            FrameOutcome::Stopped
        }
    }

    pub fn meteorites(&self) -> &[Meteorite] {
        &self.meteorites
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the frame loop is currently running.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether the canvas is wide enough to keep animating.
    pub fn should_animate(&self) -> bool {
        self.should_animate
    }

    /// Frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn meteorite_count(width: f64, spacing: f64) -> usize {
    if spacing <= 0.0 || !width.is_finite() || width <= 0.0 {
        return 0;
    }
    (width / spacing).round() as usize
}
