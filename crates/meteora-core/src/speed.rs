//! Animation speed presets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Target frame rate for the shower animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Frames per second for this preset.
    pub fn frames_per_second(self) -> u32 {
        match self {
            AnimationSpeed::Slow => 30,
            AnimationSpeed::Medium => 60,
            AnimationSpeed::Fast => 90,
        }
    }

    /// Time between two animation frames.
    pub fn frame_interval(self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second()
    }

    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Short label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}
