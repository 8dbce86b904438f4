//! Meteorite shower animation for the meteora hero section.
//!
//! The shower is a fixed population of slanted streaks and discs drifting
//! down and to the left across the hero. Meteorites that leave the canvas
//! re-enter above the top edge. The simulation runs in virtual pixels
//! (see [`meteora_core::Viewport`]) and is painted onto a braille
//! [`ratatui::widgets::canvas::Canvas`].
//!
//! Frames are not driven by a timer of their own: [`FrameScheduler`] tells
//! the host event loop when the next frame is due, and [`MeteoriteShower::frame`]
//! reports whether another one should follow.

mod meteorite;
mod scheduler;
mod shape;
mod shower;
mod widget;

pub use meteorite::{Meteorite, MeteoriteShape};
pub use scheduler::FrameScheduler;
pub use shape::{Bounds, SHOWER_ANGLE, STREAK_WIDTH};
pub use shower::{FrameOutcome, GLOBAL_ALPHA, MeteoriteShower, ShowerSettings};
pub use widget::ShowerWidget;
