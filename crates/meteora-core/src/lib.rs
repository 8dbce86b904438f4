//! Core types shared by the meteora crates.

mod color;
mod speed;
mod viewport;

pub use color::{ParseRgbError, Rgb};
pub use speed::AnimationSpeed;
pub use viewport::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Viewport};
