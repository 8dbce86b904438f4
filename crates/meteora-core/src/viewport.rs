//! Canvas dimensions in virtual pixels.

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH_PX: f64 = 10.0;

/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT_PX: f64 = 20.0;

/// Size of a drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport covering `cols` x `rows` terminal cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f64 * CELL_WIDTH_PX,
            height: rows as f64 * CELL_HEIGHT_PX,
        }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_columns_is_eight_hundred_pixels() {
        let vp = Viewport::from_cells(80, 24);
        assert_eq!(vp.width, 800.0);
        assert_eq!(vp.height, 480.0);
        assert!(!vp.is_empty());
    }

    #[test]
    fn zero_sized_viewport_is_empty() {
        assert!(Viewport::from_cells(0, 10).is_empty());
        assert!(Viewport::default().is_empty());
    }
}
