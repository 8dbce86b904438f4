//! Ratatui widget drawing a shower onto a braille canvas.

use meteora_core::{CELL_HEIGHT_PX, Rgb};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{Widget, canvas::Canvas},
};

use crate::shape::MeteoriteSprite;
use crate::shower::{GLOBAL_ALPHA, MeteoriteShower};

/// Draws the part of a shower that is still on screen.
///
/// The shower canvas spans the whole hero; when the page is scrolled the
/// top `visible_top_px` pixels are off screen and `area` covers the rest.
#[derive(Debug, Clone, Copy)]
pub struct ShowerWidget<'a> {
    shower: &'a MeteoriteShower,
    background: Rgb,
    visible_top_px: f64,
}

impl<'a> ShowerWidget<'a> {
    pub fn new(shower: &'a MeteoriteShower, background: Rgb) -> Self {
        Self {
            shower,
            background,
            visible_top_px: 0.0,
        }
    }

    /// Hide the first `rows` terminal rows of the canvas.
    pub fn scrolled_rows(mut self, rows: u16) -> Self {
        self.visible_top_px = rows as f64 * CELL_HEIGHT_PX;
        self
    }
}

impl Widget for ShowerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.shower.viewport();
        if area.is_empty() || viewport.is_empty() {
            return;
        }
        let visible_top = self.visible_top_px.clamp(0.0, viewport.height);
        if visible_top >= viewport.height {
            return;
        }
        let colors: Vec<Color> = self
            .shower
            .meteorites()
            .iter()
            .map(|m| m.colour.blend(self.background, GLOBAL_ALPHA).into())
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.background.into())
            .x_bounds([0.0, viewport.width])
            .y_bounds([0.0, viewport.height - visible_top])
            .paint(|ctx| {
                for (meteorite, color) in self.shower.meteorites().iter().zip(&colors) {
                    ctx.draw(&MeteoriteSprite {
                        meteorite,
                        color: *color,
                        canvas_height: viewport.height,
                    });
                }
            })
            .render(area, buf);
    }
}
