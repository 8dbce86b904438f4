//! The documentation page.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::route::Route;

/// Static documentation with its own scroll position.
#[derive(Debug, Default)]
pub struct DocsView {
    scroll: u16,
}

impl DocsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used when the page is entered.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handle a key press; returns a route to navigate to.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Route> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => {
                return Some(Route::Home);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        None
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = lines(Color::Reset).len().saturating_sub(1) as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    /// Renders the page.
    pub fn render(&self, frame: &mut Frame, accent: Color) {
        let block = Block::bordered()
            .title(Line::from(" Documentation ").bold().fg(accent))
            .title_bottom(Line::from(" b back  q quit ").dark_gray().right_aligned());
        let docs = Paragraph::new(lines(accent))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(docs, frame.area());
    }
}

fn lines(accent: Color) -> Vec<Line<'static>> {
    let heading = |text: &'static str| Line::from(text).bold().fg(accent);
    let key = |keys: &'static str, what: &'static str| {
        Line::from(vec![Span::from(format!("  {keys:<10}")).bold().fg(accent), what.into()])
    };
    vec![
        heading("Keys"),
        key("j / ↓", "scroll down"),
        key("k / ↑", "scroll up"),
        key("space", "page down"),
        key("g / G", "top / bottom of the page"),
        key("d / ↵", "open this page"),
        key("s", "cycle animation speed (saved)"),
        key("r", "reload the config file"),
        key("b / esc", "back to the home page"),
        key("q", "quit"),
        Line::default(),
        heading("Configuration"),
        Line::from("config.toml in the platform config directory, or the file named by"),
        Line::from("METEORA_CONFIG. Every field is optional:"),
        Line::default(),
        Line::from("  speed = \"medium\"             # slow, medium or fast").dark_gray(),
        Line::from("  min_width_px = 800.0         # 10 px per column").dark_gray(),
        Line::from("  meteorite_spacing_px = 25.0  # one meteorite per 25 px").dark_gray(),
        Line::from("  palette = [\"#6eceb2\", \"#272361\"]").dark_gray(),
        Line::from("  background = \"#0d0c1d\"").dark_gray(),
        Line::from("  title = \"meteora\"").dark_gray(),
        Line::from("  tagline = \"...\"").dark_gray(),
        Line::from("  seed = 42                    # same shower every time").dark_gray(),
        Line::default(),
        heading("Logs"),
        Line::from("Written to meteora/logs/meteora.log in the local data directory."),
        Line::from("Set METEORA_LOG=meteora=debug for frame-level detail."),
    ]
}
