//! The home page: meteorite shower hero, nav bar and page body.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use meteora_config::Config;
use meteora_core::{Rgb, Viewport};
use meteora_shower::{
    FrameOutcome, FrameScheduler, MeteoriteShower, ShowerSettings, ShowerWidget,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect, Size},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::route::Route;

/// Height of the nav bar in rows.
pub const NAV_HEIGHT: u16 = 3;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

const DOCS_LABEL: &str = "Documentation";

/// Data handed to the home page from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeProps {
    pub title: String,
    pub tagline: String,
}

impl From<&Config> for HomeProps {
    fn from(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
        }
    }
}

/// Home page state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Nav bar pinned to the top of the screen instead of the hero bottom.
    pub nav_fixed: bool,
    pub props: HomeProps,
}

/// State transitions of the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    ReceiveProps(HomeProps),
    FixNav,
    UnfixNav,
}

/// Apply an action to the home state.
pub fn reduce(state: HomeState, action: HomeAction) -> HomeState {
    match action {
        HomeAction::ReceiveProps(props) => HomeState { props, ..state },
        HomeAction::FixNav => HomeState {
            nav_fixed: true,
            ..state
        },
        HomeAction::UnfixNav => HomeState {
            nav_fixed: false,
            ..state
        },
    }
}

/// Decide whether scrolling to `scroll_top` flips the nav bar.
pub fn nav_action(scroll_top: u16, canvas_bottom: u16, nav_fixed: bool) -> Option<HomeAction> {
    if scroll_top >= canvas_bottom && !nav_fixed {
        Some(HomeAction::FixNav)
    } else if scroll_top < canvas_bottom && nav_fixed {
        Some(HomeAction::UnfixNav)
    } else {
        None
    }
}

/// Shower settings derived from the user config.
pub fn shower_settings(config: &Config) -> ShowerSettings {
    ShowerSettings {
        min_width_px: config.min_width_px,
        meteorite_spacing_px: config.meteorite_spacing_px,
        palette: config.palette.clone(),
    }
}

/// The mounted (or unmounted) home page.
#[derive(Debug)]
pub struct HomeView {
    state: HomeState,
    settings: ShowerSettings,
    background: Rgb,
    seed: Option<u64>,
    shower: Option<MeteoriteShower>,
    scheduler: FrameScheduler,
    size: Size,
    scroll: u16,
    mounted: bool,
    /// Screen area of the docs link from the last render.
    docs_link: Option<Rect>,
}

impl HomeView {
    pub fn new(config: &Config) -> Self {
        Self {
            state: reduce(
                HomeState::default(),
                HomeAction::ReceiveProps(HomeProps::from(config)),
            ),
            settings: shower_settings(config),
            background: config.background,
            seed: config.seed,
            shower: None,
            scheduler: FrameScheduler::new(config.speed.frame_interval()),
            size: Size::default(),
            scroll: 0,
            mounted: false,
            docs_link: None,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn shower(&self) -> Option<&MeteoriteShower> {
        self.shower.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether an animation frame is waiting to run.
    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Show the page on a terminal of the given size and start the shower.
    pub fn mount(&mut self, size: Size, now: Instant) {
        self.size = size;
        self.scroll = 0;
        self.mounted = true;
        self.state.nav_fixed = false;
        self.create_shower(now);
        self.on_scroll(now);
        tracing::info!(
            width = size.width,
            height = size.height,
            "home mounted"
        );
    }

    /// Tear the page down and stop the animation loop.
    pub fn unmount(&mut self) {
        self.shower = None;
        self.scheduler.cancel();
        self.mounted = false;
        self.docs_link = None;
        tracing::info!("home unmounted");
    }

    /// Pick up a new config: props, palette and speed.
    pub fn apply_config(&mut self, config: &Config, now: Instant) {
        self.settings = shower_settings(config);
        self.background = config.background;
        self.seed = config.seed;
        self.set_speed(config.speed.frame_interval());
        self.dispatch(HomeAction::ReceiveProps(HomeProps::from(config)), now);
        if self.mounted {
            self.create_shower(now);
        }
    }

    /// Change the time between animation frames.
    pub fn set_speed(&mut self, interval: Duration) {
        self.scheduler.set_interval(interval);
    }

    /// Follow a terminal resize.
    pub fn resize(&mut self, size: Size, now: Instant) {
        self.size = size;
        self.scroll = self.scroll.min(self.max_scroll());
        if !self.mounted {
            return;
        }
        if let Some(viewport) = self.hero_viewport() {
            match self.shower.as_mut() {
                Some(shower) => {
                    if shower.resize(viewport) {
                        self.scheduler.request(now);
                    }
                    tracing::debug!(
                        width = viewport.width,
                        should_animate = shower.should_animate(),
                        "shower resized"
                    );
                }
                None => self.create_shower(now),
            }
        }
        self.on_scroll(now);
    }

    /// Run the animation frame if one is due.
    pub fn tick(&mut self, now: Instant) {
        if !self.scheduler.take(now) {
            return;
        }
        if let Some(shower) = self.shower.as_mut() {
            match shower.frame() {
                FrameOutcome::Continue => self.scheduler.request(now),
                FrameOutcome::Stopped => tracing::debug!("shower stopped, canvas too narrow"),
            }
        }
    }

    /// How long the event loop may wait before the next frame.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.scheduler.timeout(now, idle)
    }

    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_to(target, now);
    }

    pub fn scroll_to(&mut self, row: u16, now: Instant) {
        let row = row.min(self.max_scroll());
        if row != self.scroll {
            self.scroll = row;
            self.on_scroll(now);
        }
    }

    /// Apply an action and run the update hook.
    pub fn dispatch(&mut self, action: HomeAction, now: Instant) {
        let prev = self.state.clone();
        tracing::debug!(?action, "home action");
        self.state = reduce(prev.clone(), action);
        self.did_update(&prev, now);
    }

    /// Handle a key press; returns a route to navigate to.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Option<Route> {
        let page = self.size.height.saturating_sub(NAV_HEIGHT).max(1) as i32;
        match key.code {
            KeyCode::Char('d') | KeyCode::Enter => return Some(Route::Documentation),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1, now),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1, now),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page, now),
            KeyCode::PageUp => self.scroll_by(-page, now),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0, now),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to(self.max_scroll(), now),
            _ => {}
        }
        None
    }

    /// Handle a mouse event; clicking the docs link returns its route.
    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<Route> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP, now),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP, now),
            MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                if self.docs_link.is_some_and(|link| link.contains(at)) {
                    return Some(Route::Documentation);
                }
            }
            _ => {}
        }
        None
    }

    /// Re-create the shower once the hero comes back into view.
    fn did_update(&mut self, prev: &HomeState, now: Instant) {
        if prev.nav_fixed && !self.state.nav_fixed && self.mounted {
            tracing::debug!("nav unfixed, restarting shower");
            self.create_shower(now);
        }
    }

    fn on_scroll(&mut self, now: Instant) {
        if let Some(action) = nav_action(self.scroll, self.canvas_bottom(), self.state.nav_fixed) {
            self.dispatch(action, now);
        }
    }

    /// Replace the shower with a fresh one on the hero.
    fn create_shower(&mut self, now: Instant) {
        self.shower =
            MeteoriteShower::create(self.hero_viewport(), self.settings.clone(), self.seed);
        if self.shower.is_some() {
            self.scheduler.request(now);
        }
    }

    fn hero_rows(&self) -> u16 {
        self.size.height
    }

    /// Scroll offset at which the nav bar reaches the top of the screen.
    fn canvas_bottom(&self) -> u16 {
        self.hero_rows().saturating_sub(NAV_HEIGHT)
    }

    /// The hero canvas, or `None` while the terminal has no area.
    fn hero_viewport(&self) -> Option<Viewport> {
        if self.size.width == 0 || self.size.height == 0 {
            return None;
        }
        Some(Viewport::from_cells(self.size.width, self.hero_rows()))
    }

    fn body_rows(&self) -> u16 {
        (body_lines(&self.state.props, self.accent()).len() as u16).max(self.size.height)
    }

    fn max_scroll(&self) -> u16 {
        (self.hero_rows() + self.body_rows()).saturating_sub(self.size.height)
    }

    fn accent(&self) -> Color {
        self.settings
            .palette
            .first()
            .copied()
            .map(Color::from)
            .unwrap_or(Color::Cyan)
    }

    /// Screen row of a page row, if it is on screen.
    fn screen_row(&self, area: Rect, page_row: u16) -> Option<u16> {
        let row = page_row.checked_sub(self.scroll)?;
        (row < area.height).then_some(area.y + row)
    }

    /// Renders the page.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let hero = self.hero_rows();
        let accent = self.accent();

        if self.scroll < hero {
            let visible = (hero - self.scroll).min(area.height);
            let hero_area = Rect::new(area.x, area.y, area.width, visible);
            match &self.shower {
                Some(shower) => frame.render_widget(
                    ShowerWidget::new(shower, self.background).scrolled_rows(self.scroll),
                    hero_area,
                ),
                None => frame.render_widget(
                    Block::new().style(Style::new().bg(self.background.into())),
                    hero_area,
                ),
            }
            self.render_hero_text(frame, area, accent);
        }

        let body_top = hero.saturating_sub(self.scroll);
        if body_top < area.height {
            let body_area = Rect::new(
                area.x,
                area.y + body_top,
                area.width,
                area.height - body_top,
            );
            let offset = self.scroll.saturating_sub(hero);
            let body = Paragraph::new(body_lines(&self.state.props, accent)).scroll((offset, 0));
            frame.render_widget(body, body_area);
        }

        self.render_nav(frame, area, accent);
    }

    fn render_hero_text(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let middle = self.canvas_bottom() / 2;
        let rows = [
            (
                middle.saturating_sub(1),
                Line::from(self.state.props.title.clone()).bold().fg(accent),
            ),
            (
                middle + 1,
                Line::from(self.state.props.tagline.clone()).fg(Color::Gray),
            ),
        ];
        for (page_row, line) in rows {
            if let Some(y) = self.screen_row(area, page_row) {
                let text = Paragraph::new(line).alignment(Alignment::Center);
                frame.render_widget(text, Rect::new(area.x, y, area.width, 1));
            }
        }
    }

    fn render_nav(&mut self, frame: &mut Frame, area: Rect, accent: Color) {
        let top = if self.state.nav_fixed {
            Some(area.y)
        } else {
            self.screen_row(area, self.canvas_bottom())
        };
        let Some(top) = top else {
            self.docs_link = None;
            return;
        };
        let height = NAV_HEIGHT.min(area.bottom().saturating_sub(top));
        let nav_area = Rect::new(area.x, top, area.width, height);

        let mut block = Block::new().borders(Borders::TOP | Borders::BOTTOM);
        if self.state.nav_fixed {
            block = block
                .border_style(Style::new().fg(accent))
                .style(Style::new().bg(self.background.into()));
        } else {
            block = block.border_style(Style::new().dark_gray());
        }
        let inner = block.inner(nav_area);
        frame.render_widget(block, nav_area);
        if inner.is_empty() {
            self.docs_link = None;
            return;
        }

        let [brand_area, link_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(DOCS_LABEL.len() as u16 + 2),
        ])
        .areas(inner);
        let brand = Line::from(vec![
            " ☄ ".fg(accent),
            Span::from(self.state.props.title.clone()).bold(),
        ]);
        frame.render_widget(brand, brand_area);
        frame.render_widget(
            Line::from(DOCS_LABEL.underlined().fg(accent)).left_aligned(),
            link_area,
        );
        self.docs_link = Some(Rect::new(
            link_area.x,
            link_area.y,
            (DOCS_LABEL.len() as u16).min(link_area.width),
            1,
        ));
    }
}

/// Page body shown below the hero.
fn body_lines(props: &HomeProps, accent: Color) -> Vec<Line<'static>> {
    let heading = |text: &'static str| Line::from(text).bold().fg(accent);
    let para = |text: String| Line::from(text);
    vec![
        Line::default(),
        heading("  About"),
        para(format!("  {}", props.tagline)),
        para("  Streaks and pebbles fall through the hero in two colours. When".into()),
        para("  the terminal is narrower than the configured width the shower".into()),
        para("  freezes after its current frame and resumes once it is wide again.".into()),
        Line::default(),
        heading("  Navigation"),
        para("  Scroll past the hero and the nav bar pins itself to the top of".into()),
        para("  the screen. Scroll back up and it returns to the hero bottom and".into()),
        para("  the shower starts over.".into()),
        Line::default(),
        heading("  Configuration"),
        para("  Colours, speed, title and the width threshold live in".into()),
        para("  config.toml in the meteora config directory. Press r to reload it.".into()),
        Line::default(),
        heading("  Documentation"),
        para("  Press d or click the Documentation link in the nav bar.".into()),
        Line::default(),
        Line::from(vec![
            "  q".bold().fg(accent),
            " quit  ".dark_gray(),
            "↑↓".bold().fg(accent),
            " scroll  ".dark_gray(),
            "d".bold().fg(accent),
            " docs  ".dark_gray(),
            "s".bold().fg(accent),
            " speed  ".dark_gray(),
            "r".bold().fg(accent),
            " reload".dark_gray(),
        ]),
    ]
}
