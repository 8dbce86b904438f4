use std::io::stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::{WrapErr, eyre};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
};
use meteora_config::Config;
use ratatui::{DefaultTerminal, Frame, layout::Size, style::Color};

mod docs;
mod home;
mod logging;
mod route;

use docs::DocsView;
use home::HomeView;
use route::Route;

/// Poll timeout while no animation frame is pending.
const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = logging::init();
    let config = Config::load().wrap_err("failed to load meteora config")?;
    let start = match std::env::args().nth(1) {
        Some(path) => Route::from_path(&path).ok_or_else(|| eyre!("unknown page {path:?}"))?,
        None => Route::Home,
    };

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| App::new(config, start).run(terminal));
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current user configuration.
    config: Config,
    /// Page currently shown.
    route: Route,
    /// Last known terminal size.
    size: Size,
    home: HomeView,
    docs: DocsView,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, route: Route) -> Self {
        Self {
            running: false,
            home: HomeView::new(&config),
            docs: DocsView::new(),
            config,
            route,
            size: Size::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.size = terminal.size()?;
        tracing::info!(route = self.route.path(), "starting");
        if self.route == Route::Home {
            self.home.mount(self.size, Instant::now());
        }

        while self.running {
            if self.route == Route::Home {
                self.home.tick(Instant::now());
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        if self.route == Route::Home {
            self.home.unmount();
        }
        Ok(())
    }

    /// Renders the current page.
    fn render(&mut self, frame: &mut Frame) {
        match self.route {
            Route::Home => self.home.render(frame),
            Route::Documentation => self.docs.render(frame, self.accent()),
        }
    }

    fn accent(&self) -> Color {
        self.config
            .palette
            .first()
            .copied()
            .map(Color::from)
            .unwrap_or(Color::Cyan)
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next animation frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = match self.route {
            Route::Home => self.home.timeout(Instant::now(), IDLE_TIMEOUT),
            Route::Documentation => IDLE_TIMEOUT,
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.on_resize(Size::new(width, height)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Esc) if self.route == Route::Home => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('r')) => self.reload_config(),
            _ => {
                let next = match self.route {
                    Route::Home => self.home.on_key(key, now),
                    Route::Documentation => self.docs.on_key(key),
                };
                if let Some(route) = next {
                    self.navigate(route);
                }
            }
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match self.route {
            Route::Home => {
                if let Some(route) = self.home.on_mouse(mouse, Instant::now()) {
                    self.navigate(route);
                }
            }
            Route::Documentation => self.docs.on_mouse(mouse),
        }
    }

    fn on_resize(&mut self, size: Size) {
        tracing::debug!(width = size.width, height = size.height, "terminal resized");
        self.size = size;
        if self.route == Route::Home {
            self.home.resize(size, Instant::now());
        }
    }

    /// Switch pages, running the home page's mount and unmount hooks.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = self.route.path(), to = route.path(), "route change");
        if self.route == Route::Home {
            self.home.unmount();
        }
        self.route = route;
        match route {
            Route::Home => self.home.mount(self.size, Instant::now()),
            Route::Documentation => self.docs.reset(),
        }
    }

    /// Cycle the animation speed and persist it.
    fn cycle_speed(&mut self) {
        self.config.speed = self.config.speed.next();
        self.home.set_speed(self.config.speed.frame_interval());
        tracing::info!(speed = self.config.speed.label(), "animation speed changed");
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
    }

    /// Re-read the config file and hand it to the home page.
    fn reload_config(&mut self) {
        match Config::load() {
            Ok(config) => {
                self.config = config;
                self.home.apply_config(&self.config, Instant::now());
            }
            Err(e) => tracing::warn!(error = %e, "failed to reload config"),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
