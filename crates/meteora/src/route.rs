//! Page routes.

/// A page the app can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Documentation,
}

impl Route {
    /// URL-style path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Documentation => "/documentation",
        }
    }

    /// Resolve a path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/documentation" => Some(Route::Documentation),
            _ => None,
        }
    }
}
