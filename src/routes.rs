//! Client-side route table. Every route is a static page mount.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Downloads,
    Privacy,
    Terms,
    Cookies,
    Security,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Downloads,
        Route::Privacy,
        Route::Terms,
        Route::Cookies,
        Route::Security,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Downloads => "/downloads",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::Cookies => "/cookies",
            Route::Security => "/security",
        }
    }

    /// Resolve a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
