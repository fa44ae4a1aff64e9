//! The site's pages and the paths that reach them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Gallery,
    AlgorithmSculpting,
    Oklch,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Gallery,
        Route::AlgorithmSculpting,
        Route::Oklch,
    ];

    /// Map a site path onto a page. Unknown paths land on the home page.
    pub fn from_path(path: &str) -> Self {
        let normalized = path.trim().trim_end_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "" => Route::Home,
            "/gallery" | "gallery" => Route::Gallery,
            "/algorithm-sculpting" | "algorithm-sculpting" => Route::AlgorithmSculpting,
            "/oklch" | "oklch" => Route::Oklch,
            other => {
                tracing::debug!(path = other, "Unknown path, redirecting home");
                Route::Home
            }
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/gallery",
            Route::AlgorithmSculpting => "/algorithm-sculpting",
            Route::Oklch => "/oklch",
        }
    }

    /// Text shown after the site title in the header.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "my vomit journal",
            Route::Gallery => "🖼️",
            Route::AlgorithmSculpting => "algorithm sculpting",
            Route::Oklch => "oklch",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn tolerates_trailing_slash_and_case() {
        assert_eq!(Route::from_path("/Gallery/"), Route::Gallery);
        assert_eq!(Route::from_path(" oklch "), Route::Oklch);
    }

    #[test]
    fn unknown_paths_go_home() {
        assert_eq!(Route::from_path("/nope"), Route::Home);
        assert_eq!(Route::from_path("/gallery/extra"), Route::Home);
    }
}
