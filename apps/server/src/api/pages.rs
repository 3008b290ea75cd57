use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Front-end pages and their assets, served straight from `static_dir`.
pub fn router<S>(static_dir: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let dir = Path::new(static_dir);
    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .route_service("/table", ServeFile::new(dir.join("table.html")))
        .route_service("/dashboard", ServeFile::new(dir.join("dashboard.html")))
        .nest_service("/static", ServeDir::new(dir))
}
