use axum::{routing::get, Json, Router};

use crate::catalog::dto::Catalog;
use crate::state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/catalog", get(catalog))
}

/// Fixed content for now; no store behind it.
pub async fn catalog() -> Json<Catalog> {
    Json(Catalog {
        tabs: vec!["Courses", "Tracks", "Community", "Questions", "Articles"],
        levels: vec!["Beginner", "Intermediate", "Advanced"],
        categories: vec!["Health", "Management", "Programming"],
    })
}
