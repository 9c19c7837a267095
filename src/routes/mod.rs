use std::sync::Arc;

use arcalab_blog::ContentStore;
use arcalab_notification::Notifier;
use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod blog;
mod booking;
mod contact;
mod health;
mod index;
mod playground;
mod products;

/// Shared, read-only data. View state never lives here; it travels with each
/// request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub content: Arc<ContentStore>,
    pub notifier: Arc<dyn Notifier>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/products", get(products::page))
        .route("/products/key", post(products::key))
        .route("/about", get(about::page))
        .route("/blog", get(blog::index))
        .route("/blog/{slug}", get(blog::post))
        .route("/contact", get(contact::page))
        .route("/contact/booking", post(booking::action))
        .route("/contact/message", post(contact::message))
        .route("/playground", get(playground::page).post(playground::action))
        .route("/playground/reset", post(playground::reset))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
