//! Cinema showing and seat-reservation REST API.
//!
//! Showings live in an in-memory store for the lifetime of the process;
//! the domain service enforces the seat-capacity invariant and the
//! transport layer maps domain errors to `application/problem+json`.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use controllers::{home_controller, movie_controller::*};
use service::MovieService;

/// Builds the application router over a shared service instance.
pub fn create_app(service: Arc<MovieService>) -> Router {
    Router::new()
        .route("/", get(home_controller::index))
        .route("/api/cinema", get(get_movies))
        .route("/api/cinema", post(add_movie))
        .route("/api/cinema", delete(delete_all))
        .route("/api/cinema/{id}", get(get_movie_by_id))
        .route("/api/cinema/{id}", put(update_start_time))
        .route("/api/cinema/{id}/reserve", post(reserve_seats))
        .with_state(service)
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
