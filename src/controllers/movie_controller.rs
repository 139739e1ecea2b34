use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::error::CinemaError;
use crate::models::movie_model::{
    CreateMovieRequest, Movie, ReserveSeatsRequest, UpdateDateRequest,
};
use crate::service::MovieService;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
}

pub async fn get_movies(
    State(service): State<Arc<MovieService>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Movie>> {
    Json(service.list_movies(params.title.as_deref()))
}

pub async fn get_movie_by_id(
    State(service): State<Arc<MovieService>>,
    Path(id): Path<u64>,
) -> Result<Json<Movie>, CinemaError> {
    Ok(Json(service.get_movie(id)?))
}

pub async fn add_movie(
    State(service): State<Arc<MovieService>>,
    Json(request): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<Movie>), CinemaError> {
    let command = request.validate().map_err(CinemaError::Validation)?;
    let movie = service.create_movie(command)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn reserve_seats(
    State(service): State<Arc<MovieService>>,
    Path(id): Path<u64>,
    Json(request): Json<ReserveSeatsRequest>,
) -> Result<(StatusCode, Json<Movie>), CinemaError> {
    let seats = request.validate().map_err(CinemaError::Validation)?;
    let movie = service.reserve_seats(id, seats)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_start_time(
    State(service): State<Arc<MovieService>>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateDateRequest>,
) -> Result<(StatusCode, Json<Movie>), CinemaError> {
    let date = request.validate().map_err(CinemaError::Validation)?;
    let movie = service.reschedule_movie(id, date)?;
    Ok((StatusCode::ACCEPTED, Json(movie)))
}

pub async fn delete_all(State(service): State<Arc<MovieService>>) -> StatusCode {
    service.delete_all();
    StatusCode::NO_CONTENT
}
