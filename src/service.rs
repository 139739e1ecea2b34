use chrono::NaiveDateTime;
use parking_lot::RwLock;

use crate::error::CinemaError;
use crate::models::movie_model::{CreateMovieCommand, Movie};
use crate::repository::MovieStore;

/// Domain operations over the movie store.
///
/// A single lock scopes every lookup-then-mutate sequence, so a
/// reservation's capacity check and decrement cannot interleave with
/// another request on the same movie. No lock is held across an await
/// point; every operation is synchronous and bounded.
#[derive(Debug, Default)]
pub struct MovieService {
    store: RwLock<MovieStore>,
}

impl MovieService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists movies in insertion order, optionally keeping only those whose
    /// title equals the filter, case-insensitively.
    pub fn list_movies(&self, title: Option<&str>) -> Vec<Movie> {
        let filter = title.map(str::to_lowercase);
        self.store
            .read()
            .iter()
            .filter(|m| match &filter {
                Some(wanted) => m.title.to_lowercase() == *wanted,
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn get_movie(&self, id: u64) -> Result<Movie, CinemaError> {
        self.store
            .read()
            .get(id)
            .cloned()
            .ok_or(CinemaError::MovieNotFound(id))
    }

    /// Stores a new showing with a fresh id and all seats free.
    pub fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, CinemaError> {
        // Transport validates first, but non-positive capacity must never
        // reach the store regardless of the caller.
        if command.spaces == 0 {
            return Err(CinemaError::Validation(vec![crate::error::Violation::new(
                "spaces",
                "must be positive",
                serde_json::json!(command.spaces),
            )]));
        }

        let mut store = self.store.write();
        let movie = Movie::new(store.next_id(), command.title, command.date, command.spaces);
        store.insert(movie.clone());
        tracing::info!(id = movie.id, title = %movie.title, spaces = movie.spaces, "movie created");
        Ok(movie)
    }

    /// Consumes seats on a showing. The check and the decrement run under
    /// one write-lock acquisition, so capacity cannot be oversold.
    pub fn reserve_seats(&self, id: u64, seats: u32) -> Result<Movie, CinemaError> {
        let mut store = self.store.write();
        let movie = store.get_mut(id).ok_or(CinemaError::MovieNotFound(id))?;
        movie.reserve(seats)?;
        tracing::debug!(id, seats, free = movie.free_spaces, "seats reserved");
        Ok(movie.clone())
    }

    pub fn reschedule_movie(&self, id: u64, date: NaiveDateTime) -> Result<Movie, CinemaError> {
        let mut store = self.store.write();
        let movie = store.get_mut(id).ok_or(CinemaError::MovieNotFound(id))?;
        movie.reschedule(date);
        Ok(movie.clone())
    }

    /// Removes every showing and rewinds the id sequence.
    pub fn delete_all(&self) {
        let mut store = self.store.write();
        let dropped = store.len();
        store.clear();
        tracing::info!(dropped, "all movies deleted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showtime() -> NaiveDateTime {
        "2024-01-01T20:00:00".parse().unwrap()
    }

    fn create(service: &MovieService, title: &str, spaces: u32) -> Movie {
        service
            .create_movie(CreateMovieCommand {
                title: title.into(),
                date: showtime(),
                spaces,
            })
            .unwrap()
    }

    #[test]
    fn created_movie_has_all_seats_free() {
        let service = MovieService::new();
        let movie = create(&service, "Dune", 10);
        assert_eq!(movie.id, 1);
        assert_eq!(movie.free_spaces, 10);
        assert_eq!(movie.spaces, 10);
    }

    #[test]
    fn create_rejects_zero_capacity() {
        let service = MovieService::new();
        let err = service
            .create_movie(CreateMovieCommand {
                title: "Dune".into(),
                date: showtime(),
                spaces: 0,
            })
            .unwrap_err();
        assert!(matches!(err, CinemaError::Validation(_)));
        assert!(service.list_movies(None).is_empty());
    }

    #[test]
    fn successive_reservations_decrement_exactly() {
        let service = MovieService::new();
        let movie = create(&service, "Dune", 10);
        for seats in [3, 2, 4] {
            service.reserve_seats(movie.id, seats).unwrap();
        }
        assert_eq!(service.get_movie(movie.id).unwrap().free_spaces, 1);
    }

    #[test]
    fn failed_reservation_changes_nothing() {
        let service = MovieService::new();
        let movie = create(&service, "Dune", 10);
        service.reserve_seats(movie.id, 4).unwrap();
        let err = service.reserve_seats(movie.id, 10).unwrap_err();
        assert!(matches!(err, CinemaError::InsufficientCapacity { .. }));
        assert_eq!(service.get_movie(movie.id).unwrap().free_spaces, 6);
    }

    #[test]
    fn unknown_id_fails_and_leaves_collection_unchanged() {
        let service = MovieService::new();
        create(&service, "Dune", 10);
        assert!(matches!(
            service.get_movie(99),
            Err(CinemaError::MovieNotFound(99))
        ));
        assert!(matches!(
            service.reserve_seats(99, 1),
            Err(CinemaError::MovieNotFound(99))
        ));
        assert!(matches!(
            service.reschedule_movie(99, showtime()),
            Err(CinemaError::MovieNotFound(99))
        ));
        assert_eq!(service.list_movies(None).len(), 1);
    }

    #[test]
    fn reschedule_updates_date_in_place() {
        let service = MovieService::new();
        let movie = create(&service, "Dune", 10);
        let later: NaiveDateTime = "2024-01-02T20:00:00".parse().unwrap();
        let updated = service.reschedule_movie(movie.id, later).unwrap();
        assert_eq!(updated.date, later);
        assert_eq!(service.get_movie(movie.id).unwrap().date, later);
    }

    #[test]
    fn delete_all_resets_the_id_sequence() {
        let service = MovieService::new();
        create(&service, "Dune", 10);
        create(&service, "Alien", 5);
        service.delete_all();
        assert!(service.list_movies(None).is_empty());
        let reborn = create(&service, "Dune", 10);
        assert_eq!(reborn.id, 1);
    }

    #[test]
    fn title_filter_is_case_insensitive() {
        let service = MovieService::new();
        create(&service, "Dune", 10);
        create(&service, "Alien", 5);
        create(&service, "dune", 8);

        let filtered = service.list_movies(Some("DUNE"));
        let ids: Vec<_> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let all = service.list_movies(None);
        let ids: Vec<_> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
