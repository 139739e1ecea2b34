use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::movie_model::Movie;

/// In-memory collection of movies keyed by id, plus the id sequence.
///
/// Ids are strictly increasing, so iterating the map yields insertion
/// order. The store owns every `Movie`; callers mutate through `get_mut`
/// and receive clones for anything leaving the service layer.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: BTreeMap<u64, Movie>,
    id_seq: AtomicU64,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next unused id, starting at 1.
    pub fn next_id(&self) -> u64 {
        self.id_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn insert(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    pub fn get(&self, id: u64) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Movie> {
        self.movies.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Drops every movie and rewinds the id sequence to its initial state.
    pub fn clear(&mut self) {
        self.movies.clear();
        self.id_seq.store(0, Ordering::Relaxed);
    }
}
