//! Movie store keyed by id

use std::collections::BTreeMap;

use crate::schema::{GenreSet, Movie, MovieId};

use super::errors::{StoreError, StoreResult};

/// In-memory movie records plus the genre enumeration they were seeded with.
///
/// The store is not synchronized; callers that share it across tasks wrap
/// it in a single lock and hold that lock for a whole request.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    /// Records ordered by id
    movies: BTreeMap<MovieId, Movie>,
    /// Genres accepted on write
    genres: GenreSet,
    /// Largest id this store has ever held
    high_water: MovieId,
}

impl MovieStore {
    /// Builds a store from seed records.
    ///
    /// The genre set is the set of genres found in the seed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two seed records share an id.
    pub fn from_seed(seed: Vec<Movie>) -> StoreResult<Self> {
        let genres: GenreSet = seed.iter().map(|movie| movie.genre.clone()).collect();
        let mut store = Self::with_genres(genres);

        for movie in seed {
            if store.contains(movie.id) {
                return Err(StoreError::DuplicateId(movie.id));
            }
            store.put(movie.id, movie);
        }

        Ok(store)
    }

    /// Creates an empty store that accepts the given genres.
    pub fn with_genres(genres: GenreSet) -> Self {
        Self {
            movies: BTreeMap::new(),
            genres,
            high_water: 0,
        }
    }

    /// Looks up a movie by id.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    /// Inserts or replaces the record at `id`.
    ///
    /// The record's own `id` is overwritten with `id`, so the key always
    /// matches the value. Returns the replaced record, if any.
    pub fn put(&mut self, id: MovieId, mut movie: Movie) -> Option<Movie> {
        movie.id = id;
        self.high_water = self.high_water.max(id);
        self.movies.insert(id, movie)
    }

    /// Removes the record at `id`, returning it.
    pub fn delete(&mut self, id: MovieId) -> Option<Movie> {
        self.movies.remove(&id)
    }

    /// Returns all records in ascending id order.
    pub fn all(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    /// Returns the id the next created record will get.
    ///
    /// This is one past the largest id ever held, which equals the current
    /// maximum plus one unless the maximum was deleted. A store that never
    /// held a record starts at 1.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdSpaceExhausted` once `MovieId::MAX` is in use.
    pub fn next_id(&self) -> StoreResult<MovieId> {
        self.high_water
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)
    }

    /// Returns the genre enumeration.
    pub fn genres(&self) -> &GenreSet {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, name: &str, genre: &str, year: i32) -> Movie {
        Movie {
            id,
            name: name.into(),
            genre: genre.into(),
            year,
            language: String::new(),
        }
    }

    #[test]
    fn test_from_seed_derives_genres() {
        let store = MovieStore::from_seed(vec![
            movie(1, "Up", "Animation", 2009),
            movie(2, "Heat", "Crime", 1995),
            movie(3, "Cars", "Animation", 2006),
        ])
        .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.genres().iter().collect::<Vec<_>>(), vec!["Animation", "Crime"]);
    }

    #[test]
    fn test_from_seed_rejects_duplicate_ids() {
        let err = MovieStore::from_seed(vec![
            movie(4, "Up", "Animation", 2009),
            movie(4, "Cars", "Animation", 2006),
        ])
        .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId(4)));
    }

    #[test]
    fn test_all_is_sorted_by_id() {
        let store = MovieStore::from_seed(vec![
            movie(9, "C", "Drama", 2000),
            movie(2, "A", "Drama", 2000),
            movie(5, "B", "Drama", 2000),
        ])
        .unwrap();

        let ids: Vec<_> = store.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_put_forces_key_onto_record() {
        let mut store = MovieStore::default();
        store.put(3, movie(99, "Up", "Animation", 2009));

        assert_eq!(store.get(3).map(|m| m.id), Some(3));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_next_id_on_empty_store_is_one() {
        let store = MovieStore::with_genres(GenreSet::default());
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let store = MovieStore::from_seed(vec![
            movie(3, "A", "Drama", 2000),
            movie(10, "B", "Drama", 2000),
        ])
        .unwrap();

        assert_eq!(store.next_id().unwrap(), 11);
    }

    #[test]
    fn test_deleted_max_id_is_not_reused() {
        let mut store = MovieStore::from_seed(vec![
            movie(1, "A", "Drama", 2000),
            movie(2, "B", "Drama", 2000),
        ])
        .unwrap();

        assert!(store.delete(2).is_some());
        assert_eq!(store.next_id().unwrap(), 3);
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut store = MovieStore::default();
        store.put(MovieId::MAX, movie(0, "Last", "Drama", 2000));

        assert!(matches!(store.next_id(), Err(StoreError::IdSpaceExhausted)));
    }

    #[test]
    fn test_delete_missing_is_none() {
        let mut store = MovieStore::default();
        assert!(store.delete(1).is_none());
        assert!(store.is_empty());
    }
}
