//! In-memory movie store
//!
//! The store is seeded once from a JSON file and holds every record for the
//! lifetime of the process. Nothing is written back to disk.
//!
//! # Invariants
//!
//! - Every key equals the `id` of its record
//! - Ids are unique and never handed out twice, even after a delete
//! - The genre set is derived from the seed and never changes

mod errors;
mod movie_store;
mod seed;

pub use errors::{StoreError, StoreResult};
pub use movie_store::MovieStore;
pub use seed::{load_seed, parse_seed};
