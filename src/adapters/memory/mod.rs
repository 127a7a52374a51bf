//! In-memory adapters.
//!
//! Back the persistence ports with process memory. Used by tests and for
//! running the server without a database.

mod activity_reader;
mod mood_profile_repository;

pub use activity_reader::InMemoryActivityReader;
pub use mood_profile_repository::InMemoryMoodProfileRepository;
