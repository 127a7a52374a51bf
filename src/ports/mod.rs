//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `MoodProfileRepository` - Stored mood results
//! - `ActivityReader` - Task and journal data consumed by the mood engine
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token validation

mod activity_reader;
mod mood_profile_repository;
mod session_validator;

pub use activity_reader::ActivityReader;
pub use mood_profile_repository::MoodProfileRepository;
pub use session_validator::SessionValidator;
