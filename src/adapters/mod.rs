//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (HS256 JWT, mock)
//! - `http` - Axum routes, middleware and DTOs
//! - `memory` - In-memory storage for tests and local runs
//! - `postgres` - PostgreSQL storage via sqlx

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use memory::{InMemoryActivityReader, InMemoryMoodProfileRepository};
pub use postgres::{PostgresActivityReader, PostgresMoodProfileRepository};
