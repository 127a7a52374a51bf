//! HTTP adapter for mood inference endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, MoodProfileResponse};
pub use handlers::{MoodApiError, MoodAppState, MoodSettings};
pub use routes::{mood_router, mood_routes};
