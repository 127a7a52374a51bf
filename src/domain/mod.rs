//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `mood` - Mood inference engine (text analysis, behavioral prediction, fusion)

pub mod foundation;
pub mod mood;
