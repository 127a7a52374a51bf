//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 shared-secret JWT validation
//! - `mock` - Test implementation that accepts registered tokens

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtConfig, JwtSessionValidator, DEFAULT_LEEWAY_SECS};
pub use mock::MockSessionValidator;
