//! Authentication state for API calls.
//!
//! The REST client authenticates every request with a shop-scoped access
//! token. Obtaining that token (app install, OAuth, token exchange) is left to
//! the application; this module only carries the result.

pub mod session;

pub use session::Session;
