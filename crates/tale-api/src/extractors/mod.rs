//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path ids, query strings and validation.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use query::ListQuery;
pub use validated::ValidatedJson;
