//! Authentication utilities

mod credentials;
mod jwt;

pub use credentials::{generate_client_credentials, ClientCredentials};
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
