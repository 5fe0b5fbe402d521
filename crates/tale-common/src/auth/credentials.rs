//! Bot client credential generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use uuid::Uuid;

/// Bytes of entropy in a client secret
const SECRET_BYTES: usize = 32;

/// A freshly generated client id / secret pair
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Generate a client id (UUID v4) and a URL-safe random secret
#[must_use]
pub fn generate_client_credentials() -> ClientCredentials {
    let mut secret = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut secret);

    ClientCredentials {
        client_id: Uuid::new_v4().to_string(),
        client_secret: URL_SAFE_NO_PAD.encode(secret),
    }
}
