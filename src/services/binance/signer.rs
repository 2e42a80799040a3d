//! HMAC-SHA256 request signing for `USER_DATA` and `TRADE` endpoints.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::config::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

#[derive(Clone)]
pub struct RequestSigner {
    api_key: SecretString,
    mac: HmacSha256,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        let mac = HmacSha256::new_from_slice(credentials.api_secret.expose_secret().as_bytes())
            .expect("HMAC-SHA256 accepts keys of any length");

        Self {
            api_key: credentials.api_key.clone(),
            mac,
        }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Hex-encoded HMAC-SHA256 of the full query string.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
