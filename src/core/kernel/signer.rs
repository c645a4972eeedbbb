use crate::core::errors::ClientError;
use crate::core::kernel::codec;
use base64::engine::general_purpose;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Signer trait for request authentication
///
/// Turns a canonical parameter map into the transmittable query string,
/// signature included. Implementations must be deterministic: the same map
/// and key always produce the same output.
pub trait QuerySigner: Send + Sync {
    /// Sign a parameter map and return the full query string
    ///
    /// # Arguments
    /// * `params` - Parameters in ascending key order (the map's iteration
    ///   order is the canonical order)
    ///
    /// # Returns
    /// The canonical query string with `&signature=<digest>` appended
    fn sign(&self, params: &BTreeMap<String, String>) -> Result<String, ClientError>;
}

/// HMAC-SHA1 shared-secret signer
///
/// The digest is computed over the lower-cased canonical query, but the
/// transmitted query keeps its original case. The remote side lower-cases
/// before verifying; both halves of this asymmetry are part of its contract.
pub struct HmacSha1Signer {
    secret_key: String,
}

impl HmacSha1Signer {
    /// Create a new signer from the raw shared secret
    pub fn new(secret_key: String) -> Result<Self, ClientError> {
        if secret_key.is_empty() {
            return Err(ClientError::AuthError(
                "secret key must not be empty".to_string(),
            ));
        }
        Ok(Self { secret_key })
    }

    fn digest(&self, payload: &str) -> Result<String, ClientError> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ClientError::AuthError(format!("Failed to create HMAC: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl QuerySigner for HmacSha1Signer {
    fn sign(&self, params: &BTreeMap<String, String>) -> Result<String, ClientError> {
        let canonical = codec::canonical_query(params);
        let signature = self.digest(&canonical.to_ascii_lowercase())?;
        Ok(format!(
            "{}&signature={}",
            canonical,
            codec::percent_encode(&signature)
        ))
    }
}
