/// `StratusX` Kernel - transport and signing layer
///
/// This module contains the API-agnostic plumbing under the command client:
/// query encoding, request signing, and the HTTP transport seam. The kernel
/// holds no knowledge of individual commands or manifests.
///
/// # Architecture
///
/// ## Encoding
/// - `codec`: RFC3986 percent-encoding, canonical query assembly, and
///   query-to-URL appending
///
/// ## Authentication
/// - `QuerySigner`: pluggable signing interface over a parameter map
/// - `HmacSha1Signer`: the shared-secret HMAC-SHA1 scheme
///
/// ## Transport
/// - `RestClient`: unified HTTP execution interface
/// - `ReqwestRest`: reqwest-backed implementation with tracing
///
/// # Key Principles
///
/// 1. **Transport Only**: the kernel contains NO command-specific logic
/// 2. **Pluggable**: signer and transport are trait-based for testing
/// 3. **Deterministic**: signing output depends only on parameters and key
/// 4. **Observable**: tracing instrumentation on the request path
pub mod codec;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{HmacSha1Signer, QuerySigner};
