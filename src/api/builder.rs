use crate::api::catalog::ManifestSource;
use crate::api::client::CloudClient;
use crate::core::config::{ClientConfig, DEFAULT_MANIFEST_PATH};
use crate::core::errors::ClientError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use std::path::PathBuf;

/// Create a client backed by the reqwest transport
///
/// The manifest is read from the configured path, falling back to
/// `commands.json` in the working directory; it is not opened until the
/// first command executes.
pub fn build_client(config: ClientConfig) -> Result<CloudClient<ReqwestRest>, ClientError> {
    let manifest_path = config
        .manifest_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH));
    build_client_with_manifest(config, ManifestSource::Path(manifest_path))
}

/// Create a reqwest-backed client with an explicit manifest source
pub fn build_client_with_manifest(
    config: ClientConfig,
    manifest: ManifestSource,
) -> Result<CloudClient<ReqwestRest>, ClientError> {
    let rest_config = RestClientConfig::new().with_timeout(config.timeout_seconds);
    let rest = RestClientBuilder::new(rest_config).build()?;

    CloudClient::new(config, manifest, rest)
}
