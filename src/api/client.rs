use crate::api::catalog::{CommandCatalog, ManifestSource};
use crate::api::request::RequestBuilder;
use crate::api::response::ResponseInspector;
use crate::core::config::ClientConfig;
use crate::core::errors::ClientError;
use crate::core::kernel::rest::RestClient;
use crate::core::kernel::signer::HmacSha1Signer;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Command client generic over the transport.
///
/// Any command the catalog recognizes is invoked through the single
/// [`execute`](Self::execute) entry point; the command name and caller
/// options are forwarded as-is, with validation, parameter injection,
/// signing, and error inspection applied around the transport call. The
/// client is `Send + Sync`: config, catalog, and wiring are read-only after
/// construction, and per-call state is call-local.
pub struct CloudClient<R: RestClient> {
    config: ClientConfig,
    rest: R,
    request: RequestBuilder,
    inspector: ResponseInspector,
    manifest: ManifestSource,
    catalog: OnceCell<CommandCatalog>,
}

impl<R: RestClient> CloudClient<R> {
    /// Create a client over an existing transport
    ///
    /// Fails fast on incomplete configuration; nothing is loaded from the
    /// manifest source until the first command.
    pub fn new(config: ClientConfig, manifest: ManifestSource, rest: R) -> Result<Self, ClientError> {
        config.validate()?;

        let signer = Arc::new(HmacSha1Signer::new(config.secret_key().to_string())?);
        let request = RequestBuilder::new(
            config.api_url.clone(),
            config.api_key().to_string(),
            signer,
        );
        let inspector =
            ResponseInspector::new(config.error_field.clone(), config.error_code_field.clone());

        Ok(Self {
            config,
            rest,
            request,
            inspector,
            manifest,
            catalog: OnceCell::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The command catalog, loaded at most once for the client's lifetime
    ///
    /// Concurrent first calls block on a single load; a load failure is
    /// surfaced to every caller and the next call attempts the source again.
    pub fn catalog(&self) -> Result<&CommandCatalog, ClientError> {
        self.catalog.get_or_try_init(|| self.manifest.load())
    }

    /// Execute a named command with the given options
    ///
    /// Returns the full decoded response body after the error-envelope
    /// check. Invalid input fails before any network activity.
    #[instrument(skip(self, options), fields(command = %command))]
    pub async fn execute(
        &self,
        command: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let catalog = self.catalog()?;
        let options: BTreeMap<String, String> = options
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        let request = self.request.build(catalog, command, &options)?;
        debug!(method = %request.method, "dispatching command");

        let body = self.rest.execute(&request).await?;
        self.inspector.inspect(&body)?;
        Ok(body)
    }

    /// Execute a command and deserialize the response body
    pub async fn execute_into<T: DeserializeOwned>(
        &self,
        command: &str,
        options: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let body = self.execute(command, options).await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl<R: RestClient + std::fmt::Debug> std::fmt::Debug for CloudClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudClient")
            .field("api_url", &self.config.api_url)
            .field("rest", &self.rest)
            .field("catalog_loaded", &self.catalog.get().is_some())
            .finish_non_exhaustive()
    }
}
