use crate::api::catalog::CommandCatalog;
use crate::core::errors::ClientError;
use crate::core::kernel::codec;
use crate::core::kernel::signer::QuerySigner;
use crate::core::types::RequestDescriptor;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Assembles validated, signed request descriptors.
///
/// Holds the per-client constants (API URL, key, signer); everything per-call
/// lives in a fresh parameter map, so concurrent builds never share state.
pub struct RequestBuilder {
    api_url: String,
    api_key: String,
    signer: Arc<dyn QuerySigner>,
}

impl RequestBuilder {
    pub fn new(api_url: String, api_key: String, signer: Arc<dyn QuerySigner>) -> Self {
        Self {
            api_url,
            api_key,
            signer,
        }
    }

    /// Build a signed request for a command
    ///
    /// Validates against the catalog before any merging, injects the
    /// `command`, `response=json`, and `apikey` fields over any
    /// caller-supplied values of the same names, signs the merged map, and
    /// appends the signed query to the API URL.
    pub fn build(
        &self,
        catalog: &CommandCatalog,
        command: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<RequestDescriptor, ClientError> {
        catalog.validate(command, options)?;

        let mut params = options.clone();
        params.insert("command".to_string(), command.to_string());
        params.insert("response".to_string(), "json".to_string());
        params.insert("apikey".to_string(), self.api_key.clone());

        let query = self.signer.sign(&params)?;
        let url = codec::append_query(&self.api_url, &query);

        Ok(RequestDescriptor::new(catalog.method_for(command), url))
    }
}
