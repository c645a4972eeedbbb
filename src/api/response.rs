use crate::core::config::{DEFAULT_ERROR_CODE_FIELD, DEFAULT_ERROR_FIELD};
use crate::core::errors::ClientError;
use serde_json::Value;

/// Detects application-level errors inside successful HTTP responses.
///
/// The remote wraps every result in a single top-level envelope whose key
/// varies per command; the FIRST top-level value is inspected regardless of
/// its key, and only the configured error field is recognized. Responses
/// with multiple top-level keys are never scanned past the first.
#[derive(Debug, Clone)]
pub struct ResponseInspector {
    error_field: String,
    error_code_field: String,
}

impl ResponseInspector {
    pub fn new(error_field: impl Into<String>, error_code_field: impl Into<String>) -> Self {
        Self {
            error_field: error_field.into(),
            error_code_field: error_code_field.into(),
        }
    }

    /// Check a decoded body for the remote error convention
    ///
    /// Fails with `ApiError` when the envelope carries the error field; the
    /// code comes from the error-code field when configured and present,
    /// else 0. Anything else passes.
    pub fn inspect(&self, body: &Value) -> Result<(), ClientError> {
        let Some(envelope) = body.as_object().and_then(|map| map.values().next()) else {
            return Ok(());
        };
        let Some(message) = envelope.get(&self.error_field) else {
            return Ok(());
        };

        let message = message
            .as_str()
            .map_or_else(|| message.to_string(), str::to_string);
        let code = if self.error_code_field.is_empty() {
            0
        } else {
            envelope
                .get(&self.error_code_field)
                .and_then(Value::as_i64)
                .unwrap_or(0)
        };

        Err(ClientError::ApiError { code, message })
    }
}

impl Default for ResponseInspector {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_FIELD, DEFAULT_ERROR_CODE_FIELD)
    }
}
