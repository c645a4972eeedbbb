use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::path::PathBuf;

/// Default response field carrying the remote error message.
pub const DEFAULT_ERROR_FIELD: &str = "errortext";
/// Default response field carrying the remote error code.
pub const DEFAULT_ERROR_CODE_FIELD: &str = "errorcode";
/// Default location of the pre-generated command manifest.
pub const DEFAULT_MANIFEST_PATH: &str = "commands.json";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    /// Envelope key signalling an application-level error.
    pub error_field: String,
    /// Envelope key carrying the numeric error code; empty disables code
    /// extraction and the reported code defaults to 0.
    pub error_code_field: String,
    pub manifest_path: Option<PathBuf>,
    pub timeout_seconds: u64,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 7)?;
        state.serialize_field("api_url", &self.api_url)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("error_field", &self.error_field)?;
        state.serialize_field("error_code_field", &self.error_code_field)?;
        state.serialize_field("manifest_path", &self.manifest_path)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.end()
    }
}

// Custom Deserialize implementation
impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            api_url: String,
            api_key: String,
            secret_key: String,
            error_field: Option<String>,
            error_code_field: Option<String>,
            manifest_path: Option<PathBuf>,
            timeout_seconds: Option<u64>,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        let mut config = Self::new(helper.api_url, helper.api_key, helper.secret_key);
        if let Some(error_field) = helper.error_field {
            config.error_field = error_field;
        }
        if let Some(error_code_field) = helper.error_code_field {
            config.error_code_field = error_code_field;
        }
        config.manifest_path = helper.manifest_path;
        if let Some(timeout_seconds) = helper.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        Ok(config)
    }
}

impl ClientConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(api_url: String, api_key: String, secret_key: String) -> Self {
        Self {
            api_url,
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            error_field: DEFAULT_ERROR_FIELD.to_string(),
            error_code_field: DEFAULT_ERROR_CODE_FIELD.to_string(),
            manifest_path: None,
            timeout_seconds: 30,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_URL` (e.g., `STRATUS_API_URL`)
    /// - `{PREFIX}_API_KEY`
    /// - `{PREFIX}_SECRET_KEY`
    /// - `{PREFIX}_MANIFEST` (optional, path to the command manifest)
    /// - `{PREFIX}_ERROR_FIELD` / `{PREFIX}_ERROR_CODE_FIELD` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let api_url_var = format!("{}_API_URL", prefix.to_uppercase());
        let api_key_var = format!("{}_API_KEY", prefix.to_uppercase());
        let secret_key_var = format!("{}_SECRET_KEY", prefix.to_uppercase());
        let manifest_var = format!("{}_MANIFEST", prefix.to_uppercase());
        let error_field_var = format!("{}_ERROR_FIELD", prefix.to_uppercase());
        let error_code_field_var = format!("{}_ERROR_CODE_FIELD", prefix.to_uppercase());

        let api_url = env::var(&api_url_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_url_var))?;
        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;
        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let mut config = Self::new(api_url, api_key, secret_key);
        config.manifest_path = env::var(&manifest_var).ok().map(PathBuf::from);
        if let Ok(error_field) = env::var(&error_field_var) {
            config.error_field = error_field;
        }
        if let Ok(error_code_field) = env::var(&error_code_field_var) {
            config.error_code_field = error_code_field;
        }
        Ok(config)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// This method first loads environment variables from a .env file (if it
    /// exists), then reads the configuration using the standard environment
    /// variable names.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    /// Add .env to your .gitignore file.
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Check that every mandatory option is present.
    ///
    /// Clients call this once at construction; the configuration is
    /// immutable afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::MissingOption("api_url".to_string()));
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingOption("api_key".to_string()));
        }
        if self.secret_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingOption("secret_key".to_string()));
        }
        Ok(())
    }

    /// Set a custom error-message field name
    #[must_use]
    pub fn error_field(mut self, error_field: String) -> Self {
        self.error_field = error_field;
        self
    }

    /// Set a custom error-code field name
    #[must_use]
    pub fn error_code_field(mut self, error_code_field: String) -> Self {
        self.error_code_field = error_code_field;
        self
    }

    /// Override the command manifest location
    #[must_use]
    pub fn manifest_path(mut self, manifest_path: PathBuf) -> Self {
        self.manifest_path = Some(manifest_path);
        self
    }

    /// Set the transport timeout
    #[must_use]
    pub const fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Missing required option: {0}")]
    MissingOption(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
