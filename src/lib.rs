pub mod api;
pub mod core;

pub use api::{build_client, build_client_with_manifest, CloudClient, CommandCatalog, ManifestSource};
pub use core::{config::ClientConfig, errors::ClientError, types::*};
