pub mod builder;
pub mod catalog;
pub mod client;
pub mod request;
pub mod response;

// Re-export main types for easier importing
pub use builder::{build_client, build_client_with_manifest};
pub use catalog::{CommandCatalog, CommandEntry, ManifestSource, ParamSpec};
pub use client::CloudClient;
pub use request::RequestBuilder;
pub use response::ResponseInspector;
