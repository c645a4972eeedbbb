use stratusx::api::builder::build_client_with_manifest;
use stratusx::api::catalog::{CommandCatalog, ManifestSource};
use stratusx::core::config::ClientConfig;
use stratusx::ClientError;

/// Drives the client against an inline manifest so the example runs without
/// a pre-generated commands.json on disk.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let manifest = r#"{
        "listZones": {
            "httpmethod": "GET",
            "params": {
                "available": {"required": false, "type": "boolean"}
            }
        },
        "deployVirtualMachine": {
            "params": {
                "serviceofferingid": {"required": true, "type": "uuid"},
                "templateid": {"required": true, "type": "uuid"},
                "zoneid": {"required": true, "type": "uuid"}
            }
        }
    }"#;
    let catalog = CommandCatalog::from_reader(manifest.as_bytes())?;

    let config = ClientConfig::new(
        "http://localhost:8080/client/api".to_string(),
        "your_api_key".to_string(),
        "your_secret_key".to_string(),
    );
    let client = build_client_with_manifest(config, ManifestSource::Inline(catalog))?;

    // Invalid input fails before any network activity.
    match client.execute("deployVirtualMachine", &[]).await {
        Err(ClientError::MissingParameters { command, missing }) => {
            println!(
                "'{}' needs {} more parameter(s):",
                command,
                missing.len()
            );
            for param in &missing {
                println!("  - {}", param);
            }
        }
        other => println!("unexpected outcome: {:?}", other.map(|_| ())),
    }

    println!("\nListing zones...");
    match client.execute("listZones", &[("available", "true")]).await {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(e) => println!("Error listing zones: {}", e),
    }

    Ok(())
}
