use stratusx::core::config::ClientConfig;
use stratusx::{build_client, ClientError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Example usage - replace with your actual endpoint and credentials
    let config = ClientConfig::new(
        "http://localhost:8080/client/api".to_string(),
        "your_api_key".to_string(),
        "your_secret_key".to_string(),
    );

    let client = build_client(config)?;

    println!("Listing zones...");
    match client.execute("listZones", &[("available", "true")]).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(ClientError::ApiError { code, message }) => {
            println!("Remote rejected the call: {} ({})", message, code);
        }
        Err(e) => {
            println!("Error listing zones: {}", e);
        }
    }

    Ok(())
}
