// Prints the OpenAPI schema of the error bodies to stdout:
//   cargo run --bin openapi-export > errors.openapi.json

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use service_errors::openapi::ErrorsDoc;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,service_errors=debug".into()),
        )
        .with(fmt_layer)
        .init();

    info!(
        "Exporting error schemas for service-errors v{}",
        env!("CARGO_PKG_VERSION")
    );

    let json = ErrorsDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;
    println!("{json}");

    Ok(())
}
