//! Backend health check.

use anyhow::{Context, Result};
use gradebook_core::api::ApiClient;
use tracing::info;

pub async fn run(client: &ApiClient) -> Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("health check against {}", client.base_url()))?;
    info!(status = %health.status, version = %health.version, "health check");

    println!("API:     {}", client.base_url());
    println!("Status:  {}", health.status);
    if !health.version.is_empty() {
        println!("Version: {}", health.version);
    }

    if !health.status.eq_ignore_ascii_case("UP") {
        anyhow::bail!("Backend reported status {}", health.status);
    }
    Ok(())
}
