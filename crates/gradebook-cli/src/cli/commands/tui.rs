//! Interactive mode.

use anyhow::Result;
use gradebook_core::api::ApiClient;
use gradebook_core::config::Config;

pub async fn run(config: &Config, client: ApiClient) -> Result<()> {
    gradebook_tui::run(config, client).await
}
