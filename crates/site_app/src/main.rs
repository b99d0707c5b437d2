use std::path::PathBuf;

use site_app::server::{config, logging};

const DEFAULT_CONFIG: &str = "site.ron";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    let settings = config::load(&config_path)?;
    logging::initialize(&settings.log);

    site_app::listen(settings).await
}
