use ad_platforms::catalogue::loader::load_from_file;
use ad_platforms::config::Config;
use ad_platforms::index::engine::LocationIndex;
use ad_platforms::router;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Location index (empty generation until a catalogue is loaded):
    let index = LocationIndex::new();

    // 2. Optional catalogue preload:
    if let Some(path) = config.catalogue.as_deref() {
        match load_from_file(&index, path).await {
            Ok(count) => tracing::info!("Preloaded {} platforms from {}", count, path.display()),
            Err(e) => tracing::warn!("Skipping catalogue preload from {}: {}", path.display(), e),
        }
    }

    // 3. HTTP server:
    let app = router(index);

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
