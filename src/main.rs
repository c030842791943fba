use anyhow::Result;
use clap::Parser;
use cv_intake::logging::init_logging;
use cv_intake::{start_web_server, AppConfig, ServerArgs};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from(ServerArgs::parse());

    init_logging(config.log_file.as_deref())?;

    info!("Starting CV intake front end");
    info!(
        "Upload limit: {} MiB, service timeout: {}s",
        config.max_upload_mib,
        config.timeout.as_secs()
    );

    start_web_server(config).await
}
