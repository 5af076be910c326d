use shorturl::config;
use shorturl::server;
use shorturl::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init_tracing(&config.log_level, LogFormat::from_name(&config.log_format));
    config.print_summary();

    server::run(config).await
}
