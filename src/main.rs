use clap::Parser;
use valuebid::cli::{Cli, commands};
use valuebid::config::AppConfig;
use valuebid::log::{LogConfig, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    init_logger(LogConfig {
        log_dir: config.log_dir(),
        log_level: config.log_level,
        ..LogConfig::default()
    })?;

    commands::handle(cli.command, config).await
}
