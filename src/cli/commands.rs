// Command handler implementations

use crate::cli::output::OutputFormatter;
use crate::cli::{Cli, Commands};
use crate::config::{AppConfig, Credentials};
use crate::countdown::{Ticker, format_time_left, parse_instant};
use crate::log_info;
use crate::pagination::{build_page_window, clamp_page, render_line};
use crate::proxy;
use anyhow::Result;
use chrono::Utc;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write as _};

const STATUS_KEY_WIDTH: usize = 16;

pub async fn handle(command: Option<Commands>, config: AppConfig) -> Result<()> {
    match command {
        Some(Commands::Serve { port, host }) => handle_serve(config, port, host).await,
        Some(Commands::Pages {
            current,
            total,
            json,
        }) => handle_pages(current, total, json),
        Some(Commands::Countdown {
            end,
            disabled,
            watch,
        }) => handle_countdown(&end, disabled, watch).await,
        Some(Commands::Config) => handle_config(&config),
        Some(Commands::Completions { shell }) => handle_completions(shell),
        Some(Commands::Status) | None => handle_status(&config),
    }
}

/// Handle serve command
async fn handle_serve(mut config: AppConfig, port: Option<u16>, host: Option<String>) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    config.validate()?;

    log_info!("Executing serve command on {}", config.server.bind_address());

    let credentials = Credentials::from_env();
    if credentials.shopping().is_none() {
        println!(
            "{}",
            OutputFormatter::warning("shopping credentials missing, /shopping-search will answer 500")
        );
    }
    if credentials.video().is_none() {
        println!(
            "{}",
            OutputFormatter::warning("video API key missing, /video-search will answer 500")
        );
    }

    proxy::serve(&config, credentials).await?;

    println!("{}", OutputFormatter::success("Proxy stopped"));
    Ok(())
}

/// Handle pages command
fn handle_pages(current: u32, total: u32, json: bool) -> Result<()> {
    let current = clamp_page(current, total);
    log_info!("Executing pages command (current: {}, total: {})", current, total);

    let markers = build_page_window(current, total);
    if json {
        println!("{}", serde_json::to_string(&markers)?);
    } else {
        println!("{}", render_line(&markers));
    }
    Ok(())
}

/// Handle countdown command
async fn handle_countdown(end: &str, disabled: bool, watch: bool) -> Result<()> {
    let end = parse_instant(end)?;
    log_info!("Executing countdown command (end: {}, watch: {})", end, watch);

    if !watch {
        println!("{}", format_time_left(Some(end), Utc::now(), disabled));
        return Ok(());
    }

    let ticker = Ticker::start(Some(end), disabled, |label| {
        print!("\r{:<20}", label);
        let _ = io::stdout().flush();
    });

    let Some(mut ticker) = ticker else {
        println!("{}", format_time_left(Some(end), Utc::now(), disabled));
        return Ok(());
    };

    let interrupted = tokio::select! {
        _ = ticker.wait() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        ticker.cancel();
    }
    println!();
    Ok(())
}

/// Handle status command
fn handle_status(config: &AppConfig) -> Result<()> {
    log_info!("Executing status command");

    let credentials = Credentials::from_env();
    let presence = |set: bool| if set { "set" } else { "missing" };

    let rows = [
        ("Version", config.version.clone()),
        ("Config", config.config_path().display().to_string()),
        ("Listen", config.server.bind_address()),
        (
            "Upstream timeout",
            humantime::format_duration(config.server.timeout()).to_string(),
        ),
        ("Shopping API", config.upstream.shopping_url.clone()),
        ("Video API", config.upstream.video_url.clone()),
        ("Shopping creds", presence(credentials.shopping().is_some()).to_string()),
        ("Video API key", presence(credentials.video().is_some()).to_string()),
        ("Log level", config.log_level.to_string()),
    ];

    for (key, value) in rows {
        println!("{}", OutputFormatter::key_value(key, &value, STATUS_KEY_WIDTH));
    }
    Ok(())
}

/// Handle config command
fn handle_config(config: &AppConfig) -> Result<()> {
    log_info!("Executing config command");

    let s = std::fs::read_to_string(config.config_path())?;
    println!("{}", s);
    Ok(())
}

/// Handle completions command
fn handle_completions(shell: Shell) -> Result<()> {
    log_info!("Generating completions for shell: {:?}", shell);

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
