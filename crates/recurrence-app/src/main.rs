mod cli;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use recurrence_core::config::{load_config, parse_timezone};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Describe { locale, file } => {
            let locale = locale.unwrap_or_else(|| config.describe.default_locale.clone());
            let input = commands::read_input(file.as_deref(), std::io::stdin())?;
            commands::describe_input(&input, &locale, &mut out)?;
        }
        Command::Expand {
            start,
            limit,
            timezone,
            file,
        } => {
            let tz = match timezone {
                Some(name) => parse_timezone(&name)?,
                None => config.describe.tz()?,
            };
            let start =
                start.unwrap_or_else(|| chrono::Utc::now().with_timezone(&tz).date_naive());
            let limit = limit.unwrap_or(config.describe.expand_limit);
            let input = commands::read_input(file.as_deref(), std::io::stdin())?;
            let total = commands::expand_input(&input, start, tz, limit, &mut out)?;
            tracing::info!(total, %start, tz = %tz, "Expansion finished");
        }
    }

    out.flush()?;

    Ok(())
}
