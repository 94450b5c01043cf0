//! slashroute - interaction replay tool
//!
//! Reads one JSON-encoded interaction per line (from a file or stdin),
//! dispatches each through a router loaded with the demonstration command
//! set, and prints the handler reply or the routing error.
//!
//! Usage: `slashroute [config.toml] [events.jsonl]`

mod demo;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context as _;
use slashroute::Router;
use slashroute::config::{Config, LogConfig, LogFormat, validate};
use slashroute_proto::Interaction;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "config.toml".to_string());
    let events_path = args.next();

    let config = if Path::new(&config_path).exists() {
        Config::load(&config_path)
            .with_context(|| format!("failed to load config from {config_path}"))?
    } else {
        Config::default()
    };

    init_tracing(&config.log);

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(path = %config_path, error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    let router: Router = Router::from_config(&config.router);
    router.register_all(&demo::commands())?;
    router.register_components(&demo::components())?;

    info!(
        routes = router.len(),
        components = router.component_keys().len(),
        component_key = %config.router.component_key(),
        "Starting slashroute replay"
    );

    let reader: Box<dyn BufRead> = match &events_path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let interaction: Interaction = match serde_json::from_str(trimmed) {
            Ok(interaction) => interaction,
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping malformed interaction");
                continue;
            }
        };

        match router.dispatch(&interaction) {
            Ok(reply) => writeln!(out, "{reply}")?,
            Err(e) => writeln!(out, "error[{}]: {e}", e.error_code())?,
        }
    }

    for (path, count) in router.route_stats() {
        info!(path = %path, count, "Route usage");
    }

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr);

    match log.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
