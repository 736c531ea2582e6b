use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            format: env::var("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or(LogFormat::Pretty),
        }
    }
}

pub fn init_telemetry(config: TelemetryConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter: {}", config.filter))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    };
    installed.context("Failed to install tracing subscriber")?;

    tracing::info!(service = %config.service_name, "Telemetry initialized");
    Ok(())
}
