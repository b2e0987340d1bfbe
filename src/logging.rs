use std::fs;

use anyhow::{Context, Result, bail};
use tracing::Subscriber;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "model-transform";
const LOG_FILE_SUFFIX: &str = "log";

/// Holds the writer thread of the file layer; pending records are flushed on drop.
pub struct TracingGuard {
    _flush: WorkerGuard,
    run_id: String,
}

impl TracingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

/// Installs the subscriber from [`build_subscriber`] as the global default.
pub fn init_tracing(config: &LoggingConfig) -> Result<TracingGuard> {
    let (subscriber, flush) = build_subscriber(config)?;
    subscriber
        .try_init()
        .context("failed to install tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %config.dir.display(),
        filter = %config.filter,
        rotation = ?config.rotation,
        retained_files = retained_files(config),
        "logging_initialized"
    );

    Ok(TracingGuard {
        _flush: flush,
        run_id,
    })
}

/// JSON records to a rolling file under `config.dir`, plus WARN and above on
/// stderr when enabled. Rotated files beyond the retention window are pruned by
/// the appender.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard)> {
    if config.filter.trim().is_empty() {
        bail!("logging.filter cannot be empty");
    }
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid logging.filter '{}'", config.filter))?;

    fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create log directory {}", config.dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(match config.rotation {
            LoggingRotation::Daily => Rotation::DAILY,
            LoggingRotation::Hourly => Rotation::HOURLY,
        })
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(retained_files(config))
        .build(&config.dir)
        .with_context(|| format!("failed to open log files in {}", config.dir.display()))?;
    let (writer, flush) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(filter);
    let stderr_layer = config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer);
    Ok((subscriber, flush))
}

fn retained_files(config: &LoggingConfig) -> usize {
    let per_day = match config.rotation {
        LoggingRotation::Daily => 1,
        LoggingRotation::Hourly => 24,
    };
    config.retention_days.max(1).saturating_mul(per_day)
}
