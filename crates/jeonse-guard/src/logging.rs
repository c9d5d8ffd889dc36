use anyhow::Context;
use jeonse_core::SearchEndpoint;
use std::io;
use std::path::Path;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub(crate) const LOG_FILE_PREFIX: &str = "jeonse-guard.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionMode {
    Interactive,
    Once,
}

impl SessionMode {
    pub(crate) fn from_once(once: bool) -> Self {
        if once {
            Self::Once
        } else {
            Self::Interactive
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Interactive => "tui",
            Self::Once => "once",
        }
    }
}

/// JSON lines go to a daily file; the terminal stays free for the UI unless
/// `log_to_stderr` is set. Each line carries the fields of the enclosing
/// session span.
pub(crate) fn init_tracing(
    log_dir: &Path,
    log_to_stderr: bool,
) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_target(false)
        .json()
        .with_current_span(true)
        .with_span_list(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if log_to_stderr {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    Ok(file_guard)
}

/// Span wrapping one run, so every calculation logged inside it can be tied
/// back to the step and search endpoint that were in effect.
pub(crate) fn session_span(
    mode: SessionMode,
    step: u64,
    endpoint: &SearchEndpoint,
) -> tracing::Span {
    tracing::info_span!(
        "session",
        mode = mode.as_str(),
        step,
        endpoint = endpoint.base()
    )
}
