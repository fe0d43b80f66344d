// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Logging for the mock services.
//!
//! Logging can take two forms: `READABLE` or `JSONL`. The default is `READABLE`. `JSONL`
//! can be enabled by setting the `KVCACHE_MOCK_LOGGING_JSONL` environment variable to `1`.
//!
//! To use local timezone for logging timestamps, set `KVCACHE_MOCK_LOG_USE_LOCAL_TZ` to `1`.
//!
//! Filters are read from the `KVCACHE_MOCK_LOG` environment variable using the usual
//! `EnvFilter` directive syntax, e.g. `KVCACHE_MOCK_LOG=debug,mock_controller=trace`.
//! The default log level is `info`.

use std::collections::HashMap;
use std::sync::Once;

use axum::http::Request;
use tracing::Span;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt};

use crate::config::{disable_ansi_logging, jsonl_logging_enabled, use_local_timezone};
use kvcache_mock_config::environment_names::logging as env_logging;

/// Request header propagated into the request span
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Once instance to ensure the logger is only initialized once
static INIT: Once = Once::new();

struct LoggingConfig {
    log_level: LevelFilter,
    log_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: LevelFilter::INFO,
            log_filters: HashMap::from([
                ("h2".to_string(), "error".to_string()),
                ("tower".to_string(), "error".to_string()),
                ("hyper".to_string(), "error".to_string()),
                ("hyper_util".to_string(), "error".to_string()),
                ("rustls".to_string(), "error".to_string()),
                ("reqwest".to_string(), "error".to_string()),
                ("axum".to_string(), "error".to_string()),
            ]),
        }
    }
}

/// Initialize the logger. Safe to call more than once; only the first call installs
/// the subscriber.
pub fn init() {
    INIT.call_once(setup_logging);
}

fn setup_logging() {
    let filter_layer = filters(LoggingConfig::default());

    let result = if jsonl_logging_enabled() {
        let l = fmt::layer()
            .json()
            .with_ansi(false)
            .with_timer(TimeFormatter::new())
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(filter_layer);
        tracing_subscriber::registry().with(l).try_init()
    } else {
        let l = fmt::layer()
            .with_ansi(!disable_ansi_logging())
            .event_format(fmt::format().compact().with_timer(TimeFormatter::new()))
            .with_writer(std::io::stderr)
            .with_filter(filter_layer);
        tracing_subscriber::registry().with(l).try_init()
    };

    // A test harness may already own the global subscriber.
    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

fn filters(config: LoggingConfig) -> EnvFilter {
    let mut filter_layer = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .with_env_var(env_logging::KVCACHE_MOCK_LOG)
        .from_env_lossy();

    for (module, level) in config.log_filters {
        match format!("{module}={level}").parse::<Directive>() {
            Ok(d) => {
                filter_layer = filter_layer.add_directive(d);
            }
            Err(e) => {
                eprintln!("Failed parsing filter '{level}' for module '{module}': {e}");
            }
        }
    }
    filter_layer
}

/// Takes an axum request and returns the span the request is handled in
pub fn make_request_span<B>(req: &Request<B>) -> Span {
    let x_request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http-request",
        method = %req.method(),
        uri = %req.uri(),
        version = ?req.version(),
        x_request_id = %x_request_id,
    )
}

struct TimeFormatter {
    use_local_tz: bool,
}

impl TimeFormatter {
    fn new() -> Self {
        Self {
            use_local_tz: use_local_timezone(),
        }
    }

    fn format_now(&self) -> String {
        if self.use_local_tz {
            chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f%:z")
                .to_string()
        } else {
            chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string()
        }
    }
}

impl FormatTime for TimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", self.format_now())
    }
}
