//! Tracing configuration for debugging the scanner.
//!
//! Supports two output formats controlled by `HILITE_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `json`: One JSON object per span/event, machine-readable
//!
//! ## Quick start
//!
//! ```bash
//! # Mode-stack trace while tokenizing
//! HILITE_LOG=trace cargo test
//!
//! # JSON (for tooling or sharing full traces)
//! HILITE_LOG=trace HILITE_LOG_FORMAT=json cargo test
//!
//! # Fine-grained filtering
//! HILITE_LOG="hilite::scanner=trace" cargo test
//! ```
//!
//! The subscriber is only initialised when `HILITE_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal builds.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse from the `HILITE_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        match std::env::var("HILITE_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Build an `EnvFilter` from `HILITE_LOG`, falling back to `RUST_LOG`.
///
/// `HILITE_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `trace`, `hilite::scanner=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("HILITE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        // RUST_LOG is set (caller already checked).  Use it as-is.
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `HILITE_LOG` nor `RUST_LOG` is set, keeping
/// startup cost at zero for normal usage.
///
/// All output goes to stderr so it never interferes with a consumer reading
/// token streams from stdout.
pub fn init_tracing() {
    // Only pay for tracing when explicitly requested.
    let has_hilite_log = std::env::var("HILITE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_hilite_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();

    match format {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
