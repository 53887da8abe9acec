//! Logging setup for applications embedding the file list.
//!
//! The crate itself only emits `tracing` events (target `file_list`). These
//! helpers install a `tracing-subscriber` formatter for hosts that do not
//! configure one themselves.

/// Initialize a tracing subscriber with sensible defaults.
///
/// Honors `RUST_LOG` when set; otherwise shows info+ for `file_list` and
/// warn+ for everything else.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "file_list=info,warn".into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize a tracing subscriber with a custom filter directive
/// (e.g. `"file_list=trace"`).
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize a tracing subscriber with defaults. Without the `tracing`
/// feature this only prints a warning.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

/// Initialize a tracing subscriber with a custom filter. Without the
/// `tracing` feature this only prints a warning.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing_with_filter(_filter: &str) {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}
