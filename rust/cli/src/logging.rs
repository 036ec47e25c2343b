use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `tablestakes_engine=debug,warn`.
pub const LOG_ENV: &str = "TABLESTAKES_LOG";

/// Installs the global fmt subscriber writing to stderr.
///
/// Filter directives come from [`LOG_ENV`], defaulting to `warn`. Calling
/// this twice is harmless; the second call leaves the first subscriber in
/// place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
