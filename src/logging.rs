use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Events go to stderr so stdout only ever carries the printed version. `RUST_LOG`
/// overrides the level chosen by `verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .try_init();
}
