use tracing_subscriber::EnvFilter;

/// Initializes logging. `RUST_LOG` wins when set; otherwise `--verbose`
/// selects info-level output and the default is warnings only.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
