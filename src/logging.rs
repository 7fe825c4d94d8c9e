use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Install the stderr subscriber
/// `RUST_LOG` or `CITYROUTE_LOG` override the level picked from the flags
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), TryInitError> {
    let level = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("cityroute={level}"),
        (true, None) => "cityroute=debug".to_string(),
        (false, None) => "cityroute=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CITYROUTE_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
}
