use tracing_subscriber::filter::EnvFilter;

use crate::config;

/// Logs go to stderr, so the report written to stdout stays clean.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn").add_directive(
            format!("{}={}", config::BIN_NAME, max_level(verbosity))
                .parse()
                .expect("a crate name and a level make a valid directive"),
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
