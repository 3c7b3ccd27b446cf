use std::io;
use tracing_subscriber::fmt;

/// Accepted values of `--log-level`.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Install a stderr subscriber at `level`. Without a level nothing is logged,
/// so stdout stays clean for piping.
pub fn init(level: Option<tracing::Level>) {
    if let Some(level) = level {
        let format = fmt::format().without_time().with_target(false).compact();
        fmt()
            .with_max_level(level)
            .event_format(format)
            .with_writer(io::stderr)
            .init();
    }
}
