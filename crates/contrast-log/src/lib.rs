// ABOUTME: Shared logging setup for contrast-grid binaries
// ABOUTME: Two functions: init() for everything at one level, init_for() for named crates

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Standard logging to stderr at `default_level`, RUST_LOG override.
/// Stdout stays free for rendered output.
pub fn init(default_level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

/// Crate-filtered logging to stderr. `level` for the named crates, WARN for
/// everything else.
pub fn init_for(crate_names: &[&str], level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(crate_filter(crate_names, level))
        .init();
}

fn crate_filter(crate_names: &[&str], level: Level) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(Level::WARN.into());
    for name in crate_names {
        let directive = format!("{name}={level}");
        filter = filter.add_directive(
            directive
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        );
    }
    filter
}
