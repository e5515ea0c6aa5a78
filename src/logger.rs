use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `level` replaces the global level; module directives from `RUST_LOG`
/// still apply.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
