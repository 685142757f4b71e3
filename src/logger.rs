use log::LevelFilter;

/// Initialize the process-wide logger at the given level.
///
/// The level acts as a default; `RUST_LOG` in the environment still takes
/// precedence, so a run can be made more verbose without changing flags.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
