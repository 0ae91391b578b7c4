use anyhow::Result;
use log::LevelFilter;

use crate::config::LoggingConfig;

/// Build and install the global logger from the logging configuration.
///
/// Logs go to stderr, or to `logging.file` when one is configured. When
/// logging is disabled the dispatch is still installed with everything
/// filtered out, so `log::` calls stay cheap no-ops.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = if config.enabled {
        parse_level(&config.level)
    } else {
        LevelFilter::Off
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply()?;
    Ok(())
}

fn parse_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
