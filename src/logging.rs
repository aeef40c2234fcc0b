use std::io::Write;
use std::sync::Once;

/// Logger configuration.
///
/// `level` applies to this crate's records and never drops below `Info`,
/// so the per-icon lines always reach the console. Other crates only get
/// through at `Warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Info,
        }
    }
}

/// Level actually applied to this crate's records.
pub fn effective_level(config: &LoggingConfig) -> log::LevelFilter {
    config.level.max(log::LevelFilter::Info)
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Records go to stdout as bare message lines, so the console shows
/// `Generated icons/icon16.png` rather than a timestamped record. The
/// environment is not consulted.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder
            .filter_level(log::LevelFilter::Warn)
            .filter_module(env!("CARGO_CRATE_NAME"), effective_level(&config))
            .target(env_logger::Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}", record.args()));

        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_never_hides_icon_lines() {
        let quiet = LoggingConfig {
            level: log::LevelFilter::Off,
        };
        assert_eq!(effective_level(&quiet), log::LevelFilter::Info);
        assert_eq!(
            effective_level(&LoggingConfig::default()),
            log::LevelFilter::Info
        );

        let verbose = LoggingConfig {
            level: log::LevelFilter::Debug,
        };
        assert_eq!(effective_level(&verbose), log::LevelFilter::Debug);
    }
}
