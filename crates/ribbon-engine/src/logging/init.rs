use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "ribbon_engine=trace,wgpu=warn"). When unset, `RUST_LOG` is consulted, and
/// failing that every target logs at `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that `init_logging` will apply.
    pub fn resolve_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok().filter(|f| !f.trim().is_empty()))
            .unwrap_or_else(|| self.default_level.as_str().to_ascii_lowercase())
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend once.
///
/// Subsequent calls are ignored. If another logger was installed first (e.g. by a
/// test harness), the failure is reported to stderr and logging stays with it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter();

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        if let Err(e) = builder.try_init() {
            eprintln!("ribbon logging not installed: {e}");
            return;
        }

        log::debug!("logging initialized (filter: {filter})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("ribbon_engine=trace".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_filter(), "ribbon_engine=trace");
    }

    #[test]
    fn default_level_renders_as_filter() {
        let config = LoggingConfig {
            default_level: log::LevelFilter::Warn,
            ..Default::default()
        };
        // RUST_LOG may be set by whoever runs the tests; only check the fallback shape.
        if std::env::var("RUST_LOG").map_or(true, |f| f.trim().is_empty()) {
            assert_eq!(config.resolve_filter(), "warn");
        }
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
