use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub show_thread_ids: bool,
    pub show_targets: bool,
    /// Whether a fmt layer writes to stderr at all
    pub show_logs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::INFO,
            show_thread_ids: false,
            show_targets: true,
            show_logs: true,
        }
    }
}

impl LogConfig {
    /// Development configuration (verbose, human-readable)
    pub fn dev() -> Self {
        Self {
            default_level: tracing::Level::DEBUG,
            show_thread_ids: true,
            ..Default::default()
        }
    }

    /// TUI mode: the terminal belongs to ratatui, so nothing is printed
    pub fn tui() -> Self {
        Self {
            show_logs: false,
            ..Default::default()
        }
    }

    pub fn without_logs(mut self) -> Self {
        self.show_logs = false;
        self
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.default_level = level;
        self
    }

    /// Filter used when `RUST_LOG` is not set
    fn default_filter(&self) -> String {
        format!(
            "{}={level},pingpong_core={level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level = self.default_level
        )
    }

    pub fn init(self) -> Result<(), String> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        if self.show_logs {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(self.show_targets)
                .with_thread_ids(self.show_thread_ids);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        } else {
            // Silent mode: no fmt layer, just filter
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(|e| format!("Failed to initialize tracing: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, tracing::Level::INFO);
        assert!(config.show_logs);
        assert!(config.show_targets);
    }

    #[test]
    fn test_dev_config() {
        let config = LogConfig::dev();
        assert_eq!(config.default_level, tracing::Level::DEBUG);
        assert!(config.show_thread_ids);
        assert!(config.show_logs);
    }

    #[test]
    fn test_tui_config() {
        let config = LogConfig::tui();
        assert_eq!(config.default_level, tracing::Level::INFO);
        assert!(!config.show_logs);
    }

    #[test]
    fn test_without_logs() {
        let config = LogConfig::default().without_logs();
        assert!(!config.show_logs);
    }

    #[test]
    fn test_default_filter_names_both_crates() {
        let filter = LogConfig::default()
            .with_level(tracing::Level::WARN)
            .default_filter();
        assert_eq!(filter, "pingpong_cli=WARN,pingpong_core=WARN");
    }
}
