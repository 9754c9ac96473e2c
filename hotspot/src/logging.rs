use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax, eg. `"hotspot=debug"`.
/// When it is `None`, `RUST_LOG` is consulted, then `info` is used.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives
    pub env_filter: Option<String>,
    /// ANSI colouring behaviour
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install a global `env_logger` once. Later calls are ignored, as is a logger that
/// some other part of the host already installed.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style);
        if builder.try_init().is_ok() {
            log::debug!("[HOTSPOT_LOGGING] Logger installed");
        }
    });
}
