/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub default_directive: String,
}

impl TracingConfig {
    pub const DEFAULT_DIRECTIVE: &'static str = "info,summarizer_agent=debug,tower_http=debug";

    pub fn new(environment: impl Into<String>, json_format: bool, level: &str) -> Self {
        let level = level.trim();
        Self {
            environment: environment.into(),
            json_format,
            default_directive: if level.is_empty() {
                Self::DEFAULT_DIRECTIVE.to_string()
            } else {
                level.to_string()
            },
        }
    }
}
