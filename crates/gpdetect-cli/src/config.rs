use gpdetect_hw::PLACEHOLDER_PORT;
use std::str::FromStr;

/// Output format for detection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown output format: {other} (expected text or json)")),
        }
    }
}

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port string dropped from detection results (default: "usb:"). Empty disables it.
    pub placeholder_port: String,
    /// Default output format when `--format` is not given.
    pub format: Format,
    /// Default model filter when `--model` is not given.
    pub model: Option<String>,
}

impl Config {
    /// Load configuration from `GPDETECT_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = match lookup("GPDETECT_FORMAT") {
            Some(v) => v.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring GPDETECT_FORMAT");
                Format::Text
            }),
            None => Format::Text,
        };

        Self {
            placeholder_port: lookup("GPDETECT_PLACEHOLDER_PORT")
                .unwrap_or_else(|| PLACEHOLDER_PORT.to_string()),
            format,
            model: lookup("GPDETECT_MODEL").filter(|m| !m.is_empty()),
        }
    }
}
