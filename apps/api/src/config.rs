use anyhow::{bail, Context, Result};

const DEFAULT_PORT: &str = "8000";
const DEFAULT_MAX_INPUT_CHARS: &str = "15000";

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request text is cut to this many characters before parsing.
    pub max_input_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            max_input_chars: 15_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let max_input_chars = lookup("MAX_INPUT_CHARS")
            .unwrap_or_else(|| DEFAULT_MAX_INPUT_CHARS.to_string())
            .parse::<usize>()
            .context("MAX_INPUT_CHARS must be a non-negative integer")?;
        if max_input_chars == 0 {
            bail!("MAX_INPUT_CHARS must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_input_chars,
        })
    }
}
