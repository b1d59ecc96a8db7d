use std::env;

use anyhow::Result;

/// Port used when PORT is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Interface bound when KEYWORDS_BIND is unset.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so
/// anything here can also come from there.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TCP port for the HTTP service (PORT env var)
    pub port: u16,
    /// Address to bind (KEYWORDS_BIND env var)
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset, matching how hosting platforms tend to
    /// blank out variables rather than remove them.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => anyhow::bail!(
                    "PORT must be a number between 0 and 65535, got {raw:?}.\n\
                     Fix it in your environment or .env file."
                ),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            bind: get("KEYWORDS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
        })
    }

    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
