use std::{env, path::PathBuf};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PROFILE_PATH: &str = "data.json";
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    /// Profile document rendered on `/`.
    pub profile_path: PathBuf,
    /// Directory holding the wasm bundle, served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// `PORT`, `BIND_ADDR`, `PROFILE_PATH` and `STATIC_DIR`, with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            profile_path: lookup("PROFILE_PATH")
                .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
