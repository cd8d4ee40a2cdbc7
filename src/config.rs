use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;

/// Settings read from the process environment.
///
/// `PORT` is the only variable the service documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::default())
    }

    /// Build from an explicit variable map instead of the live environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(config::Environment::default().source(Some(vars)))
    }

    fn load(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(env)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Knobs for the mock pipeline that are not exposed through the environment.
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    /// Directory served at `/`. Relative paths resolve against the
    /// working directory the server is started from.
    pub static_dir: String,
    pub uploads_dir: String,
    pub audio_delay: Duration,
    pub text_delay: Duration,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            static_dir: ".".to_string(),
            uploads_dir: "uploads".to_string(),
            audio_delay: Duration::from_millis(1200),
            text_delay: Duration::from_millis(700),
        }
    }
}

impl TranslatorSettings {
    /// Same paths and limits, no artificial latency.
    pub fn without_delays(mut self) -> Self {
        self.audio_delay = Duration::ZERO;
        self.text_delay = Duration::ZERO;
        self
    }
}
