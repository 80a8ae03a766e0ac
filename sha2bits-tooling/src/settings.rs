use std::fmt;
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::new().expect("invalid configuration");
}

const SETTINGS_PATH: &str = "./sha2bits.config.toml";
const PREFIX: &str = "SHA2BITS";

/// How a digest is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Hex,
    Bits,
    All,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "bits" => Ok(OutputFormat::Bits),
            "all" => Ok(OutputFormat::All),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format {:?}, expected one of hex, bits, all, json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Bits => "bits",
            OutputFormat::All => "all",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub message_path: String,
    pub trim_whitespace: bool,
    pub echo_message: bool,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            message_path: "message.txt".to_string(),
            trim_whitespace: true,
            echo_message: true,
            output_format: OutputFormat::Hex,
        }
    }
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        Settings::load(SETTINGS_PATH, PREFIX)
    }

    /// Reads the optional settings file at `path`, then environment variables
    /// named `{prefix}_{FIELD}`.
    pub fn load(path: &str, prefix: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()
    }
}
