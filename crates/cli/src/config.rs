//! Runtime configuration, read from the environment once at startup.
//!
//! | variable               | values                      | default  |
//! |------------------------|-----------------------------|----------|
//! | `STOCKROOM_INPUT_MODE` | `abort`, `reprompt`         | `abort`  |
//! | `STOCKROOM_UNIQUE_IDS` | `true`/`false` (`1`/`0`, `yes`/`no`, `on`/`off`) | `false` |
//! | `STOCKROOM_LOG_FORMAT` | `pretty`, `json`            | `pretty` |
//!
//! The log filter itself comes from `RUST_LOG`.

use core::str::FromStr;

use stockroom_inventory::IdPolicy;
use stockroom_observability::LogFormat;

pub const INPUT_MODE_VAR: &str = "STOCKROOM_INPUT_MODE";
pub const UNIQUE_IDS_VAR: &str = "STOCKROOM_UNIQUE_IDS";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

/// What the console does with a value it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// End the session with `CliError::Parse`.
    #[default]
    Abort,
    /// Report the bad value and ask for the same field again.
    Reprompt,
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "reprompt" => Ok(Self::Reprompt),
            other => Err(format!("unknown input mode '{other}' (expected 'abort' or 'reprompt')")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub input_mode: InputMode,
    pub id_policy: IdPolicy,
    pub log_format: LogFormat,
}

impl Config {
    /// Read the process environment.
    ///
    /// Returns the config plus one message per variable that was set to an
    /// unusable value (and therefore fell back to its default). Logging is not
    /// initialised yet when this runs, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        let mut config = Config::default();

        if let Some(raw) = lookup(INPUT_MODE_VAR) {
            match raw.parse() {
                Ok(mode) => config.input_mode = mode,
                Err(e) => rejected.push(format!("{INPUT_MODE_VAR}: {e}; using default")),
            }
        }

        if let Some(raw) = lookup(UNIQUE_IDS_VAR) {
            match parse_flag(&raw) {
                Some(true) => config.id_policy = IdPolicy::RejectDuplicates,
                Some(false) => config.id_policy = IdPolicy::AllowDuplicates,
                None => rejected.push(format!(
                    "{UNIQUE_IDS_VAR}: '{}' is not a boolean; using default",
                    raw.trim()
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => rejected.push(format!("{LOG_FORMAT_VAR}: {e}; using default")),
            }
        }

        (config, rejected)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
