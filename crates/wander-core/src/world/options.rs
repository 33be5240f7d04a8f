//! Game options and configuration
//!
//! Options live in an rc file, one directive per line:
//!
//! ```text
//! # comments are ignored
//! OPTIONS=name:Ada,seed:42
//! OPTIONS=strict_take,!color
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::DEFAULT_MSGHISTORY;

/// Environment variable naming an rc file
pub const RC_ENV_VAR: &str = "WANDERRC";

/// User-configurable game options
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Player name shown in the status panel
    pub name: String,
    /// Gateway RNG seed; drawn from entropy when unset
    pub seed: Option<u64>,
    /// Refuse `take` while already carrying something
    pub strict_take: bool,
    /// Colored terminal output
    pub color: bool,
    /// Messages kept in the log
    pub msghistory: usize,
    /// Print the room description after every command
    pub verbose: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            name: "wanderer".to_string(),
            seed: None,
            strict_take: false,
            color: true,
            msghistory: DEFAULT_MSGHISTORY,
            verbose: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error reading {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl GameOptions {
    /// Default rc file location: `<config dir>/wander/wanderrc`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wander").join("wanderrc"))
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| OptionsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "loading options");
        Self::parse_config(&contents)
    }

    /// Resolve options from, in order: an explicit path, `$WANDERRC`, the
    /// default rc file. Missing implicit files fall back to defaults; a
    /// missing explicit file is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, OptionsError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let implicit = std::env::var_os(RC_ENV_VAR)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match implicit {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                debug!("no rc file found, using default options");
                Ok(Self::default())
            }
        }
    }

    /// Parse options from rc file contents
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    options.parse_option(opt.trim())?;
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }

        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };
        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "strict_take" => self.strict_take = value,
            "color" => self.color = value,
            "verbose" => self.verbose = value,
            "name" | "seed" | "msghistory" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "name" => self.name = value.to_string(),
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "msghistory" => {
                self.msghistory = value.parse().map_err(|_| invalid())?;
            }
            "strict_take" | "color" | "verbose" => {
                let flag = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Render these options back into rc file form
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                name.to_string()
            } else {
                format!("!{name}")
            }
        };

        let mut values = vec![
            format!("name:{}", self.name),
            format!("msghistory:{}", self.msghistory),
        ];
        if let Some(seed) = self.seed {
            values.push(format!("seed:{seed}"));
        }

        format!(
            "# World of Wander options\nOPTIONS={}\nOPTIONS={},{},{}\n",
            values.join(","),
            flag(self.strict_take, "strict_take"),
            flag(self.color, "color"),
            flag(self.verbose, "verbose"),
        )
    }
}
