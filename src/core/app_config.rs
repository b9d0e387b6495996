use crate::model::config::{Config, ConfigTable};
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::model::log::system::SystemLog;
use std::fs;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::Path;

const CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        Self::load(Path::new(CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(toml_string) => Self::from_toml(&toml_string),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                SystemLog::ConfigNotFound.log_with_context(path.display());
                Ok(Self {
                    config: Config::default(),
                })
            }
            Err(err) => Err(SystemError::ConfigUnreadable {
                reason: err.to_string(),
            })?,
        }
    }

    pub fn from_toml(toml_string: &str) -> Result<Self, Error> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.message().to_string(),
            })?
            .config;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &Config) -> Result<(), SystemError> {
        if !Self::validate_extent(config.window_width) || !Self::validate_extent(config.window_height) {
            return Err(SystemError::InvalidConfig {
                reason: "window size must be positive".to_string(),
            });
        }
        let commands = &config.commands;
        let blank_program = [
            &commands.open_settings,
            &commands.open_account_settings,
            &commands.open_terminal,
            &commands.open_editor,
            &commands.open_music,
        ]
        .into_iter()
        .flatten()
        .any(|command| command.program.trim().is_empty());
        if blank_program {
            return Err(SystemError::InvalidConfig {
                reason: "command override without a program".to_string(),
            });
        }
        Ok(())
    }

    fn validate_extent(extent: f32) -> bool {
        extent.is_finite() && extent > 0.0
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
