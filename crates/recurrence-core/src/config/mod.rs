use anyhow::Result;
use config::{Config, Environment, File, FileFormat, FileSourceFile, Source};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_EXPAND_LIMIT, DEFAULT_LOCALE_CODE, DEFAULT_TIMEZONE,
};
use crate::error::{CoreError, CoreResult};
use crate::types::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub describe: DescribeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescribeConfig {
    /// Locale code used when the caller does not supply one.
    pub default_locale: String,
    /// IANA zone that expanded occurrences are reported in.
    pub timezone: String,
    pub expand_limit: u16,
}

impl DescribeConfig {
    /// ## Summary
    /// Returns the configured default locale, resolved.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.default_locale)
    }

    /// ## Summary
    /// Parses the configured timezone name.
    ///
    /// ## Errors
    /// Returns an error if the name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<chrono_tz::Tz> {
        parse_timezone(&self.timezone)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads `Settings` from built-in defaults, then environment variables
    /// (`DESCRIBE__TIMEZONE=Europe/Oslo`), then an optional `config.toml`.
    /// Later sources override earlier ones, so the TOML file wins.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_sources(Self::environment(), Self::toml_file())
    }

    fn environment() -> Environment {
        Environment::default()
            .convert_case(config::Case::Snake)
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn toml_file() -> File<FileSourceFile, FileFormat> {
        File::with_name(CONFIG_FILE_NAME).required(false)
    }

    /// Layers `env` and then `file` over the built-in defaults.
    fn from_sources<F>(env: Environment, file: F) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("describe.default_locale", DEFAULT_LOCALE_CODE)?
            .set_default("describe.timezone", DEFAULT_TIMEZONE)?
            .set_default("describe.expand_limit", i64::from(DEFAULT_EXPAND_LIMIT))?
            .set_default("logging.level", "info")?
            .add_source(env)
            .add_source(file)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Exports a `.env` file into the process environment, if present, then
/// loads `Settings`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Parses an IANA timezone name such as `Europe/Oslo`.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the name is unknown.
pub fn parse_timezone(name: &str) -> CoreResult<chrono_tz::Tz> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|err| CoreError::ConfigError(format!("unknown timezone {name:?}: {err}")))
}
