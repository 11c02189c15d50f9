/// Locale codes shared across crates
pub const DEFAULT_LOCALE_CODE: &str = "en";

pub const NB_LANGUAGE: &str = "nb";
pub const NB_REGION: &str = "NO";
pub const NB_NO_LOCALE_CODE: &str = "nb-no";

/// Configuration sources
pub const CONFIG_FILE_STEM: &str = "config";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_EXPAND_LIMIT: u16 = 100;
