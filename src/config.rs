// Configuration for the playground
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/hookbox/config.toml)
// 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: dirs::data_dir()
                .map(|d| d.join("hookbox").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
            file_prefix: "hookbox.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial color mode: "light" or "dark"
    pub color_mode: String,

    /// Paint the theme's background color (true) or keep the terminal's (false)
    pub use_theme_background: bool,

    /// How long toast notifications stay on screen
    pub toast_duration_ms: u64,

    /// Redraw tick interval for the event loop
    pub tick_rate_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: "dark".to_string(),
            use_theme_background: false,
            toast_duration_ms: 2000,
            tick_rate_ms: 200,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging section as loaded from the config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<PathBuf>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file contents - every field optional so partial files work
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    color_mode: Option<String>,
    use_theme_background: Option<bool>,
    toast_duration_ms: Option<u64>,
    tick_rate_ms: Option<u64>,
    #[serde(default)]
    logging: FileLogging,
}

impl Config {
    /// Load configuration: defaults, then config file, then environment
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(file) = Self::load_file() {
            config.apply_file(file);
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Path to the config file (~/.config/hookbox/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hookbox").join("config.toml"))
    }

    /// Write the default config template if no config file exists yet
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Err(e) = Self::write_template() {
            // Not fatal - run with defaults
            eprintln!("Warning: Could not write config template: {}", e);
        }
    }

    /// Write the commented default template, returning its path
    pub fn write_template() -> Result<PathBuf> {
        let path = Self::config_path().context("Could not determine config directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::template())
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(path)
    }

    fn template() -> &'static str {
        r#"# Hookbox configuration
# Values here are overridden by HOOKBOX_* environment variables.

# Initial color mode: "light" or "dark"
# color_mode = "dark"

# Paint the theme's background color instead of the terminal's default
# use_theme_background = false

# How long toast notifications stay on screen (milliseconds)
# toast_duration_ms = 2000

# Redraw tick interval (milliseconds)
# tick_rate_ms = 200

[logging]
# Log level: trace, debug, info, warn, error
# level = "info"

# Also write logs to rotating files
# file_enabled = false
# file_dir = "~/.local/share/hookbox/logs"
# file_prefix = "hookbox.log"
# file_rotation = "daily"   # hourly | daily | never
"#
    }

    fn load_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let contents = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&contents) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Apply values from the config file over the defaults
    fn apply_file(&mut self, file: FileConfig) {
        if let Some(mode) = file.color_mode {
            self.color_mode = mode;
        }
        if let Some(bg) = file.use_theme_background {
            self.use_theme_background = bg;
        }
        if let Some(ms) = file.toast_duration_ms {
            self.toast_duration_ms = ms;
        }
        if let Some(ms) = file.tick_rate_ms {
            self.tick_rate_ms = ms;
        }
        if let Some(level) = file.logging.level {
            self.logging.level = level;
        }
        if let Some(enabled) = file.logging.file_enabled {
            self.logging.file_enabled = enabled;
        }
        if let Some(dir) = file.logging.file_dir {
            self.logging.file_dir = dir;
        }
        if let Some(prefix) = file.logging.file_prefix {
            self.logging.file_prefix = prefix;
        }
        if let Some(rotation) = file.logging.file_rotation {
            self.logging.file_rotation = LogRotation::from_name(&rotation);
        }
    }

    /// Apply environment overrides. Takes a lookup closure so tests can
    /// inject variables without touching the real process environment.
    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(mode) = get("HOOKBOX_MODE") {
            self.color_mode = mode;
        }
        if let Some(bg) = get("HOOKBOX_USE_THEME_BG") {
            self.use_theme_background = bg == "1" || bg.eq_ignore_ascii_case("true");
        }
        if let Some(ms) = get("HOOKBOX_TOAST_DURATION_MS") {
            if let Ok(ms) = ms.parse() {
                self.toast_duration_ms = ms;
            }
        }
        if let Some(level) = get("HOOKBOX_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(enabled) = get("HOOKBOX_LOG_FILE") {
            self.logging.file_enabled = enabled == "1" || enabled.eq_ignore_ascii_case("true");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.color_mode, "dark");
        assert_eq!(config.toast_duration_ms, 2000);
        assert!(!config.use_theme_background);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            color_mode = "light"
            toast_duration_ms = 500

            [logging]
            level = "debug"
            file_rotation = "hourly"
            "#,
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_file(file);

        assert_eq!(config.color_mode, "light");
        assert_eq!(config.toast_duration_ms, 500);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
        // Untouched fields keep defaults
        assert_eq!(config.tick_rate_ms, 200);
    }

    #[test]
    fn env_overrides_file() {
        let file: FileConfig = toml::from_str(r#"color_mode = "light""#).unwrap();
        let mut config = Config::default();
        config.apply_file(file);
        config.apply_env(|key| match key {
            "HOOKBOX_MODE" => Some("dark".to_string()),
            "HOOKBOX_USE_THEME_BG" => Some("true".to_string()),
            _ => None,
        });

        assert_eq!(config.color_mode, "dark");
        assert!(config.use_theme_background);
    }

    #[test]
    fn malformed_env_numbers_are_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            "HOOKBOX_TOAST_DURATION_MS" => Some("not-a-number".to_string()),
            _ => None,
        });
        assert_eq!(config.toast_duration_ms, 2000);
    }

    #[test]
    fn partial_config_file_parses() {
        let file: FileConfig = toml::from_str("").unwrap();
        let mut config = Config::default();
        config.apply_file(file);
        assert_eq!(config.color_mode, "dark");
    }

    #[test]
    fn rotation_names() {
        assert_eq!(LogRotation::from_name("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::from_name("NEVER"), LogRotation::Never);
        assert_eq!(LogRotation::from_name("daily"), LogRotation::Daily);
        // Unknown values fall back to daily
        assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
    }
}
