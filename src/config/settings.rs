// Configuration structs

use super::colors::DangerColors;
use super::constants::*;
use crate::session::SessionOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Feature flags configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Enable debug logging for troubleshooting
    #[serde(default)]
    pub debug_logging: bool,
}

/// Live-input tracker tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_insert_delay_ms")]
    pub insert_delay_ms: u64,

    /// Prompt suffixes cut from the cursor line before lookup
    #[serde(default = "default_prompt_markers")]
    pub prompt_markers: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            insert_delay_ms: default_insert_delay_ms(),
            prompt_markers: default_prompt_markers(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Program spawned for the session
    #[serde(default = "default_shell")]
    pub shell: String,

    #[serde(default = "default_shell_args")]
    pub shell_args: Vec<String>,

    /// TERM exported to the shell
    #[serde(default = "default_term")]
    pub term: String,

    /// Extra environment variables for the shell
    #[serde(default)]
    pub environment: BTreeMap<String, String>,

    /// Working directory of the shell (default: home)
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Start without a shell capability
    #[serde(default)]
    pub demo: bool,

    /// Emulator scrollback rows
    #[serde(default = "default_scrollback")]
    pub scrollback: usize,

    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub colors: DangerColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            shell_args: default_shell_args(),
            term: default_term(),
            environment: BTreeMap::new(),
            workdir: None,
            demo: false,
            scrollback: default_scrollback(),
            tracker: TrackerConfig::default(),
            features: FeaturesConfig::default(),
            colors: DangerColors::default(),
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.shell.trim().is_empty() {
            anyhow::bail!(
                "shell must not be empty\n\n\
                 Set a program in ~/{}/{}, e.g.:\n  shell = \"/bin/bash\"",
                CONFIG_DIR_NAME,
                CONFIG_FILE_NAME
            );
        }

        if self.tracker.debounce_ms == 0 {
            anyhow::bail!(
                "tracker.debounce_ms must be at least 1 (default {})",
                DEFAULT_DEBOUNCE_MS
            );
        }

        if self.tracker.insert_delay_ms == 0 || self.tracker.insert_delay_ms > MAX_INSERT_DELAY_MS
        {
            anyhow::bail!(
                "tracker.insert_delay_ms must be between 1 and {} (got {}, default {})",
                MAX_INSERT_DELAY_MS,
                self.tracker.insert_delay_ms,
                DEFAULT_INSERT_DELAY_MS
            );
        }

        if self.scrollback == 0 || self.scrollback > MAX_SCROLLBACK {
            anyhow::bail!(
                "scrollback must be between 1 and {} (got {})",
                MAX_SCROLLBACK,
                self.scrollback
            );
        }

        Ok(())
    }

    /// Non-fatal problems, for the caller to log once a subscriber is installed
    pub fn warnings(&self) -> Vec<String> {
        [
            ("low", &self.colors.low),
            ("medium", &self.colors.medium),
            ("high", &self.colors.high),
        ]
        .into_iter()
        .filter(|(_, spec)| !spec.is_known())
        .map(|(level, spec)| {
            format!(
                "colors.{}: unknown color {:?}, falling back to white",
                level, spec
            )
        })
        .collect()
    }

    /// Shell working directory: configured, else home
    pub fn resolved_workdir(&self) -> Option<PathBuf> {
        self.workdir.clone().or_else(dirs::home_dir)
    }

    /// Everything a session needs to spawn and track the shell
    pub fn session_options(&self) -> SessionOptions {
        let mut environment = vec![("TERM".to_string(), self.term.clone())];
        environment.extend(
            self.environment
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        SessionOptions {
            program: self.shell.clone(),
            args: self.shell_args.clone(),
            environment,
            workdir: self.resolved_workdir(),
            debounce: Duration::from_millis(self.tracker.debounce_ms),
            insert_delay: Duration::from_millis(self.tracker.insert_delay_ms),
            prompt_markers: self.tracker.prompt_markers.clone(),
        }
    }
}

fn default_shell() -> String {
    std::env::var("SHELL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_SHELL.to_string())
}

fn default_shell_args() -> Vec<String> {
    vec!["-l".to_string()]
}

fn default_term() -> String {
    DEFAULT_TERM.to_string()
}

fn default_scrollback() -> usize {
    DEFAULT_SCROLLBACK
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_insert_delay_ms() -> u64 {
    DEFAULT_INSERT_DELAY_MS
}

fn default_prompt_markers() -> Vec<String> {
    DEFAULT_PROMPT_MARKERS.iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSpec;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shell_args, vec!["-l"]);
        assert_eq!(config.tracker.debounce_ms, 30);
        assert_eq!(config.tracker.insert_delay_ms, 50);
        assert_eq!(config.scrollback, 1000);
    }

    #[test]
    fn test_unknown_colors_are_warnings_not_errors() {
        let mut config = Config::default();
        assert!(config.warnings().is_empty());

        config.colors.medium = ColorSpec::Named("chartreuse".to_string());
        assert!(config.validate().is_ok());
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("colors.medium"));
        assert!(warnings[0].contains("chartreuse"));
    }

    #[test]
    fn test_validate_rejects_zero_debounce() {
        let mut config = Config::default();
        config.tracker.debounce_ms = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("debounce_ms"));
    }

    #[test]
    fn test_validate_rejects_insert_delay_bounds() {
        let mut config = Config::default();
        config.tracker.insert_delay_ms = 0;
        assert!(config.validate().is_err());
        config.tracker.insert_delay_ms = MAX_INSERT_DELAY_MS + 1;
        assert!(config.validate().is_err());
        config.tracker.insert_delay_ms = MAX_INSERT_DELAY_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_shell_and_scrollback() {
        let mut config = Config::default();
        config.shell = "   ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scrollback = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_options_export_term_first() {
        let mut config = Config::default();
        config.shell = "/bin/zsh".to_string();
        config.workdir = Some(PathBuf::from("/tmp"));
        config
            .environment
            .insert("LANG".to_string(), "zh_TW.UTF-8".to_string());

        let options = config.session_options();
        assert_eq!(options.program, "/bin/zsh");
        assert_eq!(
            options.environment,
            vec![
                ("TERM".to_string(), "xterm-256color".to_string()),
                ("LANG".to_string(), "zh_TW.UTF-8".to_string()),
            ]
        );
        assert_eq!(options.workdir, Some(PathBuf::from("/tmp")));
        assert_eq!(options.debounce, Duration::from_millis(30));
    }
}
