//! Plugin configuration.
//!
//! Operators restyle the player-facing messages and the operational log tag
//! through a `shardview.toml` next to the server, `SHARDVIEW_*` environment
//! variables, or programmatic overrides. Later sources win:
//!
//! 1. Built-in defaults
//! 2. TOML file
//! 3. Environment variables (`SHARDVIEW_MESSAGES__BALANCE=...`)
//! 4. Programmatic merge
//!
//! Environment values are parsed leniently as TOML, so a value that looks
//! like a TOML collection must be quoted to stay a string:
//! `SHARDVIEW_LOG_TAG='"[MyTag]"'` (unquoted, `[MyTag]` parses as a
//! sequence and extraction fails).

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use shardview_api::Shards;

use crate::error::ConfigError;

/// Player-facing message templates.
///
/// The balance template supports `{shards}` and `{diamonds}` placeholders;
/// the three advisories are fixed texts and must stay distinct from each
/// other so players can tell the failure modes apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    /// Success template; `{diamonds}` and `{shards}` are substituted.
    #[serde(default = "default_balance")]
    pub balance: String,
    /// Advisory shown while the economy is administratively off.
    #[serde(default = "default_economy_disabled")]
    pub economy_disabled: String,
    /// Advisory shown while the player's account is locked.
    #[serde(default = "default_account_locked")]
    pub account_locked: String,
    /// Generic advisory for any infrastructure failure. Never carries
    /// internal error detail.
    #[serde(default = "default_backend_failure")]
    pub backend_failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            balance: default_balance(),
            economy_disabled: default_economy_disabled(),
            account_locked: default_account_locked(),
            backend_failure: default_backend_failure(),
        }
    }
}

impl Messages {
    /// Renders the success message for a resolved balance.
    pub fn render_balance(&self, shards: Shards, diamonds: &str) -> String {
        self.balance
            .replace("{shards}", &shards.to_string())
            .replace("{diamonds}", diamonds)
    }
}

fn default_balance() -> String {
    "<aqua>Your balance is: <yellow>{diamonds}<aqua> (<yellow>{shards}<aqua> shards).".to_string()
}

fn default_economy_disabled() -> String {
    "<red>The economy is disabled.".to_string()
}

fn default_account_locked() -> String {
    "<red>Your account is temporarily locked for transactions.".to_string()
}

fn default_backend_failure() -> String {
    "<red>Failed to fetch your balance.".to_string()
}

/// Root configuration for the plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Tag prepended to operational log lines.
    #[serde(default = "default_log_tag")]
    pub log_tag: String,

    /// Player-facing message templates.
    #[serde(default)]
    pub messages: Messages,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            log_tag: default_log_tag(),
            messages: Messages::default(),
        }
    }
}

fn default_log_tag() -> String {
    "[Shardview]".to_string()
}

/// Figment-backed configuration loader.
///
/// ```rust,ignore
/// let config = ConfigLoader::new()
///     .file("shardview.toml")
///     .with_env()
///     .load()?;
/// ```
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Creates a loader seeded with the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(PluginConfig::default())),
        }
    }

    /// Merges a TOML file. Missing files are treated as empty.
    pub fn file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.figment = self.figment.merge(Toml::file(path));
        self
    }

    /// Merges `SHARDVIEW_*` environment variables, `__` separating nesting
    /// levels. Values are parsed as TOML; see the module docs for quoting
    /// bracketed strings.
    pub fn with_env(mut self) -> Self {
        self.figment = self.figment.merge(Env::prefixed("SHARDVIEW_").split("__"));
        self
    }

    /// Merges a programmatic override on top of everything loaded so far.
    pub fn merge(mut self, config: PluginConfig) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(config));
        self
    }

    /// Extracts the final configuration.
    pub fn load(self) -> Result<PluginConfig, ConfigError> {
        Ok(self.figment.extract()?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_source() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.log_tag, "[Shardview]");
        assert!(config.messages.balance.contains("{shards}"));
        assert!(config.messages.balance.contains("{diamonds}"));
    }

    #[test]
    fn advisory_texts_are_distinct() {
        let messages = Messages::default();
        assert_ne!(messages.economy_disabled, messages.account_locked);
        assert_ne!(messages.economy_disabled, messages.backend_failure);
        assert_ne!(messages.account_locked, messages.backend_failure);
    }

    #[test]
    fn programmatic_merge_overrides_defaults() {
        let config = ConfigLoader::new()
            .merge(PluginConfig {
                log_tag: "[Custom]".to_string(),
                ..PluginConfig::default()
            })
            .load()
            .unwrap();
        assert_eq!(config.log_tag, "[Custom]");
        assert_eq!(config.messages.balance, default_balance());
    }

    // Kept as a single test: parallel tests must not race on the
    // SHARDVIEW_* variables.
    #[test]
    fn env_overrides_defaults() {
        unsafe {
            std::env::set_var("SHARDVIEW_LOG_TAG", "\"[EnvTag]\"");
            std::env::set_var("SHARDVIEW_MESSAGES__ACCOUNT_LOCKED", "<red>Env locked.");
        }
        let config = ConfigLoader::new().with_env().load();
        unsafe {
            std::env::remove_var("SHARDVIEW_LOG_TAG");
            std::env::remove_var("SHARDVIEW_MESSAGES__ACCOUNT_LOCKED");
        }

        let config = config.unwrap();
        // TOML-quoted bracketed value survives as a string.
        assert_eq!(config.log_tag, "[EnvTag]");
        assert_eq!(config.messages.account_locked, "<red>Env locked.");
        // Untouched fields keep their defaults.
        assert_eq!(config.messages.balance, default_balance());
    }

    #[test]
    fn balance_template_substitutes_both_placeholders() {
        let rendered = Messages::default().render_balance(Shards(1000), "111.11");
        assert!(rendered.contains("1000"));
        assert!(rendered.contains("111.11"));
    }
}
