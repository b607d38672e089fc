//! Application configuration.
//!
//! Values come from built-in defaults, then `~/.config/winzones/config.toml`,
//! then `WINZONES_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    contact::{DeepLink, DEFAULT_MESSAGING_BASE, DEFAULT_RESET_DELAY},
    content::SiteContent,
};

/// Directory under the user's config dir.
pub const CONFIG_DIR: &str = "winzones";
/// File name of the TOML config.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `WINZONES_OPEN_LINKS=false`.
pub const ENV_PREFIX: &str = "WINZONES";

const DEFAULT_CONFIG: &str = r#"# WinZones terminal site configuration.

# JSON file replacing the built-in site content.
# content_path = "/path/to/content.json"

# Messaging service the contact form hands off to.
messaging_base = "https://wa.me"

# Recipient for contact messages; defaults to the content's recipient_id.
# recipient_id = "918228822825"

# Seconds the success notice stays up before the form clears.
reset_delay_secs = 5

# Open the messaging link in the system browser after a submission.
open_links = true
"#;

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optional JSON document replacing the built-in content.
    pub content_path: Option<PathBuf>,
    /// Base URL of the messaging service.
    pub messaging_base: String,
    /// Overrides the content's messaging recipient.
    pub recipient_id: Option<String>,
    /// Delay before a submitted form clears itself.
    pub reset_delay_secs: u64,
    /// Whether submissions launch the link opener.
    pub open_links: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            messaging_base: DEFAULT_MESSAGING_BASE.to_string(),
            recipient_id: None,
            reset_delay_secs: DEFAULT_RESET_DELAY.as_secs(),
            open_links: true,
        }
    }
}

impl AppConfig {
    /// Load from the default location plus environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from `path` (which may be missing) plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// [`Self::reset_delay_secs`] as a duration.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }

    /// Load the configured content, or the built-in copy when none is set.
    pub fn site_content(&self) -> Result<SiteContent> {
        match &self.content_path {
            Some(path) => SiteContent::load(path)
                .with_context(|| format!("failed to load content from {}", path.display())),
            None => Ok(SiteContent::builtin()),
        }
    }

    /// Deep-link template for `content`, honouring the recipient override.
    pub fn deep_link(&self, content: &SiteContent) -> DeepLink {
        let recipient = self
            .recipient_id
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(&content.contact.recipient_id);
        DeepLink::new(&self.messaging_base, recipient)
    }
}

/// `~/.config/winzones/config.toml`, or a relative path when no config dir exists.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the commented default config if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_config_at(default_config_path())
}

/// Write the commented default config to `path` unless a file is already there.
pub fn ensure_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "Wrote default config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_file_matches_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);
        ensure_config_at(&path)?;
        assert!(path.exists());

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.messaging_base, DEFAULT_MESSAGING_BASE);
        assert_eq!(config.reset_delay(), DEFAULT_RESET_DELAY);
        assert!(config.open_links);
        assert!(config.content_path.is_none());
        Ok(())
    }

    #[test]
    fn existing_file_is_left_alone() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "reset_delay_secs = 9\nopen_links = false\n")?;
        ensure_config_at(&path)?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.reset_delay_secs, 9);
        assert!(!config.open_links);
        assert_eq!(config.messaging_base, DEFAULT_MESSAGING_BASE);
        Ok(())
    }

    #[test]
    fn missing_file_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.toml"))?;
        assert_eq!(config.reset_delay_secs, DEFAULT_RESET_DELAY.as_secs());
        Ok(())
    }

    #[test]
    fn recipient_override_wins() {
        let content = SiteContent::builtin();
        let mut config = AppConfig::default();
        assert_eq!(
            config.deep_link(&content).chat_url(),
            "https://wa.me/918228822825"
        );
        config.recipient_id = Some("+15550001111".into());
        config.messaging_base = "https://chat.example/".into();
        assert_eq!(
            config.deep_link(&content).chat_url(),
            "https://chat.example/15550001111"
        );
    }

    #[test]
    fn content_path_is_loaded() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("content.json");
        let mut content = SiteContent::builtin();
        content.games.truncate(2);
        fs::write(&path, serde_json::to_string(&content)?)?;

        let config = AppConfig {
            content_path: Some(path),
            ..AppConfig::default()
        };
        assert_eq!(config.site_content()?.games.len(), 2);
        Ok(())
    }
}
