use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for `room.rename_timeout_ms`. Room commands answer without
/// deferring, so channel lookup plus the rename wait must fit in Discord's
/// three second interaction window.
pub const MAX_RENAME_TIMEOUT_MS: u64 = 2500;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[discord]
token = ""  # Set via TOKEN or DISCORD_TOKEN env var
activity = "slava ReBRT"

[sekai]
api_base = "https://api.sekai.best"
status_url = "https://status.sekai.best/history/api"

[room]
rename_timeout_ms = 2000

[reactions]
trigger = "анти ю"  # Empty disables the auto reply
emoji = "<a:halal_antiyou:1463296137174974587>"

[logging]
level = "info"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct DiscordConfig {
    pub token: String,
    pub activity: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SekaiConfig {
    pub api_base: String,
    pub status_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoomConfig {
    pub rename_timeout_ms: u64,
}

impl RoomConfig {
    pub fn rename_timeout(&self) -> Duration {
        Duration::from_millis(self.rename_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReactionsConfig {
    pub trigger: String,
    pub emoji: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub discord: DiscordConfig,
    pub sekai: SekaiConfig,
    pub room: RoomConfig,
    pub reactions: ReactionsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.rebrt/rebrt.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(home.join(".rebrt").join("rebrt.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| anyhow!("Config path has no parent: {}", config_path.display()))?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .with_context(|| format!("creating {}", config_dir.display()))?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())
                .with_context(|| format!("writing {}", config_path.display()))?;
            eprintln!("Created default config: {}", config_path.display());
            eprintln!("Please edit this file or set environment variables.");
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.rebrt/rebrt.toml (auto-created if missing)
    /// 2. Local override: ./rebrt.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        // Later sources override earlier ones
        let mut config_builder = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("rebrt").required(false))
            .add_source(config::Environment::with_prefix("REBRT").separator("__"));

        // Convenience env var overrides (highest priority)
        for var in ["TOKEN", "DISCORD_TOKEN"] {
            if let Ok(token) = env::var(var) {
                config_builder = config_builder.set_override("discord.token", token)?;
            }
        }

        if let Ok(url) = env::var("SEKAI_API_BASE") {
            config_builder = config_builder.set_override("sekai.api_base", url)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the bot cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        let timeout_ms = self.room.rename_timeout_ms;
        if timeout_ms == 0 || timeout_ms > MAX_RENAME_TIMEOUT_MS {
            return Err(anyhow!(
                "room.rename_timeout_ms must be between 1 and {MAX_RENAME_TIMEOUT_MS}, got {timeout_ms}"
            ));
        }
        Ok(())
    }
}
