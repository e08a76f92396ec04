use config::{Config, ConfigError};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::info;
use uuid::{uuid, Uuid};

use crate::modules::activity::SocialGroup;

pub const MINECRAFT_TITLE_ID: &str = "1739947436";
pub const MINECRAFT_SERVICE_CONFIG_ID: Uuid = uuid!("4fc10100-5f7a-4470-899b-280835760c07");
pub const PROFILE_BASE_URL: &str = "https://profile.xboxlive.com";

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub presence: PresenceSettings,
    pub profile: ProfileSettings,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PresenceSettings {
    pub title_id: String,
    pub service_config_id: Uuid,
    pub social_group: SocialGroup,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            title_id: MINECRAFT_TITLE_ID.into(),
            service_config_id: MINECRAFT_SERVICE_CONFIG_ID,
            social_group: SocialGroup::People,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ProfileSettings {
    pub base_url: String,
    pub contract_version: u8,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ProfileSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn settings_url(&self, xuid: &str) -> String {
        format!(
            "{}/users/xuid({xuid})/profile/settings?settings=Gamertag",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            base_url: PROFILE_BASE_URL.into(),
            contract_version: 2,
            timeout_secs: 10,
            user_agent: "xbox-friends".into(),
        }
    }
}

/// Reads `configuration/settings.toml` under the current directory (when present)
/// and `APP_` prefixed environment variables on top of the built-in defaults.
pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    get_config_from(base_path.join("configuration"))
}

pub fn get_config_from(config_dir: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let settings_file = config_dir.as_ref().join("settings.toml");
    info!("Loading settings from {}", settings_file.display());

    let settings = Config::builder()
        .add_source(config::File::from(settings_file).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );
    settings.build()?.try_deserialize()
}
