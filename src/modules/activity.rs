use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::token::TokenSource;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialGroup {
    #[default]
    People,
    Favorites,
}

impl SocialGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialGroup::People => "people",
            SocialGroup::Favorites => "favorites",
        }
    }
}

impl fmt::Display for SocialGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedInfo {
    #[serde(default)]
    pub closed: bool,
}

/// Multiplayer activity published by a member of the searched social group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub title_id: String,
    pub owner_xuid: String,
    #[serde(default)]
    pub related_info: Option<RelatedInfo>,
}

impl ActivityRecord {
    /// Joinable when the session carries related info that is not closed.
    pub fn is_joinable(&self) -> bool {
        self.related_info.as_ref().map_or(false, |info| !info.closed)
    }
}

/// Activity search backed by the multiplayer session directory.
#[async_trait]
pub trait ActivitySearch: Send + Sync {
    async fn search(
        &self,
        src: &dyn TokenSource,
        social_group: SocialGroup,
        service_config_id: Uuid,
    ) -> anyhow::Result<Vec<ActivityRecord>>;
}
