use serde::{Deserialize, Serialize};

use crate::modules::activity::ActivityRecord;

/// Friend currently playing the configured title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FriendStatus {
    pub gamertag: String,
    pub xuid: String,
    #[serde(rename = "titleId")]
    pub title_id: String,
}

impl FriendStatus {
    pub fn new(gamertag: String, activity: ActivityRecord) -> Self {
        Self {
            gamertag,
            xuid: activity.owner_xuid,
            title_id: activity.title_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendFilter {
    Online,
    Joinable,
}
