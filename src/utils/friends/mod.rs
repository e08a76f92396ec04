use tracing::{debug, info};

use crate::{
    configuration::Settings,
    modules::{
        activity::{ActivityRecord, ActivitySearch},
        external_api::HttpClient,
        token::{TokenSource, XboxToken},
    },
    utils::profile::fetch_gamertag,
};

use self::{
    errors::FriendError,
    models::{FriendFilter, FriendStatus},
};

pub mod errors;
pub mod models;

pub async fn fetch_friends(
    client: &HttpClient,
    settings: &Settings,
    search: &dyn ActivitySearch,
    src: &dyn TokenSource,
    filter: FriendFilter,
) -> Result<Vec<FriendStatus>, FriendError> {
    let presence = &settings.presence;
    let activities = search
        .search(src, presence.social_group, presence.service_config_id)
        .await
        .map_err(FriendError::Search)?;

    let token = src.token().map_err(FriendError::Token)?;

    let matching = select_activities(activities, &presence.title_id, &token.xuid, filter);
    debug!(
        "{} {filter:?} activities for title {}",
        matching.len(),
        presence.title_id
    );

    let mut friends = Vec::with_capacity(matching.len());
    for activity in matching {
        let gamertag = resolve_gamertag(client, settings, &token, &activity.owner_xuid).await;
        friends.push(FriendStatus::new(gamertag, activity));
    }

    info!("Found {} {filter:?} friends", friends.len());
    Ok(friends)
}

/// Keeps activities of `title_id` not owned by `self_xuid`, narrowed by `filter`.
pub fn select_activities(
    activities: Vec<ActivityRecord>,
    title_id: &str,
    self_xuid: &str,
    filter: FriendFilter,
) -> Vec<ActivityRecord> {
    activities
        .into_iter()
        .filter(|activity| activity.title_id == title_id && activity.owner_xuid != self_xuid)
        .filter(|activity| match filter {
            FriendFilter::Online => true,
            FriendFilter::Joinable => activity.is_joinable(),
        })
        .collect()
}

async fn resolve_gamertag(
    client: &HttpClient,
    settings: &Settings,
    token: &XboxToken,
    xuid: &str,
) -> String {
    fetch_gamertag(client, &settings.profile, token, xuid)
        .await
        .unwrap_or_else(|e| {
            debug!("Falling back to XUID {xuid}: {e}");
            xuid.to_string()
        })
}
