use reqwest::StatusCode;
use tracing::debug;

use crate::{
    configuration::ProfileSettings,
    modules::{external_api::HttpClient, token::XboxToken},
};

use self::{errors::ProfileError, models::ProfileResponse};

pub mod errors;
pub mod models;

/// Looks up the gamertag of `xuid` through the profile settings endpoint.
pub async fn fetch_gamertag(
    client: &HttpClient,
    settings: &ProfileSettings,
    token: &XboxToken,
    xuid: &str,
) -> Result<String, ProfileError> {
    let url = settings.settings_url(xuid);
    let res = client
        .get_xbl(&url, token, settings.contract_version)
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        return Err(ProfileError::Status(status));
    }

    let body = res.bytes().await?;
    let profile = serde_json::from_slice::<ProfileResponse>(&body)?;

    let gamertag = profile
        .into_first_value()
        .ok_or_else(|| ProfileError::NotFound(xuid.to_string()))?;
    debug!("Resolved {xuid} to {gamertag}");

    Ok(gamertag)
}
