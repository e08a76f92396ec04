use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, Response,
};
use tracing::debug;

use crate::configuration::ProfileSettings;

use super::token::XboxToken;

pub const CONTRACT_VERSION_HEADER: &str = "x-xbl-contract-version";

#[derive(Clone, Debug)]
pub struct HttpClient(Client);

impl HttpClient {
    pub fn new(settings: &ProfileSettings) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;
        Ok(Self(client))
    }

    /// Sends an authorized GET to an Xbox Live service speaking the given contract version.
    pub async fn get_xbl(
        &self,
        url: &str,
        token: &XboxToken,
        contract_version: u8,
    ) -> reqwest::Result<Response> {
        debug!("GET {url}");
        self.0
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTRACT_VERSION_HEADER, contract_version.to_string())
            .header(AUTHORIZATION, token.authorization_header())
            .send()
            .await
    }
}
