use crate::{
    configuration::Settings,
    modules::{activity::ActivitySearch, external_api::HttpClient, token::TokenSource},
    utils::friends::{
        errors::FriendError,
        fetch_friends,
        models::{FriendFilter, FriendStatus},
    },
};

/// Entry point for friend presence queries against a single title.
pub struct PresenceClient<S> {
    pub client: HttpClient,
    pub settings: Settings,
    pub search: S,
}

impl<S: ActivitySearch> PresenceClient<S> {
    pub fn new(settings: Settings, search: S) -> reqwest::Result<Self> {
        Ok(Self {
            client: HttpClient::new(&settings.profile)?,
            settings,
            search,
        })
    }

    /// Friends in the title whose session still accepts joiners.
    pub async fn joinable_friends(
        &self,
        src: &dyn TokenSource,
    ) -> Result<Vec<FriendStatus>, FriendError> {
        self.friends(src, FriendFilter::Joinable).await
    }

    /// Friends in the title regardless of session state.
    pub async fn online_friends(
        &self,
        src: &dyn TokenSource,
    ) -> Result<Vec<FriendStatus>, FriendError> {
        self.friends(src, FriendFilter::Online).await
    }

    async fn friends(
        &self,
        src: &dyn TokenSource,
        filter: FriendFilter,
    ) -> Result<Vec<FriendStatus>, FriendError> {
        fetch_friends(&self.client, &self.settings, &self.search, src, filter).await
    }
}
