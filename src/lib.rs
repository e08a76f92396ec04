pub mod configuration;
pub mod modules;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use configuration::{get_config, Settings};
pub use modules::activity::{ActivityRecord, ActivitySearch, RelatedInfo, SocialGroup};
pub use modules::token::{TokenSource, XboxToken};
pub use state::PresenceClient;
pub use utils::friends::{errors::FriendError, models::FriendStatus};
pub use utils::profile::errors::ProfileError;
