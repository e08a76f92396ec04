pub mod activity;
pub mod external_api;
pub mod token;
