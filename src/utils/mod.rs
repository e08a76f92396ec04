pub mod friends;
pub mod profile;
