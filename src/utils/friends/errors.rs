use thiserror::Error;

#[derive(Error, Debug)]
pub enum FriendError {
    #[error("Failed to obtain token")]
    Token(#[source] anyhow::Error),
    #[error("Failed to search activities")]
    Search(#[source] anyhow::Error),
}
