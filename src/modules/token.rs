use secrecy::{ExposeSecret, Secret};

/// XSTS token issued for the signed in user.
#[derive(Clone, Debug)]
pub struct XboxToken {
    pub xuid: String,
    pub user_hash: String,
    pub token: Secret<String>,
}

impl XboxToken {
    pub fn new(xuid: impl Into<String>, user_hash: impl Into<String>, token: Secret<String>) -> Self {
        Self {
            xuid: xuid.into(),
            user_hash: user_hash.into(),
            token,
        }
    }

    pub fn authorization_header(&self) -> String {
        format!("XBL3.0 x={};{}", self.user_hash, self.token.expose_secret())
    }
}

/// Supplies tokens for the signed in user. Acquisition and refresh live with the implementor.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> anyhow::Result<XboxToken>;
}
