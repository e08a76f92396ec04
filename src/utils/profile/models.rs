use serde::{de, Deserialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_users: Vec<ProfileUser>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: Vec<ProfileSetting>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetting {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl ProfileResponse {
    pub fn into_first_value(self) -> Option<String> {
        self.profile_users
            .into_iter()
            .next()?
            .settings
            .into_iter()
            .next()
            .map(|setting| setting.value)
    }
}

// the profile service sends `null` for absent lists and values
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: de::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let val: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(val.unwrap_or_default())
}
