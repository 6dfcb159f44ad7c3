use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Fields of a `GET /users/{user}/repos` item the analyzer reads.
///
/// Every field is required; `language` and `license` may be `null` but must be present.
#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(deserialize_with = "nullable")]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(deserialize_with = "nullable")]
    pub license: Option<IgnoredAny>,
    pub archived: bool,
}

// Plain `Option` fields would silently default to `None` when missing.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
