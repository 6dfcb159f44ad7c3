use crate::api::{Error, RawRepo, Result};
use crate::payload;
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Repositories not updated for more than this many whole days are stale.
pub const STALE_AFTER_DAYS: i64 = 365;

/// One row of the repository table.
///
/// Serde names double as CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Constructor)]
pub struct RepositoryRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Stars")]
    pub stars: u32,
    #[serde(rename = "Forks")]
    pub forks: u32,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Created At")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "Last Updated")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Has License")]
    pub has_license: bool,
    #[serde(rename = "Is Archived")]
    pub is_archived: bool,
    #[serde(rename = "Is Stale")]
    pub is_stale: bool,
}

impl RepositoryRecord {
    fn from_payload(repo: payload::Repo, reference: DateTime<Utc>) -> Self {
        RepositoryRecord {
            is_stale: is_stale(repo.updated_at, reference),
            name: repo.name,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            has_license: repo.license.is_some(),
            is_archived: repo.archived,
        }
    }
}

/// Maps raw API objects to records, keeping source order.
///
/// # Arguments
/// * `repos` - Objects as returned by [`crate::api::Client::user_repos`]
/// * `reference` - Snapshot time shared by every staleness check of one report
///
/// Fails on the first object missing a required field.
pub fn extract(repos: Vec<RawRepo>, reference: DateTime<Utc>) -> Result<Vec<RepositoryRecord>> {
    repos
        .into_iter()
        .enumerate()
        .map(|(index, repo)| {
            serde_json::from_value::<payload::Repo>(repo)
                .map(|repo| RepositoryRecord::from_payload(repo, reference))
                .map_err(|source| Error::MalformedRecord { index, source })
        })
        .collect()
}

/// Whole days elapsed since `updated_at` exceed [`STALE_AFTER_DAYS`].
pub fn is_stale(updated_at: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
    (reference - updated_at).num_days() > STALE_AFTER_DAYS
}
