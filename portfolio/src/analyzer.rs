use crate::api::{Client, Result};
use crate::record::{self, RepositoryRecord};
use crate::stats::Summary;
use chrono::{DateTime, Utc};
use log::debug;

/// Records and aggregates of one fetch snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub user: String,
    /// Snapshot time every staleness flag was computed against.
    pub reference: DateTime<Utc>,
    pub records: Vec<RepositoryRecord>,
    pub summary: Summary,
}

pub struct PortfolioAnalyzer<CLIENT>
where
    CLIENT: Client,
{
    client: CLIENT,
}

impl<CLIENT> PortfolioAnalyzer<CLIENT>
where
    CLIENT: Client,
{
    pub fn new(client: CLIENT) -> Self {
        PortfolioAnalyzer { client }
    }

    pub async fn analyze(&self, user: &str) -> Result<Option<Analysis>> {
        self.analyze_at(user, Utc::now()).await
    }

    /// Returns `None` when there is nothing to show, which includes rejected requests.
    pub async fn analyze_at(&self, user: &str, reference: DateTime<Utc>) -> Result<Option<Analysis>> {
        let repos = self.client.user_repos(user).await?;
        if repos.is_empty() {
            debug!("No repositories to show for {}", user);
            return Ok(None);
        }
        debug!("Fetched {} repositories of {}", repos.len(), user);
        let records = record::extract(repos, reference)?;
        let summary = Summary::of(&records);
        Ok(Some(Analysis {
            user: user.to_string(),
            reference,
            records,
            summary,
        }))
    }
}
