//! Aggregates derived from a repository table. Nothing here is stored on records.

use crate::record::RepositoryRecord;
use chrono::Datelike;
use derive_more::{Constructor, Display};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TopLanguage {
    #[display(fmt = "{}", _0)]
    Language(String),
    #[display(fmt = "N/A")]
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Summary {
    pub repo_count: usize,
    pub total_stars: u64,
    pub top_language: TopLanguage,
    /// Repositories created per UTC calendar year, ascending.
    pub yearly: BTreeMap<i32, usize>,
}

impl Summary {
    pub fn of(records: &[RepositoryRecord]) -> Self {
        Summary::new(
            records.len(),
            total_stars(records),
            top_language(records),
            yearly_histogram(records),
        )
    }
}

pub fn total_stars(records: &[RepositoryRecord]) -> u64 {
    records.iter().map(|record| record.stars as u64).sum()
}

/// Most frequent non-null language. Ties go to the language seen first.
pub fn top_language(records: &[RepositoryRecord]) -> TopLanguage {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, language) in records
        .iter()
        .filter_map(|record| record.language.as_deref())
        .enumerate()
    {
        counts.entry(language).or_insert((0, index)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(language, _)| TopLanguage::Language(language.to_string()))
        .unwrap_or(TopLanguage::NotAvailable)
}

pub fn yearly_histogram(records: &[RepositoryRecord]) -> BTreeMap<i32, usize> {
    records.iter().fold(BTreeMap::new(), |mut yearly, record| {
        *yearly.entry(record.created_at.year()).or_insert(0) += 1;
        yearly
    })
}

/// True for an empty table as well.
pub fn all_stale(records: &[RepositoryRecord]) -> bool {
    records.iter().all(|record| record.is_stale)
}
