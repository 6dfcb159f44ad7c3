//! Plain-text rendering of a repository report.

use crate::record::RepositoryRecord;
use crate::stats::{self, Summary};
use std::collections::BTreeMap;
use std::io::{self, Write};
use strum_macros::Display;

/// Total stars a profile needs before it is called star-worthy.
pub const STAR_WORTHY_THRESHOLD: u64 = 50;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Insight {
    #[strum(to_string = "Your GitHub is active and star-worthy! Great job maintaining your repositories.")]
    Active,
    #[strum(
        to_string = "Consider refreshing older projects and adding good READMEs or licenses to enhance your profile."
    )]
    Refresh,
}

impl Insight {
    pub fn of(summary: &Summary, records: &[RepositoryRecord]) -> Self {
        if summary.total_stars > STAR_WORTHY_THRESHOLD && !stats::all_stale(records) {
            Insight::Active
        } else {
            Insight::Refresh
        }
    }
}

/// Records ordered by stars, most starred first. Equal star counts keep source order.
pub fn by_stars(records: &[RepositoryRecord]) -> Vec<&RepositoryRecord> {
    let mut sorted: Vec<&RepositoryRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted
}

pub fn write_report<W: Write>(out: &mut W, summary: &Summary, records: &[RepositoryRecord]) -> io::Result<()> {
    write_metrics(out, summary)?;
    writeln!(out)?;
    write_growth_chart(out, &summary.yearly)?;
    writeln!(out)?;
    write_health_table(out, records)?;
    writeln!(out)?;
    writeln!(out, "Summary Insight")?;
    writeln!(out, "{}", Insight::of(summary, records))
}

pub fn write_metrics<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Total Repositories: {}", summary.repo_count)?;
    writeln!(out, "Total Stars: {}", summary.total_stars)?;
    writeln!(out, "Top Language: {}", summary.top_language)
}

/// Horizontal bars, one per year, scaled to the busiest year.
pub fn write_growth_chart<W: Write>(out: &mut W, yearly: &BTreeMap<i32, usize>) -> io::Result<()> {
    writeln!(out, "Repository Growth Over Time")?;
    let max = yearly.values().copied().max().unwrap_or(0);
    for (year, count) in yearly {
        let len = bar_len(*count, max);
        writeln!(out, "{} | {:<width$} {}", year, "#".repeat(len), count, width = BAR_WIDTH)?;
    }
    Ok(())
}

fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    // never hide a non-empty year
    std::cmp::max((count * BAR_WIDTH + max / 2) / max, usize::from(count > 0))
}

const HEALTH_COLUMNS: [&str; 7] = [
    "Name",
    "Stars",
    "Forks",
    "Language",
    "Has License",
    "Is Archived",
    "Is Stale",
];

pub fn write_health_table<W: Write>(out: &mut W, records: &[RepositoryRecord]) -> io::Result<()> {
    writeln!(out, "Project Health Check")?;
    let rows: Vec<[String; 7]> = by_stars(records)
        .into_iter()
        .map(|record| {
            [
                record.name.clone(),
                record.stars.to_string(),
                record.forks.to_string(),
                record.language.clone().unwrap_or_default(),
                record.has_license.to_string(),
                record.is_archived.to_string(),
                record.is_stale.to_string(),
            ]
        })
        .collect();

    let mut widths = HEALTH_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = std::cmp::max(*width, cell.chars().count());
        }
    }

    write_row(out, &HEALTH_COLUMNS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}
