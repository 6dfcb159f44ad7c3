//! CSV and PDF exports of a repository report, built in memory.

use crate::api::Result;
use crate::chart;
use crate::record::RepositoryRecord;
use crate::report;
use crate::stats::Summary;
use anyhow::{anyhow, Context};
use derive_more::Constructor;
use log::{debug, info};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::{Path, PathBuf};

pub const CSV_FILE_NAME: &str = "github_repo_data.csv";
pub const CSV_MIME: &str = "text/csv";
pub const PDF_FILE_NAME: &str = "github_summary.pdf";
pub const PDF_MIME: &str = "application/pdf";
pub const CHART_FILE_NAME: &str = "repo_growth_timeline.svg";
pub const CHART_MIME: &str = "image/svg+xml";

/// Header row, in `RepositoryRecord` field order.
pub const CSV_COLUMNS: [&str; 9] = [
    "Name",
    "Stars",
    "Forks",
    "Language",
    "Created At",
    "Last Updated",
    "Has License",
    "Is Archived",
    "Is Stale",
];

/// Number of repositories listed under "Top Repositories".
pub const LEADERBOARD_SIZE: usize = 5;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;
const PT_TO_MM: f32 = 0.3528;

/// Downloadable output of one report.
#[derive(Debug, Constructor)]
pub struct Artifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.bytes)?;
        info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

pub fn csv_artifact(records: &[RepositoryRecord]) -> Result<Artifact> {
    Ok(Artifact::new(CSV_FILE_NAME, CSV_MIME, to_csv(records)?))
}

pub fn pdf_artifact(user: &str, summary: &Summary, records: &[RepositoryRecord]) -> Result<Artifact> {
    let lines = summary_document(user, summary, records);
    Ok(Artifact::new(PDF_FILE_NAME, PDF_MIME, render_pdf(user, &lines)?))
}

pub fn chart_artifact(summary: &Summary) -> Result<Artifact> {
    let svg = chart::growth_chart_svg(&summary.yearly)?;
    Ok(Artifact::new(CHART_FILE_NAME, CHART_MIME, svg.into_bytes()))
}

/// UTF-8 CSV with a header row and no index column. The header is written even without records.
pub fn to_csv(records: &[RepositoryRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS).context("Failed to write CSV header")?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write CSV row for {}", record.name))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV: {}", err.error()))?;
    debug!("CSV export: {} rows, {} bytes", records.len(), bytes.len());
    Ok(bytes)
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct DocumentLine {
    pub text: String,
    pub font_size: f32,
    /// Extra vertical space above the line, in mm.
    pub space_before: f32,
    pub centered: bool,
}

impl DocumentLine {
    fn body(text: String) -> Self {
        DocumentLine::new(text, 11.0, 0.0, false)
    }
}

/// Lines of the summary document: title, three totals and the leaderboard.
pub fn summary_document(user: &str, summary: &Summary, records: &[RepositoryRecord]) -> Vec<DocumentLine> {
    let mut lines = vec![
        DocumentLine::new(format!("GitHub Summary Report for {}", user), 12.0, 0.0, true),
        DocumentLine::new(format!("Total Repositories: {}", summary.repo_count), 11.0, LINE_HEIGHT, false),
        DocumentLine::body(format!("Total Stars: {}", summary.total_stars)),
        DocumentLine::body(format!("Top Language: {}", summary.top_language)),
        DocumentLine::new("Top Repositories:".to_string(), 11.0, LINE_HEIGHT, false),
    ];
    lines.extend(leaderboard(records).into_iter().map(|record| {
        DocumentLine::body(format!(
            "- {} | Stars: {} | {}",
            record.name,
            record.stars,
            record.language.as_deref().unwrap_or("N/A")
        ))
    }));
    lines
}

/// Most starred repositories, ties in source order.
pub fn leaderboard(records: &[RepositoryRecord]) -> Vec<&RepositoryRecord> {
    let mut top = report::by_stars(records);
    top.truncate(LEADERBOARD_SIZE);
    top
}

#[derive(Debug, PartialEq, Constructor)]
struct Placement {
    page: usize,
    x: f32,
    y: f32,
}

/// Baseline positions in mm from the bottom-left corner, moving to a new page at the bottom margin.
fn layout(lines: &[DocumentLine]) -> Vec<Placement> {
    let mut page = 0;
    let mut y = PAGE_HEIGHT - MARGIN;
    lines
        .iter()
        .map(|line| {
            y -= line.space_before + LINE_HEIGHT;
            if y < MARGIN {
                page += 1;
                y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT;
            }
            let x = if line.centered {
                // Helvetica glyphs average about half an em
                let width = line.text.chars().count() as f32 * line.font_size * 0.5 * PT_TO_MM;
                f32::max(MARGIN, (PAGE_WIDTH - width) / 2.0)
            } else {
                MARGIN
            };
            Placement::new(page, x, y)
        })
        .collect()
}

fn render_pdf(user: &str, lines: &[DocumentLine]) -> Result<Vec<u8>> {
    let title = format!("GitHub Summary Report for {}", user);
    let (doc, first_page, first_layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| anyhow!("Failed to load PDF font: {:?}", err))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut current_page = 0;
    for (line, placement) in lines.iter().zip(layout(lines)) {
        if placement.page != current_page {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            current_page = placement.page;
        }
        layer.use_text(line.text.clone(), line.font_size, Mm(placement.x), Mm(placement.y), &font);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|err| anyhow!("Failed to render PDF: {:?}", err))?;
    debug!("PDF export: {} pages, {} bytes", current_page + 1, bytes.len());
    Ok(bytes)
}
