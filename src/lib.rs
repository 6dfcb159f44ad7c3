mod args;

pub use args::{Args, Export};

use github_client::GithubClientBuilder;
use portfolio::api::Result;
use portfolio::export;
use portfolio::{Analysis, PortfolioAnalyzer};
use std::path::PathBuf;

/// Fetches the repositories of `args.user` and computes the report.
///
/// `None` means there is nothing to show: the user has no public repositories or the request was rejected.
pub async fn analyze_portfolio(args: &Args) -> Result<Option<Analysis>> {
    let client = GithubClientBuilder::default()
        .with_github_url(&args.api_url)
        .try_with_user_agent(&args.user_agent)?
        .build()?;
    PortfolioAnalyzer::new(client).analyze(&args.user).await
}

/// Writes the requested exports into `args.out_dir` and returns their paths.
pub fn export_analysis(analysis: &Analysis, args: &Args) -> Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();
    if args.export.csv() {
        artifacts.push(export::csv_artifact(&analysis.records)?);
    }
    if args.export.pdf() {
        artifacts.push(export::pdf_artifact(&analysis.user, &analysis.summary, &analysis.records)?);
    }
    if args.export.chart() {
        artifacts.push(export::chart_artifact(&analysis.summary)?);
    }
    if artifacts.is_empty() {
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(&args.out_dir)?;
    artifacts
        .iter()
        .map(|artifact| artifact.write_to(&args.out_dir))
        .collect()
}
