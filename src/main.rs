use clap::Parser;
use env_logger::Env;
use portfolio::api::Error;
use portfolio::report;
use portfolio_analyzer_app::Args;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let analysis = match portfolio_analyzer_app::analyze_portfolio(&args).await? {
        Some(analysis) => analysis,
        None => {
            println!("Nothing to show for {}.", args.user);
            return Ok(());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "GitHub Portfolio Analyzer: {}", analysis.user)?;
    writeln!(out)?;
    report::write_report(&mut out, &analysis.summary, &analysis.records)?;

    let written = portfolio_analyzer_app::export_analysis(&analysis, &args)?;
    if !written.is_empty() {
        writeln!(out)?;
    }
    for path in written {
        writeln!(out, "Saved {}", path.display())?;
    }
    Ok(())
}
