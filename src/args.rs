use clap::Parser;
use github_client::{DEFAULT_GITHUB_URL, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use strum_macros::{Display, EnumString};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// GitHub user name
    #[clap(short, long, env = "GITHUB_USER", parse(try_from_str=non_empty))]
    pub user: String,

    /// Repository API URL
    #[clap(long, env, default_value = DEFAULT_GITHUB_URL)]
    pub api_url: String,

    /// User-Agent header sent to the API
    #[clap(long, env, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Directory the CSV and PDF files are written to
    #[clap(short, long, env, default_value = ".")]
    pub out_dir: PathBuf,

    /// Files to export: none, csv, pdf, chart or all
    #[clap(short, long, env, default_value = "all")]
    pub export: Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Export {
    None,
    Csv,
    Pdf,
    Chart,
    All,
}

impl Export {
    pub fn csv(self) -> bool {
        matches!(self, Export::Csv | Export::All)
    }

    pub fn pdf(self) -> bool {
        matches!(self, Export::Pdf | Export::All)
    }

    pub fn chart(self) -> bool {
        matches!(self, Export::Chart | Export::All)
    }
}

fn non_empty(value: &str) -> clap::Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("user name must not be empty.".to_string());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_test() {
        let args = Args::try_parse_from(["portfolio_analyzer", "--user", " octocat "]).unwrap();
        assert_eq!(args.user, "octocat");
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert_eq!(args.export, Export::All);
    }

    #[test]
    fn export_test() {
        let args = Args::try_parse_from(["portfolio_analyzer", "-u", "octocat", "-e", "pdf"]).unwrap();
        assert!(!args.export.csv());
        assert!(args.export.pdf());
        assert!(!args.export.chart());
        let args = Args::try_parse_from(["portfolio_analyzer", "-u", "octocat", "-e", "chart"]).unwrap();
        assert_eq!(args.export, Export::Chart);
        assert!(args.export.chart() && !args.export.csv() && !args.export.pdf());
        assert!(Args::try_parse_from(["portfolio_analyzer", "-u", "octocat", "-e", "xls"]).is_err());
    }

    #[test]
    fn blank_user_test() {
        assert!(Args::try_parse_from(["portfolio_analyzer", "--user", "   "]).is_err());
    }
}
