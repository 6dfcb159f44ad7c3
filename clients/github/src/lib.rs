mod builder;

pub use builder::GithubClientBuilder;
pub use builder::{DEFAULT_GITHUB_URL, DEFAULT_USER_AGENT};

use async_trait::async_trait;
use log::{debug, warn};
use portfolio::api::{Error, RawRepo, Result};
use reqwest::Client;
use url::Url;

pub struct GithubClient {
    client: Client,
    github_url: Url,
}

impl GithubClient {
    /// `{github_url}/users/{user}/repos`, with `user` escaped as a single path segment.
    fn user_repos_url(&self, user: &str) -> Result<Url> {
        let mut url = self.github_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Error("API URL can not be a base URL."))?
            .pop_if_empty()
            .extend(&["users", user, "repos"]);
        Ok(url)
    }
}

#[async_trait]
impl portfolio::api::Client for GithubClient {
    async fn user_repos(&self, user: &str) -> Result<Vec<RawRepo>> {
        let request_url = self.user_repos_url(user)?;
        debug!("GET {}", request_url);
        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                "Error fetching data for {} ({}). Check the username or API rate limit.",
                user, status
            );
            return Ok(Vec::new());
        }
        Ok(response.json::<Vec<RawRepo>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::GithubClientBuilder;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use portfolio::api::Client;
    use serde_json::json;
    use std::sync::{Mutex, Once};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn user_repos_test() {
        let server = MockServer::start().await;
        let body = json!([{ "name": "hello-world", "stargazers_count": 1 }]);
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .and(header("User-Agent", "portfolio-analyzer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        let repos = client.user_repos("octocat").await.unwrap();
        assert_eq!(repos, body.as_array().unwrap().clone());
    }

    #[tokio::test]
    async fn not_found_is_empty_test() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost/repos"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        let repos = client.user_repos("ghost").await.unwrap();
        assert!(repos.is_empty());
    }

    struct CapturingLogger;

    static LOGGER: CapturingLogger = CapturingLogger;
    static LOGGER_INIT: Once = Once::new();
    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    /// Log records mentioning `needle` seen so far. Tests run in parallel, so filter by a unique value.
    fn logged(needle: &str) -> Vec<(Level, String)> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .cloned()
            .collect()
    }

    fn capture_logs() {
        LOGGER_INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
    }

    #[tokio::test]
    async fn not_found_warns_test() {
        capture_logs();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/missing-user-404/repos"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        assert!(client.user_repos("missing-user-404").await.unwrap().is_empty());

        let warnings: Vec<String> = logged("missing-user-404")
            .into_iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message)
            .collect();
        assert_eq!(warnings.len(), 1, "Expected one warning, got {:?}", warnings);
        assert!(warnings[0].contains("Error fetching data"));
        assert!(warnings[0].contains("404"));
    }

    #[tokio::test]
    async fn success_does_not_warn_test() {
        capture_logs();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/quiet-user-200/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        assert!(client.user_repos("quiet-user-200").await.unwrap().is_empty());
        assert!(logged("quiet-user-200").iter().all(|(level, _)| *level > Level::Warn));
    }

    #[tokio::test]
    async fn rate_limited_is_empty_test() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "API rate limit exceeded" })))
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        assert!(client.user_repos("anyone").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_is_escaped_test() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/a%2Fb/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        assert!(client.user_repos("a/b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn not_an_array_test() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();
        assert!(client.user_repos("octocat").await.is_err());
    }
}
