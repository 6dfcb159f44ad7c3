use crate::GithubClient;
use anyhow::Context;
use portfolio::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use url::Url;

pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "portfolio-analyzer";

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        Self {
            client_builder: ClientBuilder::default(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            headers,
        }
    }
}

impl GithubClientBuilder {
    /// GitHub rejects requests without a user agent, so one is always sent.
    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_github_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.github_url = url.as_ref().to_string();
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let client = self.client_builder.default_headers(self.headers).build()?;
        let github_url = Url::parse(&self.github_url).with_context(|| format!("Invalid API URL {}", self.github_url))?;
        if github_url.cannot_be_a_base() {
            return Err(portfolio::api::Error::Error("API URL can not be a base URL."));
        }
        Ok(GithubClient { client, github_url })
    }
}

#[cfg(test)]
mod tests {
    use super::GithubClientBuilder;

    #[test]
    fn invalid_url_test() {
        let result = GithubClientBuilder::default().with_github_url("not a url").build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_user_agent_test() {
        let result = GithubClientBuilder::default().try_with_user_agent("bad\nagent");
        assert!(result.is_err());
    }
}
