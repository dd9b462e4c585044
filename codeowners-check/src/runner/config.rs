//! Runner configuration.

use super::ConfigError;
use crate::ownership::ProbeMode;
use url::Url;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the listing endpoint accepts.
const MAX_PER_PAGE: u8 = 100;

/// Configuration for a CODEOWNERS check run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Account whose repositories are listed.
    account: String,
    /// GitHub token used for API calls.
    token: String,
    /// Base URL of the GitHub REST API.
    api_url: String,
    /// Page size for the listing request.
    per_page: Option<u8>,
    /// Classification of non-success probe statuses.
    mode: ProbeMode,
}

impl RunnerConfig {
    /// Creates a configuration against the public GitHub API.
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            per_page: None,
            mode: ProbeMode::default(),
        }
    }

    /// Sets a custom API base URL (e.g. a GitHub Enterprise host).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the listing page size.
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets how probe failures are classified.
    pub fn with_mode(mut self, mode: ProbeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the account name.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the listing page size.
    pub fn per_page(&self) -> Option<u8> {
        self.per_page
    }

    /// Returns the probe mode.
    pub fn mode(&self) -> ProbeMode {
        self.mode
    }

    /// Checks that every value is present and usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let account = self.account.trim();
        if account.is_empty() {
            return Err(ConfigError::Missing { field: "account" });
        }
        if !account
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Invalid {
                field: "account",
                message: format!("'{account}' may only contain ASCII letters, digits and '-'"),
            });
        }

        if self.token.trim().is_empty() {
            return Err(ConfigError::Missing { field: "token" });
        }

        let api_url = Url::parse(&self.api_url).map_err(|e| ConfigError::Invalid {
            field: "api_url",
            message: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                field: "api_url",
                message: format!("unsupported scheme '{}'", api_url.scheme()),
            });
        }

        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(ConfigError::Invalid {
                    field: "per_page",
                    message: format!("{per_page} is outside 1..={MAX_PER_PAGE}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_config() {
        let config = RunnerConfig::new("octocat", "ghp_token");

        assert!(config.validate().is_ok());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.per_page(), None);
        assert_eq!(config.mode(), ProbeMode::Lenient);
    }

    #[test]
    fn rejects_blank_account() {
        let result = RunnerConfig::new("  ", "ghp_token").validate();
        assert!(matches!(result, Err(ConfigError::Missing { field: "account" })));
    }

    #[test]
    fn rejects_account_with_slash() {
        let result = RunnerConfig::new("org/repo", "ghp_token").validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field: "account", .. })));

        for account in ["foo?x", "a b", "a#b", "ümlaut", "a.b"] {
            let result = RunnerConfig::new(account, "ghp_token").validate();
            assert!(
                matches!(result, Err(ConfigError::Invalid { field: "account", .. })),
                "{account} should be rejected"
            );
        }

        assert!(RunnerConfig::new("my-org-2", "ghp_token").validate().is_ok());
    }

    #[test]
    fn rejects_blank_token() {
        let result = RunnerConfig::new("octocat", "").validate();
        assert!(matches!(result, Err(ConfigError::Missing { field: "token" })));
    }

    #[test]
    fn rejects_bad_api_url() {
        let result = RunnerConfig::new("octocat", "ghp_token")
            .with_api_url("ftp://github.example.com")
            .validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field: "api_url", .. })));

        let result = RunnerConfig::new("octocat", "ghp_token")
            .with_api_url("not a url")
            .validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field: "api_url", .. })));
    }

    #[test]
    fn checks_per_page_bounds() {
        let config = RunnerConfig::new("octocat", "ghp_token");

        assert!(config.clone().with_per_page(100).validate().is_ok());
        assert!(matches!(
            config.clone().with_per_page(0).validate(),
            Err(ConfigError::Invalid { field: "per_page", .. })
        ));
        assert!(matches!(
            config.with_per_page(101).validate(),
            Err(ConfigError::Invalid { field: "per_page", .. })
        ));
    }
}
