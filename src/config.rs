use crate::cli::Cli;
use crate::error::{Result, ViewerError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com/users/";
pub const REPOS_PER_PAGE: u32 = 100;

/// Settings for the HTTP client and the theme store.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Profile endpoint, always ending in `/`.
    pub api_base: Url,
    pub timeout: Duration,
    pub user_agent: String,
    pub per_page: u32,
    pub state_file: PathBuf,
    pub animate: bool,
}

impl ViewerConfig {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self::with_base(normalize_base(api_url)?))
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.timeout_secs == 0 {
            return Err(ViewerError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            timeout: Duration::from_secs(cli.timeout_secs),
            state_file: cli.state_file.clone(),
            animate: !cli.no_animate,
            ..Self::with_base(normalize_base(&cli.api_url)?)
        })
    }

    fn with_base(api_base: Url) -> Self {
        Self {
            api_base,
            timeout: Duration::from_secs(30),
            user_agent: format!("GitHub Profile Viewer/{}", env!("CARGO_PKG_VERSION")),
            per_page: REPOS_PER_PAGE,
            state_file: PathBuf::from(".github-profile-viewer.json"),
            animate: true,
        }
    }
}

/// Parse the base URL and make sure joining a username appends rather than
/// replaces the last path segment.
fn normalize_base(api_url: &str) -> Result<Url> {
    let mut base = Url::parse(api_url.trim())?;
    if base.cannot_be_a_base() {
        return Err(ViewerError::Config(format!("not a base URL: {}", api_url)));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
