use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-profile-viewer")]
#[command(about = "GitHub Profile Viewer - Shows a user's profile, repositories and languages")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username to look up. Starts an interactive session when omitted
    pub username: Option<String>,

    /// Only show repositories whose name contains this text
    #[arg(long, requires = "username")]
    pub filter: Option<String>,

    /// Show every repository instead of the first ten
    #[arg(long, requires = "username")]
    pub all: bool,

    /// Flip the stored colour theme and exit
    #[arg(long, conflicts_with = "username")]
    pub toggle_theme: bool,

    /// Profile API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "VIEWER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// File holding the theme preference
    #[arg(long, env = "VIEWER_STATE_FILE", default_value = ".github-profile-viewer.json")]
    pub state_file: PathBuf,

    /// Print repository cards without the staggered reveal
    #[arg(long)]
    pub no_animate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_args() {
        let cli = Cli::try_parse_from(["github-profile-viewer", "octocat", "--filter", "hello", "--all"])
            .unwrap();
        assert_eq!(cli.username.as_deref(), Some("octocat"));
        assert_eq!(cli.filter.as_deref(), Some("hello"));
        assert!(cli.all);
    }

    #[test]
    fn test_filter_requires_username() {
        assert!(Cli::try_parse_from(["github-profile-viewer", "--filter", "x"]).is_err());
    }

    #[test]
    fn test_toggle_theme_conflicts_with_username() {
        assert!(Cli::try_parse_from(["github-profile-viewer", "octocat", "--toggle-theme"]).is_err());
    }
}
