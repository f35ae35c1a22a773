use clap::Parser;
use colored::*;
use github_profile_viewer::cli::Cli;
use github_profile_viewer::config::ViewerConfig;
use github_profile_viewer::github::GitHubClient;
use github_profile_viewer::models::{LanguageFrequency, ProfileSummary, ViewModel};
use github_profile_viewer::orchestrator::{LoadState, ProfileFetchOrchestrator};
use github_profile_viewer::presenter::Presenter;
use github_profile_viewer::render::TerminalPresenter;
use github_profile_viewer::session::{self, Interrupt};
use github_profile_viewer::theme::{Theme, ThemeStore};
use std::io::Stdout;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so they don't interleave with the rendered profile
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    let themes = ThemeStore::new(&config.state_file);

    if cli.toggle_theme {
        let name = match themes.toggle()? {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        println!("Theme set to {}", name.bold());
        return Ok(());
    }

    let client = GitHubClient::new(&config)?;
    let mut orchestrator = ProfileFetchOrchestrator::new(client);
    let mut presenter = TerminalPresenter::new(std::io::stdout(), themes.load(), config.animate);

    match cli.username.as_deref() {
        Some(username) => {
            if !run_once(&cli, username, &mut orchestrator, &mut presenter).await {
                std::process::exit(1);
            }
        }
        None => {
            println!("{}", "GitHub Profile Viewer".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());
            let stdin = BufReader::new(tokio::io::stdin());
            let interrupt = Interrupt::ctrl_c();
            session::run(&mut orchestrator, &mut presenter, &themes, stdin, &interrupt).await?;
        }
    }

    Ok(())
}

/// Look up a single user, apply `--all` and `--filter`, then print the result
/// once. Returns false when the lookup failed.
async fn run_once(
    cli: &Cli,
    username: &str,
    orchestrator: &mut ProfileFetchOrchestrator<GitHubClient>,
    presenter: &mut TerminalPresenter<Stdout>,
) -> bool {
    let mut quiet = QuietPresenter;
    let state = orchestrator.load(username, &mut quiet).await.clone();
    match state {
        LoadState::Loaded => {
            if cli.all {
                orchestrator.expand(&mut quiet);
            }
            if let Some(filter) = &cli.filter {
                orchestrator.set_filter(filter, &mut quiet);
            }

            if let Some(profile) = orchestrator.profile() {
                presenter.render_profile(profile);
            }
            presenter.render_repositories(&orchestrator.controller().view());
            presenter.render_chart(orchestrator.languages());
            presenter.set_content_visible(true);
            presenter.reveal().await;
            true
        }
        LoadState::Failed(message) => {
            presenter.show_error(&message);
            false
        }
        LoadState::Idle | LoadState::Loading => true,
    }
}

/// Swallows intermediate renders so one-shot output is printed only once.
struct QuietPresenter;

impl Presenter for QuietPresenter {
    fn set_loading(&mut self, _loading: bool) {}
    fn set_content_visible(&mut self, _visible: bool) {}
    fn set_idle_banner_visible(&mut self, _visible: bool) {}
    fn render_profile(&mut self, _profile: &ProfileSummary) {}
    fn render_repositories(&mut self, _view: &ViewModel) {}
    fn render_chart(&mut self, _languages: &LanguageFrequency) {}
    fn show_error(&mut self, _message: &str) {}
    fn clear_error(&mut self) {}
}
