#![allow(dead_code)]

use async_trait::async_trait;
use github_profile_viewer::error::{Result, ViewerError};
use github_profile_viewer::github::ProfileApi;
use github_profile_viewer::models::{LanguageFrequency, ProfileSummary, Repository, ViewModel};
use github_profile_viewer::presenter::Presenter;
use std::sync::Mutex;
use std::time::Duration;

pub fn repo(name: &str, language: Option<&str>) -> Repository {
    Repository {
        name: name.to_string(),
        description: Some(format!("The {} project", name)),
        html_url: format!("https://github.com/octocat/{}", name),
        language: language.map(str::to_string),
        stargazers_count: 1,
        forks_count: 0,
    }
}

pub fn numbered_repos(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| repo(&format!("repo-{}", i), Some(if i % 3 == 0 { "Go" } else { "Rust" })))
        .collect()
}

pub fn profile(login: &str) -> ProfileSummary {
    ProfileSummary {
        login: login.to_string(),
        name: Some("The Octocat".to_string()),
        bio: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        followers: 20,
        following: 9,
        location: Some("San Francisco".to_string()),
        blog: Some("https://github.blog".to_string()),
        html_url: format!("https://github.com/{}", login),
        created_at: "2011-01-25T18:44:36Z".to_string(),
        repos_url: format!("https://api.github.com/users/{}/repos", login),
    }
}

/// Profile API stand-in. Unknown users answer like a 404; users without an
/// entry in `repos` fail the second call.
#[derive(Default)]
pub struct FakeApi {
    pub users: Vec<ProfileSummary>,
    pub repos: Vec<(String, Vec<Repository>)>,
    pub calls: Mutex<Vec<String>>,
    pub delay: Option<Duration>,
}

impl FakeApi {
    pub fn with_user(mut self, login: &str, repos: Vec<Repository>) -> Self {
        let profile = profile(login);
        self.repos.push((profile.repos_url.clone(), repos));
        self.users.push(profile);
        self
    }

    pub fn with_user_without_repos(mut self, login: &str) -> Self {
        self.users.push(profile(login));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn fetch_user(&self, username: &str) -> Result<ProfileSummary> {
        self.calls.lock().unwrap().push(format!("user:{}", username));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.users
            .iter()
            .find(|user| user.login == username)
            .cloned()
            .ok_or(ViewerError::NotFoundOrRateLimited)
    }

    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>> {
        self.calls.lock().unwrap().push(format!("repos:{}", repos_url));
        self.repos
            .iter()
            .find(|(url, _)| url == repos_url)
            .map(|(_, repos)| repos.clone())
            .ok_or_else(|| {
                ViewerError::RepositoriesUnavailable("API request failed with status 500".to_string())
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Loading(bool),
    Content(bool),
    Banner(bool),
    Profile(String),
    Repositories(ViewModel),
    Chart(LanguageFrequency),
    Error(String),
    ClearError,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<Event>,
}

impl RecordingPresenter {
    pub fn last_repositories(&self) -> Option<&ViewModel> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Repositories(view) => Some(view),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn set_loading(&mut self, loading: bool) {
        self.events.push(Event::Loading(loading));
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.events.push(Event::Content(visible));
    }

    fn set_idle_banner_visible(&mut self, visible: bool) {
        self.events.push(Event::Banner(visible));
    }

    fn render_profile(&mut self, profile: &ProfileSummary) {
        self.events.push(Event::Profile(profile.login.clone()));
    }

    fn render_repositories(&mut self, view: &ViewModel) {
        self.events.push(Event::Repositories(view.clone()));
    }

    fn render_chart(&mut self, languages: &LanguageFrequency) {
        self.events.push(Event::Chart(languages.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.events.push(Event::ClearError);
    }
}
