use crate::types::{GitHubRepo, GitHubUser};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single repository as shown in the grid. Identity is `name`, unique within
/// one user's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
}

impl Repository {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => "No description provided.",
        }
    }
}

impl From<GitHubRepo> for Repository {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            html_url: repo.html_url,
            language: repo.language.filter(|lang| !lang.is_empty()),
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
        }
    }
}

/// Profile fields needed for the summary card plus the repositories link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub followers: u32,
    pub following: u32,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub html_url: String,
    pub created_at: String,
    pub repos_url: String,
}

impl ProfileSummary {
    /// The display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn bio_or_default(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.is_empty() => bio,
            _ => "No bio available.",
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }

    /// Website link. Bare hosts get an `https://` scheme.
    pub fn website(&self) -> Option<String> {
        let blog = self.blog.as_deref()?.trim();
        if blog.is_empty() {
            None
        } else if blog.starts_with("http") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{}", blog))
        }
    }

    /// Month and year the account was created, e.g. `Jan 2011`. Falls back to
    /// the raw timestamp if it cannot be parsed.
    pub fn joined(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

impl From<GitHubUser> for ProfileSummary {
    fn from(user: GitHubUser) -> Self {
        Self {
            login: user.login,
            name: user.name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            followers: user.followers,
            following: user.following,
            location: user.location,
            blog: user.blog,
            html_url: user.html_url,
            created_at: user.created_at,
            repos_url: user.repos_url,
        }
    }
}

/// Language name to number of repositories using it. Only languages with at
/// least one repository appear.
pub type LanguageFrequency = BTreeMap<String, u32>;

/// Render-ready slice of the repository list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub visible: Vec<Repository>,
    /// Number of repositories after filtering.
    pub total_count: usize,
    /// How many are hidden behind the show-more control.
    pub remaining_count: usize,
    pub show_expand_control: bool,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
