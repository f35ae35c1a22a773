use crate::aggregate::aggregate;
use crate::controller::RepoListController;
use crate::error::{Result, ViewerError};
use crate::github::ProfileApi;
use crate::models::{LanguageFrequency, ProfileSummary, Repository, ViewModel};
use crate::presenter::Presenter;
use tracing::{debug, info, warn};

/// Progress of the current lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Runs a lookup end to end: profile, then repositories, then hands the
/// results to the list controller, the aggregator and the presenter.
///
/// Lookups take `&mut self`, so only one can be in flight. Dropping a lookup
/// future cancels its request; call [`ProfileFetchOrchestrator::cancel`]
/// afterwards to return to idle.
pub struct ProfileFetchOrchestrator<A: ProfileApi> {
    api: A,
    controller: RepoListController,
    profile: Option<ProfileSummary>,
    languages: LanguageFrequency,
    state: LoadState,
}

impl<A: ProfileApi> ProfileFetchOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: RepoListController::new(),
            profile: None,
            languages: LanguageFrequency::new(),
            state: LoadState::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn controller(&self) -> &RepoListController {
        &self.controller
    }

    pub fn profile(&self) -> Option<&ProfileSummary> {
        self.profile.as_ref()
    }

    pub fn languages(&self) -> &LanguageFrequency {
        &self.languages
    }

    /// Fetch the profile and then its repositories. The second call needs the
    /// repositories link from the first.
    pub async fn fetch_profile(&self, username: &str) -> Result<(ProfileSummary, Vec<Repository>)> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ViewerError::EmptyInput);
        }

        let profile = self.api.fetch_user(username).await?;
        debug!(username, repos_url = %profile.repos_url, "Fetched profile");

        let repos = self.api.fetch_repositories(&profile.repos_url).await?;
        debug!(username, count = repos.len(), "Fetched repositories");

        Ok((profile, repos))
    }

    /// Look up `username` and drive the presenter through loading, success or
    /// failure. A blank username does nothing.
    ///
    /// Errors end up in the error banner and in [`LoadState::Failed`]; they
    /// never leave this function. On failure the previously loaded list is
    /// kept but stays hidden.
    pub async fn load<P: Presenter>(&mut self, username: &str, presenter: &mut P) -> &LoadState {
        let username = username.trim();
        if username.is_empty() {
            return &self.state;
        }

        self.state = LoadState::Loading;
        presenter.set_content_visible(false);
        presenter.clear_error();
        presenter.set_loading(true);
        presenter.set_idle_banner_visible(false);

        match self.fetch_profile(username).await {
            Ok((profile, repos)) => {
                info!(username, count = repos.len(), "Loaded profile");

                self.languages = aggregate(&repos);
                let view = self.controller.load(repos);

                presenter.render_profile(&profile);
                presenter.render_repositories(&view);
                presenter.render_chart(&self.languages);
                presenter.set_loading(false);
                presenter.set_content_visible(true);

                self.profile = Some(profile);
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(username, error = %e, "Lookup failed");

                let message = e.to_string();
                presenter.set_loading(false);
                presenter.show_error(&message);
                presenter.set_idle_banner_visible(true);

                self.state = LoadState::Failed(message);
            }
        }

        &self.state
    }

    /// Return to idle after an in-flight lookup was dropped.
    pub fn cancel<P: Presenter>(&mut self, presenter: &mut P) {
        if self.state == LoadState::Loading {
            info!("Lookup cancelled");
            presenter.set_loading(false);
            presenter.set_idle_banner_visible(true);
            self.state = LoadState::Idle;
        }
    }

    /// Apply a filter and redraw the grid.
    pub fn set_filter<P: Presenter>(&mut self, text: &str, presenter: &mut P) -> ViewModel {
        let view = self.controller.set_filter(text);
        if self.state == LoadState::Loaded {
            presenter.render_repositories(&view);
        }
        view
    }

    /// Expand the list and redraw the grid.
    pub fn expand<P: Presenter>(&mut self, presenter: &mut P) -> ViewModel {
        let view = self.controller.expand();
        if self.state == LoadState::Loaded {
            presenter.render_repositories(&view);
        }
        view
    }
}
