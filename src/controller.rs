use crate::filter::filter;
use crate::models::{Repository, ViewModel};
use crate::pagination::{decide, TRUNCATION_LIMIT};
use tracing::debug;

/// Repository list for one lookup together with the user's filter and
/// expansion choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoListState {
    pub all: Vec<Repository>,
    pub filter_text: String,
    pub is_expanded: bool,
}

/// Where the controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Initial,
    Collapsed,
    Expanded,
    Filtered,
}

/// Owns the repository list of the current lookup and derives what to show.
#[derive(Debug, Default)]
pub struct RepoListController {
    state: Option<RepoListState>,
}

impl RepoListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first successful lookup.
    pub fn state(&self) -> Option<&RepoListState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> ListPhase {
        match &self.state {
            None => ListPhase::Initial,
            Some(state) if !state.filter_text.is_empty() => ListPhase::Filtered,
            Some(state) if state.is_expanded => ListPhase::Expanded,
            Some(_) => ListPhase::Collapsed,
        }
    }

    /// Replace the list wholesale and reset filter and expansion.
    pub fn load(&mut self, repos: Vec<Repository>) -> ViewModel {
        debug!(count = repos.len(), "Loading repository list");
        self.state = Some(RepoListState {
            all: repos,
            filter_text: String::new(),
            is_expanded: false,
        });
        self.view()
    }

    /// Update the filter text. Expansion is left as it was; a non-empty
    /// filter simply bypasses truncation.
    pub fn set_filter(&mut self, text: &str) -> ViewModel {
        if let Some(state) = self.state.as_mut() {
            state.filter_text = text.to_string();
        }
        self.view()
    }

    /// Show the whole list. Only has an effect when unfiltered and longer than
    /// the truncation limit.
    pub fn expand(&mut self) -> ViewModel {
        if let Some(state) = self.state.as_mut() {
            if state.filter_text.is_empty() && state.all.len() > TRUNCATION_LIMIT {
                state.is_expanded = true;
            }
        }
        self.view()
    }

    pub fn view(&self) -> ViewModel {
        match &self.state {
            Some(state) => derive_view(state),
            None => ViewModel::default(),
        }
    }
}

/// Filter, then paginate the filtered list.
pub fn derive_view(state: &RepoListState) -> ViewModel {
    let mut visible = filter(&state.all, &state.filter_text);
    let total_count = visible.len();
    let decision = decide(total_count, &state.filter_text, state.is_expanded);
    if let Some(limit) = decision.limit {
        visible.truncate(limit);
    }

    ViewModel {
        visible,
        total_count,
        remaining_count: decision.remaining(total_count),
        show_expand_control: decision.show_control,
    }
}
