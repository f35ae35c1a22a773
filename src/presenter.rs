use crate::models::{LanguageFrequency, ProfileSummary, ViewModel};

/// Everything the lookup flow asks of the display. Implementations only turn
/// these calls into output; no decisions are made here.
pub trait Presenter {
    /// Toggle the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Show or hide the profile/repositories/chart section as a whole.
    fn set_content_visible(&mut self, visible: bool);

    /// Show or hide the idle banner shown before any successful lookup.
    fn set_idle_banner_visible(&mut self, visible: bool);

    fn render_profile(&mut self, profile: &ProfileSummary);

    /// Redraw the repository grid. An empty view gets the no-repositories
    /// placeholder, not an error.
    fn render_repositories(&mut self, view: &ViewModel);

    /// Replace the language chart. An empty mapping hides the chart.
    fn render_chart(&mut self, languages: &LanguageFrequency);

    /// Show `message` verbatim in the error banner.
    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);
}
