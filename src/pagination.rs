/// Repositories shown before the show-more control appears.
pub const TRUNCATION_LIMIT: usize = 10;

/// How much of the filtered list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDecision {
    /// `None` means show everything.
    pub limit: Option<usize>,
    pub show_control: bool,
}

impl PageDecision {
    /// Entries hidden behind the control for a list of `total` items.
    pub fn remaining(&self, total: usize) -> usize {
        self.limit.map_or(0, |limit| total.saturating_sub(limit))
    }
}

/// Truncate only when there is no filter, the list has not been expanded and
/// there are more than [`TRUNCATION_LIMIT`] entries.
pub fn decide(total_after_filter: usize, filter_text: &str, is_expanded: bool) -> PageDecision {
    if filter_text.is_empty() && !is_expanded && total_after_filter > TRUNCATION_LIMIT {
        PageDecision {
            limit: Some(TRUNCATION_LIMIT),
            show_control: true,
        }
    } else {
        PageDecision {
            limit: None,
            show_control: false,
        }
    }
}
