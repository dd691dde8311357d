/// What a collection view should show. Always derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    /// The source collection has no records at all.
    Empty,
    /// Records exist but none pass the current filters.
    NoResults,
    Populated,
}

impl ViewState {
    /// Loading wins over counts, then an empty source, then an empty result.
    pub fn resolve(is_loading: bool, source_count: usize, filtered_count: usize) -> Self {
        if is_loading {
            ViewState::Loading
        } else if source_count == 0 {
            ViewState::Empty
        } else if filtered_count == 0 {
            ViewState::NoResults
        } else {
            ViewState::Populated
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
