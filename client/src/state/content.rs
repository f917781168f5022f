//! Load status shared by every content-backed page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Render status of a page's single collection query.
///
/// `Loading` moves to `Ready` or `Empty` exactly once. A failed query lands
/// in `Empty`, so users see "coming soon" rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentStatus {
    #[default]
    Loading,
    Ready,
    Empty,
}

impl ContentStatus {
    /// Status for a successful query that produced `count` records.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        if count == 0 { Self::Empty } else { Self::Ready }
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}
