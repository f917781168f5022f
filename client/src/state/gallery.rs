//! Gallery page binder: load status, display ordering, and lightbox selection.
//!
//! DESIGN
//! ======
//! The content service makes no ordering promise, so ordering is imposed here.
//! Items sort ascending by `display_order`; items without one rank after every
//! ordered item (never via a finite sentinel that an author could collide
//! with). The sort is stable, so ties keep content-service order.
//!
//! Selection is a single slot: opening an item replaces whatever was open.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::content::ContentStatus;
use crate::net::types::GalleryItem;

/// Alt text used when an item carries neither alt text nor a caption.
pub const FALLBACK_ALT: &str = "Event photo";

/// Gallery items plus the page's load and selection state.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    pub status: ContentStatus,
    /// ID of the item open in the lightbox.
    pub selected: Option<String>,
}

impl GalleryState {
    /// Apply the outcome of the page's gallery query.
    ///
    /// Only the first outcome counts; the page never re-fetches, so anything
    /// arriving after the status settled is dropped.
    pub fn resolve(&mut self, result: Result<Vec<GalleryItem>, String>) {
        if !self.status.is_loading() {
            return;
        }
        match result {
            Ok(mut items) => {
                sort_by_display_order(&mut items);
                self.status = ContentStatus::for_count(items.len());
                self.items = items;
            }
            Err(_) => {
                self.items.clear();
                self.status = ContentStatus::Empty;
            }
        }
    }

    /// Open `id` in the lightbox, replacing any open item.
    /// Unknown IDs leave the selection unchanged.
    pub fn select(&mut self, id: &str) {
        if self.items.iter().any(|item| item.id == id) {
            self.selected = Some(id.to_owned());
        }
    }

    /// Close the lightbox.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The item currently open in the lightbox, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&GalleryItem> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }
}

/// Stable ascending sort by display order; unordered items go last.
pub fn sort_by_display_order(items: &mut [GalleryItem]) {
    items.sort_by_key(display_rank);
}

fn display_rank(item: &GalleryItem) -> (bool, i64) {
    (item.display_order.is_none(), item.display_order.unwrap_or_default())
}

/// Alt text for an item's image: alt text, then caption, then a generic label.
#[must_use]
pub fn image_alt(item: &GalleryItem) -> String {
    item.alt_text
        .as_deref()
        .or(item.caption.as_deref())
        .unwrap_or(FALLBACK_ALT)
        .to_owned()
}
