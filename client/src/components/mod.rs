//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (`header`, `footer`) and gallery surfaces
//! (`gallery_card`, `lightbox`). They take plain data and callbacks; page
//! binders own all state.

pub mod footer;
pub mod gallery_card;
pub mod header;
pub mod lightbox;
