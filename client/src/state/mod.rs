//! Page-scoped presentation state.
//!
//! DESIGN
//! ======
//! Each page owns its own binder (`gallery`, `event`) so nothing is shared
//! across page instances. Binders are plain structs wrapped in `RwSignal` by
//! the pages, which keeps the transition logic testable without a reactive
//! runtime.

pub mod content;
pub mod event;
pub mod gallery;
