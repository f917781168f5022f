//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its binder signal and issues exactly one collection query
//! after hydration, then delegates rendering details to `components`.

pub mod gallery;
pub mod home;
