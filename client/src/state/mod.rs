//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds page chrome flags provided through context; `reveal` is the
//! per-element bookkeeping behind the scroll-reveal watcher.

pub mod reveal;
pub mod ui;
