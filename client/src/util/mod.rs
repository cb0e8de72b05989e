//! Browser-facing helpers.
//!
//! `theme` reads and persists the color scheme; `reveal_watcher` drives the
//! intersection observer. Both keep the DOM behind traits so their logic runs
//! under native tests.

pub mod reveal_watcher;
pub mod theme;
