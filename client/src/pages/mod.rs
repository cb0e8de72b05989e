//! Routed pages.
//!
//! The site has one route; `home` assembles the sections from `components`
//! and owns the scroll-reveal watcher for their lifetime.

pub mod home;
