//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one slice of the page from `content` data; only
//! `navbar` reads shared state from the Leptos context.

pub mod certifications;
pub mod contact;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod projects;
