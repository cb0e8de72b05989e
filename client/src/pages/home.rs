//! The single portfolio page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::certifications::CertificationsSection;
use crate::components::contact::{ContactSection, Footer};
use crate::components::hero::HeroAbout;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::util::reveal_watcher::use_scroll_reveal;

/// Navigation plus every content section.
///
/// Owns the scroll-reveal watcher: it attaches once the sections are mounted
/// and is released when this page unmounts.
#[component]
pub fn HomePage() -> impl IntoView {
    use_scroll_reveal();

    view! {
        <div class="bg-blob"></div>
        <Navbar/>
        <main class="portfolio-container">
            <HeroAbout/>
            <ProjectsSection/>
            <CertificationsSection/>
            <ContactSection/>
            <Footer/>
        </main>
    }
}
