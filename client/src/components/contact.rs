//! Contact call-to-action and page footer.

use leptos::prelude::*;

use crate::components::icons::{GithubIcon, LinkedinIcon};
use crate::content::{CONTACT_PITCH, PROFILE};
use crate::state::reveal::REVEAL_CLASS;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class=format!("{REVEAL_CLASS} contact-section")>
            <p class="contact-overline">"04. What's Next?"</p>
            <h2 class="contact-title">"Get In Touch"</h2>
            <p class="contact-desc">{CONTACT_PITCH}</p>
            <div class="contact-actions">
                <a href=PROFILE.mailto() class="cta">"Email Me"</a>
                <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" class="cta">
                    "Connect on LinkedIn"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=format!("footer {REVEAL_CLASS}")>
            <div class="social-icons-footer">
                <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    <GithubIcon/>
                </a>
                <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                    <LinkedinIcon/>
                </a>
            </div>
            <p class="footer-text">{PROFILE.credit}</p>
        </footer>
    }
}
