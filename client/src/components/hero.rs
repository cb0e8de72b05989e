//! Combined hero and about slide with the skills grid.

use leptos::prelude::*;

use crate::content::{PROFILE, SKILLS};
use crate::state::reveal::REVEAL_CLASS;

#[component]
pub fn HeroAbout() -> impl IntoView {
    view! {
        <section id="about" class=format!("hero-about-slide {REVEAL_CLASS}")>
            <div class="hero-about-grid">
                <div class="about-section-flex">
                    <div class="about-left">
                        <h1 class="hero-title about-gradient">{format!("Hello! I'm {}", PROFILE.name)}</h1>
                        <div class="about-bio">
                            {PROFILE
                                .bio
                                .iter()
                                .map(|paragraph| view! { <p class="about-main-text about-gradient">{*paragraph}</p> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="about-photo-right">
                        <img src=PROFILE.photo_path alt=PROFILE.name class="about-photo-large"/>
                    </div>
                </div>
                <div class="hero-buttons">
                    <a href="#projects" class="cta hero-cta-animated">"Check out my work!"</a>
                </div>
            </div>
            <div class="about-skills">
                <h3 class="about-skills__title">"Technical Arsenal"</h3>
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="skill-card">
                                    <h4>{format!("{} {}", group.icon, group.title)}</h4>
                                    <p>{group.items}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
