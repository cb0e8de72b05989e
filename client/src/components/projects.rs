//! Project cards grid.

use leptos::prelude::*;

use crate::components::icons::{ExternalLinkIcon, FolderIcon, GithubIcon};
use crate::content::{PROJECTS, Project};
use crate::state::reveal::REVEAL_CLASS;

/// Single project card with repository and optional live demo links.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-card__header">
                <FolderIcon/>
                <div class="project-card__links">
                    <a href=project.repo_url target="_blank" rel="noopener noreferrer" aria-label="GitHub Link">
                        <GithubIcon size=20/>
                    </a>
                    {project
                        .demo_url
                        .map(|url| {
                            view! {
                                <a href=url target="_blank" rel="noopener noreferrer" aria-label="Live Demo Link">
                                    <ExternalLinkIcon/>
                                </a>
                            }
                        })}
                </div>
            </div>
            <h3>{project.name}</h3>
            <p>{project.summary}</p>
            <div class="tech-badges">
                {project.tech.iter().map(|tech| view! { <span>{*tech}</span> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class=REVEAL_CLASS>
            <h2 class="section-title">"Some Things I've Built"</h2>
            <div class="projects-grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}
