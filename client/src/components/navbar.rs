//! Top navigation bar with the collapsible mobile menu.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};
use crate::state::ui::UiState;

/// Brand mark, section links, resume CTA, and hamburger toggle.
///
/// Any link press closes the menu; the hamburger flips it.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let close_menu = move |_| ui.update(UiState::close_menu);
    let toggle_menu = move |_| ui.update(UiState::toggle_menu);

    view! {
        <nav class="navbar">
            <div class="nav-brand">{PROFILE.initials}</div>
            <div class=move || ui.with(UiState::nav_links_class)>
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href on:click=close_menu>{link.label}</a> })
                    .collect_view()}
                <a
                    href=PROFILE.resume_path
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta nav-resume"
                    on:click=close_menu
                >
                    "Resume"
                </a>
            </div>
            <button class="hamburger" aria-label="Toggle navigation" on:click=toggle_menu>
                {move || ui.with(UiState::menu_glyph)}
            </button>
        </nav>
    }
}
