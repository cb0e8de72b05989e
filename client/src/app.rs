//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PROFILE;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the theme once (stored value, then system preference, then light)
/// and, in the browser, applies and persists it whenever it changes. Provides `RwSignal<UiState>` to children.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::with_theme(theme::read_preference()));
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let sync = StoredValue::new_local(theme::ThemeSync::for_document());
        Effect::new(move || {
            let current = ui.with(|s| s.theme);
            sync.update_value(|slot| {
                let Some(active) = slot else {
                    log::debug!("theme sync skipped: no document root");
                    return;
                };
                if let Err(e) = active.push(current) {
                    log::warn!("theme sync failed: {e}");
                }
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PROFILE.name/>
        <Meta name="description" content=format!("{} - developer portfolio", PROFILE.name)/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
