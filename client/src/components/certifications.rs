//! Certification list with credential links.

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::icons::{BadgeIcon, DocumentIcon};
use crate::content::{CERTIFICATIONS, CertKind};
use crate::state::reveal::REVEAL_CLASS;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class=REVEAL_CLASS>
            <h2 class="section-title">"Certifications"</h2>
            <ul class="cert-list">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        let icon = match cert.kind {
                            CertKind::Badge => Either::Left(view! { <BadgeIcon/> }),
                            CertKind::Document => Either::Right(view! { <DocumentIcon/> }),
                        };
                        view! {
                            <li class="cert-item">
                                <div class="cert-header">
                                    <span class="cert-icon">{icon}</span>
                                    <span class="cert-title">{cert.title}</span>
                                </div>
                                <a
                                    href=cert.credential_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="cta cert-btn"
                                >
                                    "View Credential \u{2197}"
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
