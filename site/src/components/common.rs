//! Pieces shared by several sections.

use leptos::prelude::*;

use super::icons::{Icon, icon_path};
use crate::types::{SocialLink, link_rel, link_target};

/// Centered section title with a subtitle line.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

/// Row of round icon links to external profiles.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|social| {
                    view! {
                        <a
                            class="icon-btn social-link"
                            href=social.url.clone()
                            target=link_target(&social.url)
                            rel=link_rel(&social.url)
                            aria-label=social.label
                        >
                            <Icon path=icon_path(social.icon) />
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
