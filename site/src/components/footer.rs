use leptos::prelude::*;

use super::common::SocialLinks;
use crate::content::FooterContent;
use crate::types::NavItem;

#[component]
pub fn Footer(
    /// Name shown as the brand and in the copyright line
    #[prop(into)]
    owner: String,
    footer: FooterContent,
    /// Quick links, usually the navbar items
    links: Vec<NavItem>,
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {year} {owner}. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h6 class="footer-heading">{owner}</h6>
                        <p class="footer-blurb">{footer.blurb}</p>
                    </div>
                    <div>
                        <h6 class="footer-heading">"Quick Links"</h6>
                        <ul class="footer-links">
                            {links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href class="footer-link">{link.name}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h6 class="footer-heading">"Connect With Me"</h6>
                        <SocialLinks links=footer.socials />
                    </div>
                </div>
                <hr class="footer-divider" />
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
