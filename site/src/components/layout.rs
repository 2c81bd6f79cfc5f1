//! Page shell: theme context, stylesheet, navbar, main content, footer.

use leptos::prelude::*;

use super::{About, Contact, Footer, Hero, Navbar, Projects, Skills};
use crate::content::SiteContent;
use crate::styles::SITE_CSS;
use crate::theme::Theme;

/// Theme provided by the enclosing [`Layout`], or the default theme.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

/// Wraps page content with the shared chrome.
///
/// Provides `theme` to every descendant through context and injects the
/// stylesheet, so the same tree works in the browser and in static export.
#[component]
pub fn Layout(content: SiteContent, theme: Theme, children: Children) -> impl IntoView {
    let stylesheet = format!("{}{}", theme.stylesheet(), SITE_CSS);
    provide_context(theme);

    let year = content.copyright_year();
    let SiteContent {
        brand,
        profile,
        nav,
        footer,
        ..
    } = content;

    view! {
        <style>{stylesheet}</style>
        <div class="page">
            <Navbar brand=brand items=nav.clone() />
            <main class="page-main">{children()}</main>
            <Footer owner=profile.name footer=footer links=nav year=year />
        </div>
    }
}

/// The whole portfolio: every section in page order inside [`Layout`].
#[component]
pub fn PortfolioApp(
    #[prop(optional)] content: SiteContent,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let sections = content.clone();

    view! {
        <Layout content=content theme=theme>
            <Hero profile=sections.profile />
            <About bio=sections.about.bio highlights=sections.about.highlights />
            <Skills categories=sections.skills />
            <Projects projects=sections.projects />
            <Contact info=sections.contact.info socials=sections.contact.socials />
        </Layout>
    }
}
