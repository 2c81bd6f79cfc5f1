//! # portfolio-site
//!
//! Single-page developer portfolio built from Leptos components.
//!
//! The page is a hero banner, an about section, a skills grid, a project
//! gallery, a contact form and a footer, laid out under a fixed navigation
//! bar. All content is plain data ([`content::SiteContent`]) and all styling
//! hangs off a [`theme::Theme`].
//!
//! ## Two ways to render
//!
//! - **Browser** (`csr` feature): `portfolio-web` mounts
//!   [`components::PortfolioApp`] into `#root` through [`startup::start`].
//! - **Static HTML** (`ssr` feature, default): [`render_page`] produces a
//!   complete document, used by `portfolio-export`.
//!
//! ```rust
//! use portfolio_site::{content::SiteContent, render_page, theme::Theme};
//!
//! let html = render_page(&SiteContent::default(), &Theme::dark());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"projects\""));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records (skills, projects, links)
//! - [`content`] - the default site content and JSON overrides
//! - [`theme`] - palette, typography, spacing, breakpoints
//! - [`styles`] - static CSS on top of the theme variables
//! - [`state`] - drawer, form and notification state
//! - [`startup`] - mount-node guard for the browser entry
//! - [`components`] - Leptos components

#![recursion_limit = "256"]

pub mod components;
pub mod content;
pub mod error;
pub mod startup;
pub mod state;
pub mod styles;
pub mod theme;
pub mod types;

use components::PortfolioDocument;
use content::SiteContent;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use theme::Theme;
use tracing::debug;

pub use error::{ContentError, StartupError};

/// Render the complete portfolio page as a standalone HTML document.
///
/// The output is a static snapshot: every section is present and the drawer
/// and snackbar render closed. Interactivity needs the `portfolio-web` build.
pub fn render_page(content: &SiteContent, theme: &Theme) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <PortfolioDocument content=content.clone() theme=theme.clone() /> }.to_html()
    });
    debug!(bytes = html.len(), "rendered portfolio page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_page(&SiteContent::default(), &Theme::dark());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Mark Matuguina | Full Stack Developer</title>"));
        assert!(html.contains("id=\"root\""));
        assert!(html.contains("--bg-default: #121212;"));
    }

    #[test]
    fn every_anchor_target_exists() {
        let content = SiteContent::default();
        let html = render_page(&content, &Theme::dark());

        for item in &content.nav {
            let id = item.href.trim_start_matches('#');
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
    }

    #[test]
    fn card_counts_follow_content() {
        let mut content = SiteContent::default();
        content.projects.truncate(1);
        content.about.highlights.clear();
        let html = render_page(&content, &Theme::dark());

        assert_eq!(html.matches("class=\"card project-card\"").count(), 1);
        assert_eq!(html.matches("class=\"card highlight-card\"").count(), 0);
        assert_eq!(
            html.matches("class=\"card skill-card\"").count(),
            content.skills.len()
        );
    }

    #[test]
    fn uses_configured_year() {
        let mut content = SiteContent::default();
        content.footer.copyright_year = Some(2031);
        let html = render_page(&content, &Theme::light());

        assert!(html.contains("© 2031 Mark Matuguina. All rights reserved."));
        assert!(html.contains("--color-scheme: light;"));
    }

    #[test]
    fn static_page_works_without_scripts() {
        let html = render_page(&SiteContent::default(), &Theme::dark());

        assert!(!html.contains("<script"));
        // form: blocked inline, so no GET with the fields in the query string
        let form = html.find("<form").unwrap();
        let form_tag = &html[form..form + html[form..].find('>').unwrap()];
        assert!(form_tag.contains("onsubmit=\"return false\""), "{form_tag}");
        assert!(!form_tag.contains("action="));

        // drawer: fragment links plus `:target` rules in the stylesheet
        assert!(html.contains("href=\"#nav-drawer\""));
        assert!(html.contains(".nav-drawer:target {"));
        assert!(html.contains(".nav-drawer:target ~ .nav-backdrop {"));
    }

    #[test]
    fn static_page_has_no_open_overlays() {
        let html = render_page(&SiteContent::default(), &Theme::dark());
        assert!(!html.contains("nav-drawer open"));
        assert!(!html.contains("class=\"snackbar\""));
    }
}
