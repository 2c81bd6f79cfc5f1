//! Leptos UI components for the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (static export only)
//! └── PortfolioApp
//!     └── Layout (theme context + stylesheet)
//!         ├── Navbar (inline links / drawer)
//!         ├── main
//!         │   ├── Hero      #home
//!         │   ├── About     #about
//!         │   ├── Skills    #skills
//!         │   ├── Projects  #projects
//!         │   └── Contact   #contact (form + Snackbar)
//!         └── Footer
//! ```
//!
//! Every section takes its data as props, so the same components render in
//! the browser (`csr`) and to a string (`ssr`).

mod about;
mod common;
mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod layout;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use common::{SectionHeader, SocialLinks};
pub use contact::Contact;
pub use document::PortfolioDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use layout::{Layout, PortfolioApp, use_theme};
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;

#[cfg(test)]
pub(crate) mod test_support {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    /// Run `f` inside a fresh reactive owner.
    pub fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        Owner::new().with(f)
    }

    /// Render a view to an HTML string inside a fresh reactive owner.
    pub fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        with_owner(|| f().to_html())
    }
}
