//! Fixed top bar with in-page anchor links.
//!
//! Wide viewports get inline links. Below the `md` breakpoint the links are
//! hidden (see [`crate::theme::Theme::responsive_css`]) and a menu button
//! toggles a side drawer instead. The drawer stays mounted; only its class
//! changes.
//!
//! The menu button and backdrop are fragment links (`#nav-drawer` and
//! [`DRAWER_CLOSED_FRAGMENT`]), so a prerendered page without scripts still
//! opens and closes the drawer through `:target`. With scripts the click
//! handlers cancel the navigation and drive [`DrawerState`] instead.

use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;

use super::icons::{ICON_MENU, Icon};
use crate::state::DrawerState;
use crate::types::NavItem;

/// Fragment the backdrop links to. No element carries this id, so following
/// it clears `:target` without scrolling.
pub const DRAWER_CLOSED_FRAGMENT: &str = "#menu-closed";

#[component]
pub fn Navbar(#[prop(into)] brand: String, items: Vec<NavItem>) -> impl IntoView {
    let drawer = RwSignal::new(DrawerState::default());
    let toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        drawer.update(DrawerState::toggle);
    };
    let dismiss = move |ev: MouseEvent| {
        ev.prevent_default();
        drawer.update(DrawerState::close);
    };
    // drawer links keep their navigation
    let close = move |_| drawer.update(DrawerState::close);

    let escape = window_event_listener(ev::keydown, move |ev| {
        drawer.update(|d| {
            d.handle_key(&ev.key());
        });
    });
    on_cleanup(move || escape.remove());

    let inline_links = items
        .iter()
        .map(|item| {
            view! {
                <a href=item.href.clone() class="nav-link">
                    {item.name.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let drawer_links = items
        .into_iter()
        .map(move |item| {
            view! {
                <li>
                    <a href=item.href class="drawer-link" on:click=close>
                        {item.name}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header>
            <nav class="nav">
                <div class="nav-toolbar">
                    <a href="#home" class="nav-brand">{brand.clone()}</a>
                    <div class="nav-links">{inline_links}</div>
                    <a
                        href="#nav-drawer"
                        role="button"
                        class="nav-menu-btn"
                        aria-label="open drawer"
                        aria-controls="nav-drawer"
                        aria-expanded=move || drawer.get().is_open().to_string()
                        on:click=toggle
                    >
                        <Icon path=ICON_MENU />
                    </a>
                </div>
            </nav>

            <aside id="nav-drawer" class=move || drawer.get().class()>
                <div class="drawer-brand">{brand}</div>
                <ul class="drawer-list">{drawer_links}</ul>
            </aside>
            // after the drawer so `:target ~ .nav-backdrop` can reach it
            <a
                href=DRAWER_CLOSED_FRAGMENT
                class=move || if drawer.get().is_open() { "nav-backdrop open" } else { "nav-backdrop" }
                aria-label="close drawer"
                tabindex="-1"
                on:click=dismiss
            ></a>

            // keeps content clear of the fixed bar
            <div class="nav-spacer"></div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use crate::content::SiteContent;

    fn render_nav() -> String {
        let content = SiteContent::default();
        render(move || view! { <Navbar brand=content.brand items=content.nav /> })
    }

    #[test]
    fn renders_inline_and_drawer_link_per_item() {
        let html = render_nav();
        let items = SiteContent::default().nav;

        assert_eq!(html.matches("class=\"nav-link\"").count(), items.len());
        assert_eq!(html.matches("class=\"drawer-link\"").count(), items.len());
        for item in &items {
            assert!(html.contains(&format!("href=\"{}\"", item.href)));
        }
    }

    #[test]
    fn drawer_renders_closed() {
        let html = render_nav();
        assert!(html.contains("class=\"nav-drawer\""));
        assert!(!html.contains("nav-drawer open"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("aria-label=\"open drawer\""));
    }

    #[test]
    fn drawer_opens_and_closes_through_fragments() {
        let html = render_nav();

        assert!(html.contains("href=\"#nav-drawer\""));
        assert!(html.contains("id=\"nav-drawer\""));
        assert!(html.contains(&format!("href=\"{DRAWER_CLOSED_FRAGMENT}\"")));
        assert!(!html.contains(&format!("id=\"{}\"", &DRAWER_CLOSED_FRAGMENT[1..])));

        let drawer = html.find("id=\"nav-drawer\"").unwrap();
        let backdrop = html.find("nav-backdrop").unwrap();
        assert!(drawer < backdrop);
    }

    #[test]
    fn brand_appears_in_bar_and_drawer() {
        let html = render(|| view! { <Navbar brand="Folio" items=vec![] /> });
        assert_eq!(html.matches("Folio").count(), 2);
    }
}
