//! Root document for static export: the complete HTML page.

use leptos::prelude::*;

use super::PortfolioApp;
use crate::content::SiteContent;
use crate::startup::MOUNT_NODE_ID;
use crate::theme::Theme;

/// `<html>` wrapper around [`PortfolioApp`], rendered into the mount node.
#[component]
pub fn PortfolioDocument(content: SiteContent, theme: Theme) -> impl IntoView {
    let title = format!("{} | {}", content.profile.name, content.profile.role);
    let description = content.profile.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <meta name="theme-color" content=theme.palette.background_default />
                <title>{title}</title>
            </head>
            <body>
                <div id=MOUNT_NODE_ID>
                    <PortfolioApp content=content theme=theme />
                </div>
            </body>
        </html>
    }
}
