use leptos::prelude::*;

use super::icons::{ICON_ARROW_DOWN, Icon};
use crate::content::Profile;

/// Full-viewport intro banner (`#home`).
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="grid-2 hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-name">{profile.name}</h1>
                        <h2 class="hero-role">{profile.role}</h2>
                        <p class="hero-tagline">{profile.tagline}</p>
                        <a href="#contact" class="btn btn-secondary">
                            "Get in Touch"
                        </a>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-avatar">
                            <span class="hero-ring"></span>
                            "Profile Image"
                        </div>
                    </div>
                </div>
                <div class="hero-scroll">
                    <a href="#about" class="hero-scroll-link">
                        <span>"Scroll Down"</span>
                        <Icon path=ICON_ARROW_DOWN />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn shows_profile_and_calls_to_action() {
        let profile = Profile {
            name: "Grace Hopper".into(),
            role: "Compiler Engineer".into(),
            tagline: "It's easier to ask forgiveness".into(),
        };
        let html = render(move || view! { <Hero profile=profile /> });

        assert!(html.contains("id=\"home\""));
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("Compiler Engineer"));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("href=\"#about\""));
    }
}
