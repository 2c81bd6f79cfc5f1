use leptos::prelude::*;

use super::common::SectionHeader;
use crate::types::HighlightItem;

/// Bio card next to a column of highlight cards (`#about`).
#[component]
pub fn About(bio: Vec<String>, highlights: Vec<HighlightItem>) -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container">
                <SectionHeader
                    title="About Me"
                    subtitle="A dedicated full-stack developer with a passion for creating innovative web solutions"
                />
                <div class="grid-2">
                    <div class="card bio-card">
                        <h3 class="card-title">"My Journey"</h3>
                        {bio
                            .into_iter()
                            .map(|paragraph| view! { <p class="card-text">{paragraph}</p> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="stack">
                        {highlights
                            .into_iter()
                            .map(|highlight| {
                                view! {
                                    <div class="card highlight-card">
                                        <h4 class="card-title">{highlight.title}</h4>
                                        <p class="card-text">{highlight.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use crate::content::AboutContent;

    #[test]
    fn one_card_per_highlight() {
        let about = AboutContent::default();
        let expected = about.highlights.len();
        let html = render(move || view! { <About bio=about.bio highlights=about.highlights /> });

        assert_eq!(html.matches("class=\"card highlight-card\"").count(), expected);
        assert!(html.contains("Education"));
    }

    #[test]
    fn renders_each_bio_paragraph() {
        let bio = vec!["First.".to_string(), "Second.".to_string()];
        let html = render(move || view! { <About bio=bio highlights=vec![] /> });

        assert!(html.contains("First."));
        assert!(html.contains("Second."));
        assert_eq!(html.matches("highlight-card").count(), 0);
    }
}
