use leptos::prelude::*;

use super::common::SectionHeader;
use super::icons::{ICON_GITHUB, ICON_LAUNCH, Icon};
use crate::types::{ProjectItem, link_rel, link_target};

/// Project gallery (`#projects`).
#[component]
pub fn Projects(projects: Vec<ProjectItem>) -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="A collection of my recent work and personal projects"
                />
                <div class="grid-3 projects-grid">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectItem) -> impl IntoView {
    let ProjectItem {
        title,
        description,
        image,
        technologies,
        demo_url,
        github_url,
    } = project;

    view! {
        <article class="card project-card">
            <img class="project-image" src=image alt=title.clone() height="200" loading="lazy" />
            <div class="project-body">
                <h3 class="card-title">{title}</h3>
                <p class="card-text">{description}</p>
                <div class="tech-list">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tech-chip">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="project-actions">
                <a
                    class="btn btn-text"
                    href=github_url.clone()
                    target=link_target(&github_url)
                    rel=link_rel(&github_url)
                >
                    <Icon path=ICON_GITHUB size="18" />
                    "Source Code"
                </a>
                <a
                    class="btn btn-text accent"
                    href=demo_url.clone()
                    target=link_target(&demo_url)
                    rel=link_rel(&demo_url)
                >
                    <Icon path=ICON_LAUNCH size="18" />
                    "Live Demo"
                </a>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use crate::content::SiteContent;

    #[test]
    fn one_card_per_project() {
        let projects = SiteContent::default().projects;
        let expected = projects.len();
        let chips: usize = projects.iter().map(|p| p.technologies.len()).sum();
        let html = render(move || view! { <Projects projects=projects /> });

        assert_eq!(html.matches("class=\"card project-card\"").count(), expected);
        assert_eq!(html.matches("class=\"tech-chip\"").count(), chips);
    }

    #[test]
    fn card_links_open_in_new_tab() {
        let project = ProjectItem {
            title: "Ferris Tracker".into(),
            description: "Tracks crabs".into(),
            image: "/ferris.png".into(),
            technologies: vec!["Rust".into()],
            demo_url: "https://ferris.example.com".into(),
            github_url: "https://github.com/example/ferris".into(),
        };
        let html = render(move || view! { <Projects projects=vec![project] /> });

        assert!(html.contains("src=\"/ferris.png\""));
        assert!(html.contains("alt=\"Ferris Tracker\""));
        assert!(html.contains("href=\"https://github.com/example/ferris\""));
        assert!(html.contains("href=\"https://ferris.example.com\""));
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn empty_gallery_renders_no_cards() {
        let html = render(|| view! { <Projects projects=vec![] /> });
        assert!(html.contains("Featured Projects"));
        assert!(!html.contains("project-card"));
    }
}
