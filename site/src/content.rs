//! Site content: the literal data every section renders.
//!
//! [`SiteContent::default`] is the built-in portfolio. A JSON file can
//! override any subset of it; keys that are absent keep their defaults.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ContentError;
use crate::types::{
    ContactInfoItem, HighlightItem, IconKind, NavItem, ProjectItem, Skill, SkillCategory,
    SocialLink,
};

/// Who the portfolio belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name, used in the hero, footer and page title
    pub name: String,
    /// Job title under the name
    pub role: String,
    /// One-line introduction
    pub tagline: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mark Matuguina".into(),
            role: "Full Stack Developer".into(),
            tagline: "Crafting beautiful and functional web applications with modern technologies"
                .into(),
        }
    }
}

/// About section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Paragraphs of the "My Journey" card
    pub bio: Vec<String>,
    /// Cards in the right-hand column
    pub highlights: Vec<HighlightItem>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            bio: vec![
                "I started my journey in web development during my college years, where I discovered \
                 my passion for creating digital experiences. Since then, I've worked on various \
                 projects ranging from small business websites to complex enterprise applications."
                    .into(),
                "My approach to development combines technical expertise with a keen eye for design \
                 and user experience. I believe in writing clean, maintainable code and staying \
                 up-to-date with the latest technologies and best practices."
                    .into(),
            ],
            highlights: vec![
                highlight(
                    "Experience",
                    "5+ years of experience in full-stack development, working with various technologies and frameworks.",
                ),
                highlight(
                    "Education",
                    "Bachelor's degree in Computer Science with a focus on software engineering and web development.",
                ),
                highlight(
                    "Passion",
                    "Passionate about creating elegant solutions to complex problems and building user-friendly applications.",
                ),
            ],
        }
    }
}

/// Contact section data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    /// Email / phone / location entries
    pub info: Vec<ContactInfoItem>,
    /// "Follow Me" links
    pub socials: Vec<SocialLink>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            info: vec![
                ContactInfoItem {
                    icon: IconKind::Email,
                    title: "Email".into(),
                    content: "contact@example.com".into(),
                    link: "mailto:contact@example.com".into(),
                },
                ContactInfoItem {
                    icon: IconKind::Phone,
                    title: "Phone".into(),
                    content: "+1 (555) 123-4567".into(),
                    link: "tel:+15551234567".into(),
                },
                ContactInfoItem {
                    icon: IconKind::Location,
                    title: "Location".into(),
                    content: "San Francisco, CA".into(),
                    link: "https://maps.google.com".into(),
                },
            ],
            socials: vec![
                social(IconKind::GitHub, "GitHub", "https://github.com/example"),
                social(IconKind::LinkedIn, "LinkedIn", "https://linkedin.com/in/example"),
                social(IconKind::Twitter, "Twitter", "https://twitter.com/example"),
            ],
        }
    }
}

/// Footer data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Text under the brand name
    pub blurb: String,
    /// "Connect With Me" links
    pub socials: Vec<SocialLink>,
    /// Fixed copyright year; the current year is used when unset
    pub copyright_year: Option<i32>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            blurb: "Full Stack Developer passionate about creating innovative web solutions \
                    and building user-friendly applications."
                .into(),
            socials: vec![
                social(IconKind::GitHub, "GitHub", "https://github.com"),
                social(IconKind::LinkedIn, "LinkedIn", "https://linkedin.com"),
                social(IconKind::Twitter, "Twitter", "https://twitter.com"),
                social(IconKind::Instagram, "Instagram", "https://instagram.com"),
            ],
            copyright_year: None,
        }
    }
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Brand label in the navigation bar and drawer
    pub brand: String,
    /// Owner profile
    pub profile: Profile,
    /// Navigation bar and footer quick links
    pub nav: Vec<NavItem>,
    /// About section
    pub about: AboutContent,
    /// Skills grid
    pub skills: Vec<SkillCategory>,
    /// Project gallery
    pub projects: Vec<ProjectItem>,
    /// Contact section
    pub contact: ContactContent,
    /// Footer
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Portfolio".into(),
            profile: Profile::default(),
            nav: ["Home", "About", "Skills", "Projects", "Contact"]
                .into_iter()
                .map(|name| NavItem {
                    name: name.into(),
                    href: format!("#{}", name.to_lowercase()),
                })
                .collect(),
            about: AboutContent::default(),
            skills: vec![
                category(
                    "Frontend Development",
                    &[("React", 90), ("TypeScript", 85), ("HTML/CSS", 95), ("Material UI", 80)],
                ),
                category(
                    "Backend Development",
                    &[("Node.js", 85), ("Express", 80), ("MongoDB", 75), ("SQL", 70)],
                ),
                category(
                    "DevOps & Tools",
                    &[("Git", 90), ("Docker", 70), ("AWS", 65), ("CI/CD", 75)],
                ),
            ],
            projects: vec![
                project(
                    "E-Commerce Platform",
                    "A full-stack e-commerce platform with user authentication, product management, shopping cart, and payment integration.",
                    &["React", "Node.js", "MongoDB", "Express", "Stripe"],
                    "ecommerce",
                ),
                project(
                    "Task Management App",
                    "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
                    &["React", "TypeScript", "Firebase", "Material UI"],
                    "task-manager",
                ),
                project(
                    "Portfolio Website",
                    "A modern, responsive portfolio website built with Rust and Leptos, showcasing projects and skills.",
                    &["Rust", "Leptos", "WebAssembly", "Trunk"],
                    "portfolio",
                ),
            ],
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}

impl SiteContent {
    /// Parse content JSON, filling absent keys from the defaults.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&json)?;
        debug!(path = %path.display(), "loaded content override");
        Ok(content)
    }

    /// Pretty JSON of this content, usable as a `--content` template.
    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Skills whose level lies outside 0-100 (shown clamped).
    pub fn out_of_range_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills
            .iter()
            .flat_map(|c| c.skills.iter())
            .filter(|s| !(0..=100).contains(&s.level))
    }

    /// Year printed in the footer copyright line.
    pub fn copyright_year(&self) -> i32 {
        self.footer
            .copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

fn highlight(title: &str, description: &str) -> HighlightItem {
    HighlightItem {
        title: title.into(),
        description: description.into(),
    }
}

fn social(icon: IconKind, label: &str, url: &str) -> SocialLink {
    SocialLink {
        icon,
        label: label.into(),
        url: url.into(),
    }
}

fn category(title: &str, skills: &[(&str, i32)]) -> SkillCategory {
    SkillCategory {
        title: title.into(),
        skills: skills
            .iter()
            .map(|&(name, level)| Skill {
                name: name.into(),
                level,
            })
            .collect(),
    }
}

fn project(title: &str, description: &str, technologies: &[&str], repo: &str) -> ProjectItem {
    ProjectItem {
        title: title.into(),
        description: description.into(),
        image: "/placeholder.svg".into(),
        technologies: technologies.iter().map(|t| (*t).into()).collect(),
        demo_url: "https://demo.example.com".into(),
        github_url: format!("https://github.com/example/{repo}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_nav_points_at_every_section() {
        let hrefs: Vec<String> = SiteContent::default()
            .nav
            .into_iter()
            .map(|n| n.href)
            .collect();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#skills", "#projects", "#contact"]
        );
    }

    #[test]
    fn default_levels_are_percentages() {
        let content = SiteContent::default();
        assert_eq!(content.out_of_range_skills().count(), 0);
        assert_eq!(content.skills.len(), 3);
        assert!(content.skills.iter().all(|c| c.skills.len() == 4));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let content = SiteContent::from_json(
            r#"{ "profile": { "name": "Ada Lovelace" }, "footer": { "copyright_year": 1843 } }"#,
        )
        .unwrap();

        assert_eq!(content.profile.name, "Ada Lovelace");
        assert_eq!(content.profile.role, Profile::default().role);
        assert_eq!(content.projects, SiteContent::default().projects);
        assert_eq!(content.copyright_year(), 1843);
        assert_eq!(content.footer.socials.len(), 4);
    }

    #[test]
    fn json_template_parses_back() {
        let content = SiteContent::default();
        let json = content.to_json_pretty().unwrap();
        assert_eq!(SiteContent::from_json(&json).unwrap(), content);
    }

    #[test]
    fn out_of_range_levels_are_reported() {
        let content = SiteContent::from_json(
            r#"{ "skills": [ { "title": "X", "skills": [ { "name": "A", "level": 150 }, { "name": "B", "level": 40 }, { "name": "C", "level": -5 } ] } ] }"#,
        )
        .unwrap();
        let names: Vec<&str> = content
            .out_of_range_skills()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn wild_levels_still_load_with_other_overrides() {
        let content = SiteContent::from_json(
            r#"{
                "brand": "Folio",
                "skills": [ { "title": "X", "skills": [
                    { "name": "Over", "level": 300 },
                    { "name": "Under", "level": -5 }
                ] } ]
            }"#,
        )
        .unwrap();

        assert_eq!(content.brand, "Folio");
        let levels: Vec<(i32, i32)> = content.skills[0]
            .skills
            .iter()
            .map(|s| (s.level, s.fill_percent()))
            .collect();
        assert_eq!(levels, vec![(300, 100), (-5, 0)]);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SiteContent::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
