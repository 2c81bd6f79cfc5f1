//! Content records rendered by the page sections.
//!
//! Every record is plain data:
//!
//! - **Serializable** - overridable from a JSON content file via serde
//! - **Clone-friendly** - components take owned copies as props
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::types::{Skill, SkillCategory};
//!
//! let category = SkillCategory {
//!     title: "Systems".into(),
//!     skills: vec![Skill { name: "Rust".into(), level: 80 }],
//! };
//! assert_eq!(category.skills[0].fill_percent(), 80);
//! ```

use serde::{Deserialize, Serialize};

/// Glyph shown next to contact entries and social links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Envelope
    Email,
    /// Handset
    Phone,
    /// Map pin
    Location,
    /// GitHub mark
    #[serde(rename = "github")]
    GitHub,
    /// LinkedIn mark
    #[serde(rename = "linkedin")]
    LinkedIn,
    /// Twitter bird
    Twitter,
    /// Instagram camera
    Instagram,
}

/// Short card in the About section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightItem {
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
}

/// Entry of the contact information list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfoItem {
    /// Leading glyph
    pub icon: IconKind,
    /// Label, e.g. "Email"
    pub title: String,
    /// Visible value, e.g. the address itself
    pub content: String,
    /// Target URL (`mailto:`, `tel:` or external)
    pub link: String,
}

/// Icon link to an external profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Glyph rendered inside the button
    pub icon: IconKind,
    /// Accessible label
    pub label: String,
    /// Profile URL
    pub url: String,
}

/// In-page navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text
    pub name: String,
    /// Anchor fragment, e.g. `#about`
    pub href: String,
}

/// Card in the project gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    /// Project name
    pub title: String,
    /// One-paragraph summary
    pub description: String,
    /// Cover image URL
    pub image: String,
    /// Technology tags, rendered in order
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live demo URL
    pub demo_url: String,
    /// Source repository URL
    pub github_url: String,
}

/// A named skill with a proficiency percentage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency, meant as 0-100; stored as given
    pub level: i32,
}

impl Skill {
    /// Width of the progress bar fill in percent, clamped to 0-100.
    pub fn fill_percent(&self) -> i32 {
        self.level.clamp(0, 100)
    }
}

/// Card in the skills grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category heading
    pub title: String,
    /// Skills listed in the card
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// `true` for links that leave the page for another site.
///
/// `mailto:`/`tel:` links and in-page anchors stay in the current browsing
/// context; `http(s)` URLs open a new one.
pub fn is_external(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// `target` attribute for an outbound link.
pub fn link_target(url: &str) -> Option<&'static str> {
    is_external(url).then_some("_blank")
}

/// `rel` attribute for an outbound link.
pub fn link_rel(url: &str) -> Option<&'static str> {
    is_external(url).then_some("noopener noreferrer")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: i32) -> Skill {
        Skill {
            name: "Rust".into(),
            level,
        }
    }

    #[test]
    fn fill_is_clamped_to_one_hundred() {
        assert_eq!(skill(0).fill_percent(), 0);
        assert_eq!(skill(100).fill_percent(), 100);
        assert_eq!(skill(101).fill_percent(), 100);
        assert_eq!(skill(300).fill_percent(), 100);
        assert_eq!(skill(-5).fill_percent(), 0);
        assert_eq!(skill(i32::MIN).fill_percent(), 0);
    }

    #[test]
    fn fill_is_monotonic_in_level() {
        let fills: Vec<i32> = (-50..=300).map(|l| skill(l).fill_percent()).collect();
        assert!(fills.windows(2).all(|w| w[0] <= w[1]));
        // proportional inside the valid range
        assert!((0..=100).all(|l| skill(l).fill_percent() == l));
    }

    #[test]
    fn only_http_links_leave_the_page() {
        assert!(is_external("https://github.com/example"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("mailto:contact@example.com"));
        assert!(!is_external("tel:+15551234567"));
        assert!(!is_external("#contact"));

        assert_eq!(link_target("https://maps.google.com"), Some("_blank"));
        assert_eq!(link_target("tel:+15551234567"), None);
        assert_eq!(link_rel("mailto:a@b.c"), None);
    }

    #[test]
    fn project_uses_camel_case_urls() {
        let json = r#"{
            "title": "Demo",
            "description": "d",
            "image": "/placeholder.svg",
            "demoUrl": "https://demo.example.com",
            "githubUrl": "https://github.com/example/demo"
        }"#;
        let project: ProjectItem = serde_json::from_str(json).unwrap();
        assert_eq!(project.demo_url, "https://demo.example.com");
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn icon_names_are_lowercase() {
        let icon: IconKind = serde_json::from_str(r#""github""#).unwrap();
        assert_eq!(icon, IconKind::GitHub);
        assert_eq!(serde_json::to_string(&IconKind::LinkedIn).unwrap(), r#""linkedin""#);
    }
}
