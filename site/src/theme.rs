//! Theme: palette, typography, spacing, shape and breakpoints.
//!
//! A [`Theme`] is a plain value. [`crate::components::Layout`] puts it into
//! the Leptos context and emits it as CSS custom properties, so the static
//! stylesheet in [`crate::styles`] only ever refers to `var(--...)`.
//!
//! ```rust
//! use portfolio_site::theme::Theme;
//!
//! let theme = Theme::dark();
//! assert_eq!(theme.spacing(3), "24px");
//! assert!(theme.css_variables().contains("--primary-main: #90caf9;"));
//! ```

use std::fmt::Write as _;

/// Light or dark base scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Dark background, light text
    Dark,
    /// Light background, dark text
    Light,
}

impl ThemeMode {
    /// Value for the CSS `color-scheme` property.
    pub fn color_scheme(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Main color with its lighter and darker shades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSet {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: ColorSet,
    pub secondary: ColorSet,
    pub error: ColorSet,
    pub success: ColorSet,
    /// Page background
    pub background_default: &'static str,
    /// Card and drawer surfaces
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// App bar bottom border and dividers
    pub divider: &'static str,
}

/// Size, weight and line height of one text variant.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: &'static str,
    pub font_weight: u16,
    pub line_height: f32,
}

impl TextStyle {
    const fn new(font_size: &'static str, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
}

impl Typography {
    fn variants(&self) -> [(&'static str, &TextStyle); 8] {
        [
            ("h1", &self.h1),
            ("h2", &self.h2),
            ("h3", &self.h3),
            ("h4", &self.h4),
            ("h5", &self.h5),
            ("h6", &self.h6),
            ("body1", &self.body1),
            ("body2", &self.body2),
        ]
    }
}

/// Corner radii of the styled surfaces, in px.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub border_radius: u16,
    pub button_radius: u16,
    pub card_radius: u16,
}

/// Viewport widths (px) where each breakpoint starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    /// Base spacing unit in px
    pub spacing_unit: u16,
    pub shape: Shape,
    pub breakpoints: Breakpoints,
    /// Width of the mobile navigation drawer in px
    pub drawer_width: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme used by the site.
    pub fn dark() -> Self {
        Self {
            palette: Palette {
                mode: ThemeMode::Dark,
                primary: ColorSet {
                    main: "#90caf9",
                    light: "#e3f2fd",
                    dark: "#42a5f5",
                },
                secondary: ColorSet {
                    main: "#f48fb1",
                    light: "#f8bbd0",
                    dark: "#c2185b",
                },
                error: ColorSet {
                    main: "#f44336",
                    light: "#e57373",
                    dark: "#d32f2f",
                },
                success: ColorSet {
                    main: "#66bb6a",
                    light: "#81c784",
                    dark: "#388e3c",
                },
                background_default: "#121212",
                background_paper: "#1e1e1e",
                text_primary: "#ffffff",
                text_secondary: "#b0b0b0",
                divider: "#333333",
            },
            typography: Typography {
                font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
                h1: TextStyle::new("2.5rem", 700, 1.2),
                h2: TextStyle::new("2rem", 700, 1.2),
                h3: TextStyle::new("1.75rem", 600, 1.3),
                h4: TextStyle::new("1.5rem", 600, 1.3),
                h5: TextStyle::new("1.25rem", 500, 1.4),
                h6: TextStyle::new("1rem", 500, 1.6),
                body1: TextStyle::new("1rem", 400, 1.5),
                body2: TextStyle::new("0.875rem", 400, 1.5),
            },
            spacing_unit: 8,
            shape: Shape {
                border_radius: 4,
                button_radius: 8,
                card_radius: 12,
            },
            breakpoints: Breakpoints {
                sm: 600,
                md: 900,
                lg: 1200,
                xl: 1536,
            },
            drawer_width: 240,
        }
    }

    /// Light variant: indigo primary, yellow secondary on white.
    pub fn light() -> Self {
        let dark = Self::dark();
        Self {
            palette: Palette {
                mode: ThemeMode::Light,
                primary: ColorSet {
                    main: "#556cd6",
                    light: "#7789de",
                    dark: "#3b4b95",
                },
                secondary: ColorSet {
                    main: "#ffff00",
                    light: "#ffff33",
                    dark: "#b2b200",
                },
                error: ColorSet {
                    main: "#ff1744",
                    light: "#ff4569",
                    dark: "#b2102f",
                },
                success: ColorSet {
                    main: "#2e7d32",
                    light: "#4caf50",
                    dark: "#1b5e20",
                },
                background_default: "#ffffff",
                background_paper: "#ffffff",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
                divider: "rgba(0, 0, 0, 0.12)",
            },
            typography: Typography {
                font_family: "Roboto,\"Helvetica Neue\",Arial,sans-serif",
                h1: TextStyle::new("2.5rem", 700, 1.2),
                h2: TextStyle::new("2rem", 600, 1.2),
                h3: TextStyle::new("1.75rem", 600, 1.3),
                ..dark.typography
            },
            ..dark
        }
    }

    /// `n` spacing units as a CSS length.
    pub fn spacing(&self, n: u16) -> String {
        format!("{}px", n * self.spacing_unit)
    }

    /// `:root` block declaring every theme value as a custom property.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let mut css = String::from(":root {\n");
        let mut var = |name: &str, value: &str| {
            let _ = writeln!(css, "    --{name}: {value};");
        };

        var("color-scheme", p.mode.color_scheme());
        for (role, set) in [
            ("primary", &p.primary),
            ("secondary", &p.secondary),
            ("error", &p.error),
            ("success", &p.success),
        ] {
            var(&format!("{role}-main"), set.main);
            var(&format!("{role}-light"), set.light);
            var(&format!("{role}-dark"), set.dark);
        }
        var("bg-default", p.background_default);
        var("bg-paper", p.background_paper);
        var("text-primary", p.text_primary);
        var("text-secondary", p.text_secondary);
        var("divider", p.divider);

        var("font-family", self.typography.font_family);
        for (variant, style) in self.typography.variants() {
            var(&format!("{variant}-size"), style.font_size);
            var(&format!("{variant}-weight"), &style.font_weight.to_string());
            var(&format!("{variant}-line-height"), &style.line_height.to_string());
        }

        for n in [1, 2, 3, 4, 6, 8] {
            var(&format!("space-{n}"), &self.spacing(n));
        }
        var("radius", &format!("{}px", self.shape.border_radius));
        var("radius-button", &format!("{}px", self.shape.button_radius));
        var("radius-card", &format!("{}px", self.shape.card_radius));
        var("drawer-width", &format!("{}px", self.drawer_width));

        css.push_str("}\n");
        css
    }

    /// Media queries driven by the breakpoints.
    ///
    /// Custom properties cannot be used inside `@media` conditions, so the
    /// responsive rules are generated here instead of living in the static
    /// stylesheet.
    pub fn responsive_css(&self) -> String {
        let bp = &self.breakpoints;
        format!(
            "@media (max-width: {below_md}px) {{\n\
             \x20   .nav-links {{ display: none; }}\n\
             \x20   .nav-menu-btn {{ display: inline-flex; }}\n\
             \x20   .hero-visual {{ display: none; }}\n\
             \x20   .grid-2, .grid-3, .contact-grid {{ grid-template-columns: 1fr; }}\n\
             \x20   .hero-name {{ font-size: 2.5rem; }}\n\
             \x20   .hero-role {{ font-size: 1.5rem; }}\n\
             }}\n\
             @media (min-width: {md}px) and (max-width: {below_lg}px) {{\n\
             \x20   .grid-3.projects-grid {{ grid-template-columns: repeat(2, 1fr); }}\n\
             }}\n\
             @media (max-width: {below_sm}px) {{\n\
             \x20   .form-row {{ grid-template-columns: 1fr; }}\n\
             \x20   .footer-grid {{ grid-template-columns: 1fr; }}\n\
             }}\n\
             @media (min-width: {xl}px) {{\n\
             \x20   .container {{ max-width: 1200px; }}\n\
             }}\n",
            below_sm = bp.sm - 1,
            md = bp.md,
            below_md = bp.md - 1,
            below_lg = bp.lg - 1,
            xl = bp.xl,
        )
    }

    /// Theme-dependent part of the page stylesheet.
    pub fn stylesheet(&self) -> String {
        format!("{}{}", self.css_variables(), self.responsive_css())
    }

    /// Gradient used for progress bars and the submit button.
    pub fn primary_gradient(&self) -> String {
        format!(
            "linear-gradient(90deg, {} 0%, {} 100%)",
            self.palette.primary.dark, self.palette.primary.main
        )
    }
}
