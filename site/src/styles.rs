//! Static stylesheet for the page.
//!
//! Colors, type scale, spacing and radii come from the custom properties
//! emitted by [`crate::theme::Theme::css_variables`]; breakpoints come from
//! [`crate::theme::Theme::responsive_css`]. Section backgrounds are fixed
//! near-black shades layered over the theme background.
//!
//! # Customization
//!
//! ```rust
//! use portfolio_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-name { letter-spacing: 0.05em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Base stylesheet (baseline reset, layout, sections, cards, form, snackbar).
pub const SITE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
    color-scheme: var(--color-scheme);
}

body {
    margin: 0;
    font-family: var(--font-family);
    font-size: var(--body1-size);
    line-height: var(--body1-line-height);
    background: var(--bg-default);
    color: var(--text-primary);
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
}

h1, h2, h3, h4, h5, h6, p {
    margin: 0;
}

.page {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.page-main {
    flex-grow: 1;
}

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 var(--space-3);
}

.icon {
    display: inline-block;
    flex-shrink: 0;
    vertical-align: middle;
}

/* ---- Navigation bar ---- */

.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1100;
    background: var(--bg-default);
    border-bottom: 1px solid var(--divider);
}

.nav-toolbar {
    display: flex;
    align-items: center;
    min-height: 64px;
    padding: 0 var(--space-3);
}

.nav-brand {
    flex-grow: 1;
    font-size: var(--h6-size);
    font-weight: 700;
    color: var(--primary-main);
    text-decoration: none;
}

.nav-links {
    display: flex;
}

.nav-link {
    margin: 0 var(--space-1);
    padding: 6px var(--space-2);
    border-radius: var(--radius-button);
    color: var(--text-primary);
    text-decoration: none;
    transition: color 0.2s, background-color 0.2s;
}

.nav-link:hover {
    color: var(--primary-main);
    background-color: rgba(144, 202, 249, 0.08);
}

.nav-menu-btn {
    display: none;
    align-items: center;
    justify-content: center;
    padding: var(--space-1);
    border: none;
    border-radius: 50%;
    background: transparent;
    color: inherit;
    text-decoration: none;
    cursor: pointer;
}

.nav-spacer {
    min-height: 64px;
}

.nav-backdrop {
    position: fixed;
    inset: 0;
    z-index: 1200;
    background: rgba(0, 0, 0, 0.5);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.225s;
}

.nav-backdrop.open,
.nav-drawer:target ~ .nav-backdrop {
    opacity: 1;
    pointer-events: auto;
}

.nav-drawer {
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    z-index: 1300;
    width: var(--drawer-width);
    padding: var(--space-2) 0;
    text-align: center;
    background: var(--bg-default);
    transform: translateX(-100%);
    transition: transform 0.225s ease-out;
}

.nav-drawer.open,
.nav-drawer:target {
    transform: translateX(0);
}

.drawer-brand {
    margin: var(--space-2) 0;
    font-size: var(--h6-size);
    font-weight: var(--h6-weight);
    color: var(--primary-main);
}

.drawer-list {
    list-style: none;
    margin: 0;
    padding: var(--space-1) 0;
}

.drawer-link {
    display: block;
    padding: var(--space-1) var(--space-2);
    color: var(--text-primary);
    text-decoration: none;
}

.drawer-link:hover {
    color: var(--primary-main);
    background-color: rgba(144, 202, 249, 0.08);
}

/* ---- Buttons ---- */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: var(--space-1);
    padding: 8px 24px;
    border: none;
    border-radius: var(--radius-button);
    font: inherit;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.2s, box-shadow 0.2s, color 0.2s, background-color 0.2s;
}

.btn-secondary {
    font-size: 1.1rem;
    padding: 12px 32px;
    background: var(--secondary-main);
    color: rgba(0, 0, 0, 0.87);
}

.btn-secondary:hover {
    transform: translateY(-2px);
    box-shadow: 0 3px 5px rgba(0, 0, 0, 0.2), 0 6px 10px rgba(0, 0, 0, 0.14);
}

.btn-text {
    padding: 4px 10px;
    background: transparent;
    color: var(--text-secondary);
    font-size: var(--body2-size);
}

.btn-text:hover {
    color: var(--primary-main);
}

.btn-text.accent {
    color: var(--primary-main);
}

.btn-text.accent:hover {
    color: var(--primary-light);
    background-color: rgba(144, 202, 249, 0.08);
}

.btn-submit {
    width: 100%;
    margin-top: var(--space-1);
    padding: 12px 24px;
    font-size: 1rem;
    color: rgba(0, 0, 0, 0.87);
    background-image: linear-gradient(90deg, var(--primary-dark) 0%, var(--primary-main) 100%);
}

.btn-submit:hover {
    background-image: linear-gradient(90deg, var(--primary-main) 0%, var(--primary-light) 100%);
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
}

.icon-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: var(--space-1);
    border-radius: 50%;
    color: var(--text-secondary);
    transition: color 0.2s, background-color 0.2s;
}

.icon-btn:hover {
    color: var(--primary-main);
    background-color: rgba(144, 202, 249, 0.08);
}

/* ---- Sections ---- */

.section {
    padding: var(--space-8) 0;
    scroll-margin-top: 64px;
}

.section-header {
    text-align: center;
    margin-bottom: var(--space-6);
}

.section-title {
    margin-bottom: var(--space-2);
    font-size: var(--h2-size);
    font-weight: 700;
    color: var(--primary-light);
}

.section-subtitle {
    max-width: 800px;
    margin: 0 auto;
    font-size: var(--h5-size);
    font-weight: var(--h5-weight);
    color: var(--text-secondary);
}

.grid-2,
.grid-3 {
    display: grid;
    gap: var(--space-4);
}

.grid-2 {
    grid-template-columns: repeat(2, 1fr);
}

.grid-3 {
    grid-template-columns: repeat(3, 1fr);
}

.stack {
    display: flex;
    flex-direction: column;
    gap: var(--space-3);
}

.card {
    height: 100%;
    padding: var(--space-4);
    background: var(--bg-paper);
    border: 1px solid rgba(255, 255, 255, 0.05);
    border-radius: var(--radius-card);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
    transition: transform 0.3s ease-in-out, box-shadow 0.3s ease-in-out;
}

.card:hover {
    transform: translateY(-5px);
    box-shadow: 0 12px 28px rgba(0, 0, 0, 0.3);
}

.card-title {
    margin-bottom: 0.35em;
    font-size: var(--h5-size);
    font-weight: 600;
    color: var(--primary-main);
}

.card-text {
    margin-bottom: var(--space-2);
    color: var(--text-secondary);
}

/* ---- Hero ---- */

.hero {
    display: flex;
    align-items: center;
    min-height: 100vh;
    padding: var(--space-4);
    color: #ffffff;
    background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%);
    background-size: 200% 200%;
    animation: hero-shift 18s ease infinite;
}

.hero-content {
    max-width: 800px;
    margin: 0 auto;
    text-align: center;
}

.hero-name {
    margin-bottom: var(--space-2);
    font-size: 4rem;
    font-weight: 700;
    color: var(--primary-light);
}

.hero-role {
    margin-bottom: var(--space-4);
    font-size: 2rem;
    opacity: 0.9;
}

.hero-tagline {
    margin-bottom: var(--space-4);
    font-size: var(--h5-size);
    opacity: 0.8;
}

.hero-visual {
    display: flex;
    align-items: center;
    justify-content: center;
}

.hero-avatar {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 400px;
    height: 400px;
    border-radius: 50%;
    background-color: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
    font-size: var(--h5-size);
    color: rgba(255, 255, 255, 0.6);
    animation: hero-float 6s ease-in-out infinite;
}

.hero-ring {
    position: absolute;
    inset: -16px;
    border: 1px dashed rgba(144, 202, 249, 0.25);
    border-radius: 50%;
    animation: hero-spin 40s linear infinite;
}

.hero-scroll {
    display: flex;
    justify-content: center;
    margin-top: var(--space-8);
}

.hero-scroll-link {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: var(--space-1);
    font-size: var(--body2-size);
    color: rgba(255, 255, 255, 0.6);
    text-decoration: none;
}

.hero-scroll-link:hover {
    color: var(--primary-main);
}

.hero-scroll-link .icon {
    animation: hero-bounce 2s ease-in-out infinite;
}

@keyframes hero-shift {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}

@keyframes hero-float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}

@keyframes hero-spin {
    to { transform: rotate(360deg); }
}

@keyframes hero-bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(6px); }
}

@media (prefers-reduced-motion: reduce) {
    .hero, .hero-avatar, .hero-ring, .hero-scroll-link .icon {
        animation: none;
    }
}

/* ---- About ---- */

.about {
    position: relative;
    background: var(--bg-default);
}

.about::before {
    content: "";
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 200px;
    background: linear-gradient(180deg, #0f0f0f 0%, transparent 100%);
    z-index: 1;
}

.about > .container {
    position: relative;
    z-index: 2;
}

.highlight-card {
    padding: var(--space-4);
}

.highlight-card .card-title {
    font-size: var(--h6-size);
}

/* ---- Skills ---- */

.skills {
    background: #0a0a0a;
}

.skill-card {
    padding: var(--space-3);
}

.skill-list {
    margin-top: var(--space-3);
}

.skill-row {
    margin-bottom: var(--space-3);
}

.skill-label {
    display: flex;
    justify-content: space-between;
    margin-bottom: var(--space-1);
}

.skill-name {
    font-weight: 500;
}

.skill-level {
    font-size: var(--body2-size);
    color: var(--primary-light);
}

.skill-bar {
    height: 8px;
    overflow: hidden;
    border-radius: 4px;
    background-color: rgba(255, 255, 255, 0.05);
}

.skill-bar-fill {
    height: 100%;
    border-radius: 4px;
    transition: width 0.4s linear;
}

/* ---- Projects ---- */

.projects {
    background: #0f0f0f;
}

.project-card {
    display: flex;
    flex-direction: column;
    padding: 0;
    overflow: hidden;
    box-shadow: none;
}

.project-card:hover {
    transform: translateY(-8px);
    box-shadow: 0 12px 20px rgba(0, 0, 0, 0.3);
}

.project-image {
    display: block;
    width: 100%;
    height: 200px;
    object-fit: cover;
}

.project-body {
    flex-grow: 1;
    padding: var(--space-3);
}

.project-body .card-text {
    font-size: var(--body2-size);
    margin-bottom: var(--space-3);
}

.tech-list {
    display: flex;
    flex-wrap: wrap;
    gap: var(--space-1);
}

.tech-chip {
    display: inline-flex;
    align-items: center;
    height: 24px;
    padding: 0 10px;
    border-radius: 16px;
    font-size: 0.8125rem;
    background-color: rgba(144, 202, 249, 0.12);
    color: var(--primary-light);
}

.tech-chip:hover {
    background-color: rgba(144, 202, 249, 0.2);
}

.project-actions {
    display: flex;
    gap: var(--space-1);
    padding: 0 var(--space-2) var(--space-2);
}

/* ---- Contact ---- */

.contact {
    background: #0a0a0a;
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: var(--space-4);
}

.contact-card {
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}

.contact-card:hover {
    transform: none;
}

.contact-list {
    margin-top: var(--space-3);
}

.contact-item {
    display: flex;
    align-items: center;
    margin-bottom: var(--space-2);
}

.contact-icon {
    margin-right: var(--space-2);
    color: var(--primary-main);
}

.contact-item-title {
    font-size: 1rem;
}

.contact-item-link {
    color: var(--text-secondary);
    text-decoration: none;
}

.contact-item-link:hover {
    color: var(--primary-main);
}

.social-block {
    margin-top: var(--space-4);
}

.social-title {
    margin-bottom: 0.35em;
    font-size: var(--h6-size);
    font-weight: var(--h6-weight);
    color: var(--primary-main);
}

.social-links {
    display: flex;
    gap: var(--space-2);
}

.contact-form {
    display: grid;
    gap: var(--space-3);
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: var(--space-3);
}

.field {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.field-label {
    font-size: var(--body2-size);
    color: var(--text-secondary);
}

.field-input {
    width: 100%;
    padding: 16px 14px;
    font: inherit;
    color: var(--text-primary);
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: var(--radius);
    resize: vertical;
}

.field-input:hover {
    border-color: rgba(255, 255, 255, 0.2);
}

.field-input:focus {
    outline: none;
    border-color: var(--primary-main);
}

/* ---- Snackbar ---- */

.snackbar {
    position: fixed;
    left: var(--space-3);
    bottom: var(--space-3);
    z-index: 1400;
    min-width: 288px;
}

.alert {
    display: flex;
    align-items: center;
    gap: var(--space-1);
    padding: 6px 16px;
    border-radius: var(--radius);
    font-size: var(--body2-size);
    color: rgba(0, 0, 0, 0.87);
    box-shadow: 0 3px 5px rgba(0, 0, 0, 0.2);
}

.alert-message {
    flex-grow: 1;
    padding: 8px 0;
}

.alert-close {
    padding: 4px;
    border: none;
    background: transparent;
    color: inherit;
    cursor: pointer;
}

/* ---- Footer ---- */

.footer {
    margin-top: auto;
    padding: var(--space-6) 0;
    background-color: #050505;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: var(--space-4);
}

.footer-heading {
    margin-bottom: 0.35em;
    font-size: var(--h6-size);
    font-weight: var(--h6-weight);
    color: var(--primary-main);
}

.footer-blurb {
    font-size: var(--body2-size);
    color: var(--text-secondary);
}

.footer-links {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-links li {
    margin-bottom: var(--space-1);
}

.footer-link {
    color: var(--text-secondary);
    text-decoration: none;
}

.footer-link:hover {
    color: var(--primary-main);
}

.footer-divider {
    margin: var(--space-4) 0;
    border: none;
    height: 1px;
    background-color: rgba(255, 255, 255, 0.05);
}

.footer-copyright {
    text-align: center;
    font-size: var(--body2-size);
    color: var(--text-secondary);
}
"#;
