//! # portfolio-export
//!
//! Prerenders the portfolio page to a standalone HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Default content, dark theme, dist/index.html
//! portfolio-export
//!
//! # Start from a template and override content
//! portfolio-export --print-content > content.json
//! portfolio-export --content content.json --theme light --out public/index.html
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use portfolio_site::content::SiteContent;
use portfolio_site::render_page;
use portfolio_site::theme::Theme;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio-export")]
#[command(about = "Render the portfolio to a static HTML file")]
#[command(version)]
struct Args {
    /// Output file (parent directories are created)
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// JSON file overriding the built-in content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Copyright year (defaults to the content value, then the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Print the effective content as JSON and exit
    #[arg(long)]
    print_content: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    fn theme(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

// ============================================================================
// Export
// ============================================================================

/// Content from `--content` (or the defaults) with `--year` applied.
fn resolve_content(args: &Args) -> Result<SiteContent> {
    let mut content = match &args.content {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => SiteContent::default(),
    };
    if let Some(year) = args.year {
        content.footer.copyright_year = Some(year);
    }

    for skill in content.out_of_range_skills() {
        warn!(
            skill = %skill.name,
            level = skill.level,
            "skill level outside 0-100, bar will be clamped"
        );
    }
    Ok(content)
}

fn write_page(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}

fn run(args: Args) -> Result<()> {
    let content = resolve_content(&args)?;

    if args.print_content {
        println!("{}", content.to_json_pretty()?);
        return Ok(());
    }

    let html = render_page(&content, &args.theme.theme());
    write_page(&args.out, &html)?;

    info!(
        out = %args.out.display(),
        bytes = html.len(),
        theme = ?args.theme,
        "portfolio exported"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout is reserved for --print-content
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["portfolio-export"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        assert_eq!(args.out, PathBuf::from("dist/index.html"));
        assert_eq!(args.theme, ThemeChoice::Dark);
        assert!(args.content.is_none());
        assert!(!args.print_content);
    }

    #[test]
    fn writes_page_into_new_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/site/index.html");
        let out_arg = out.to_string_lossy().into_owned();

        run(args(&["--out", &out_arg, "--year", "2030"])).unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2030 Mark Matuguina"));
    }

    #[test]
    fn content_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let content_path = dir.path().join("content.json");
        fs::write(
            &content_path,
            r#"{ "profile": { "name": "Ada Lovelace" }, "footer": { "copyright_year": 1843 } }"#,
        )
        .unwrap();
        let out = dir.path().join("index.html");

        run(args(&[
            "--content",
            &content_path.to_string_lossy(),
            "--out",
            &out.to_string_lossy(),
            "--theme",
            "light",
        ]))
        .unwrap();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("© 1843 Ada Lovelace"));
        assert!(html.contains("--primary-main: #556cd6;"));
        // untouched sections keep the built-in data
        assert!(html.contains("E-Commerce Platform"));
    }

    #[test]
    fn year_flag_beats_content_file() {
        let dir = TempDir::new().unwrap();
        let content_path = dir.path().join("content.json");
        fs::write(&content_path, r#"{ "footer": { "copyright_year": 1999 } }"#).unwrap();

        let content = resolve_content(&args(&[
            "--content",
            &content_path.to_string_lossy(),
            "--year",
            "2024",
        ]))
        .unwrap();
        assert_eq!(content.copyright_year(), 2024);
    }

    #[test]
    fn skill_levels_outside_percent_range_still_export() {
        let dir = TempDir::new().unwrap();
        let content_path = dir.path().join("content.json");
        fs::write(
            &content_path,
            r#"{ "brand": "Folio", "skills": [ { "title": "X", "skills": [
                { "name": "Over", "level": 300 }, { "name": "Under", "level": -5 } ] } ] }"#,
        )
        .unwrap();
        let content_arg = content_path.to_string_lossy().into_owned();

        let content = resolve_content(&args(&["--content", &content_arg])).unwrap();
        assert_eq!(content.brand, "Folio");
        assert_eq!(content.out_of_range_skills().count(), 2);

        let html = render_page(&content, &Theme::dark());
        assert!(html.contains("width: 100%"));
        assert!(html.contains("width: 0%"));
    }

    #[test]
    fn missing_content_file_is_reported() {
        let err = resolve_content(&args(&["--content", "/no/such/content.json"])).unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/content.json"));
    }

    #[test]
    fn print_content_writes_no_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.html");

        run(args(&["--print-content", "--out", &out.to_string_lossy()])).unwrap();
        assert!(!out.exists());
    }
}
