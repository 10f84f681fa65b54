//! Rules for the dashboard entry point (`index.html`).
//!
//! The dashboard embeds its plate table and renderers as inline script, so
//! these rules read the script text directly: plate references, web link
//! rendering, hardcoded sidebar branches, and local `print/` links.

use super::sort_plate_numbers;
use crate::discover::exec_summary_path;
use crate::models::{Issue, Severity};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// From the renderer's declaration through the start of the next function.
static MAIN_RENDERER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)function renderMainWithPrep\(.*?\nfunction ").unwrap());
static WEBLINK_RENDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"p\.webLinks.*h\s*\+=").unwrap());
static PLATE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{plate:(\d+)").unwrap());
static PLATE_WITH_WEBLINKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{plate:(\d+)[^}]*webLinks:").unwrap());
static HARDCODED_SIDEBAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"p\.plate\s*===\s*(\d+)").unwrap());
static URL_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r#"url:\s*"([^"]+)""#).unwrap());
static HREF_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="([^"]+)""#).unwrap());

pub fn dashboard_not_found(file: &str) -> Issue {
    Issue::new(Severity::Critical, file, "index.html not found!")
}

/// Web links belong in the sidebar. Flags the main renderer only when it
/// actually appends link markup and never mentions the sidebar.
pub fn links_in_main_content(file: &str, content: &str) -> Option<Issue> {
    let body = MAIN_RENDERER.find(content)?.as_str();
    let renders = body.contains("webLinks")
        && !body.to_lowercase().contains("sidebar")
        && WEBLINK_RENDER.is_match(body);
    renders.then(|| {
        Issue::new(
            Severity::Critical,
            file,
            "webLinks rendered in main content area instead of sidebar.",
        )
    })
}

/// One MINOR per `{plate:N` reference with no exec summary on disk.
pub fn plates_without_exec_summary(
    file: &str,
    content: &str,
    prep_dir: &Path,
    prep_display: &str,
) -> Vec<Issue> {
    PLATE_REF
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|n| !exec_summary_path(prep_dir, n).exists())
        .map(|n| {
            Issue::new(
                Severity::Minor,
                file,
                format!(
                    "Plate {} has no exec summary JSON ({}/execsummary-{}.json).",
                    n, prep_display, n
                ),
            )
        })
        .collect()
}

/// Plates that carry `webLinks` and also have a hardcoded sidebar branch.
pub fn duplicated_deep_dives(file: &str, content: &str) -> Vec<Issue> {
    let with_links: BTreeSet<String> = captured(&PLATE_WITH_WEBLINKS, content);
    let hardcoded: BTreeSet<String> = captured(&HARDCODED_SIDEBAR, content);
    let mut dupes: Vec<String> = with_links.intersection(&hardcoded).cloned().collect();
    sort_plate_numbers(&mut dupes);
    dupes
        .into_iter()
        .map(|n| {
            Issue::new(
                Severity::Warning,
                file,
                format!(
                    "Plate {} has both webLinks AND hardcoded sidebar deep dives. Possible duplication.",
                    n
                ),
            )
        })
        .collect()
}

/// Local `print/...` links in the plate table (`url: "..."`) and in
/// hardcoded sidebar markup (`href="..."`) must point at existing files.
pub struct LinkRules {
    /// Print directory plus trailing slash, e.g. `print/`.
    prefix: String,
}

impl LinkRules {
    /// Link rules for the configured print directory.
    pub fn new(print_dir: &str) -> Self {
        LinkRules {
            prefix: format!("{}/", print_dir.trim_end_matches('/')),
        }
    }

    pub fn broken_links(&self, file: &str, root: &Path, content: &str) -> Vec<Issue> {
        let mut issues = self
            .missing_targets(&URL_LINK, content, root)
            .map(|r| {
                Issue::new(
                    Severity::Critical,
                    file,
                    format!("Broken local link: {} (file does not exist).", r),
                )
            })
            .collect::<Vec<_>>();
        issues.extend(self.missing_targets(&HREF_LINK, content, root).map(|r| {
            Issue::new(
                Severity::Critical,
                file,
                format!("Broken sidebar link: {} (file does not exist).", r),
            )
        }));
        issues
    }

    /// Captured link targets under the print directory with no file on disk.
    fn missing_targets<'a>(
        &'a self,
        re: &'a Regex,
        content: &'a str,
        root: &'a Path,
    ) -> impl Iterator<Item = &'a str> + 'a {
        re.captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(move |r| r.len() > self.prefix.len() && r.starts_with(&self.prefix))
            .filter(move |r| !root.join(r).exists())
    }
}

fn captured(re: &Regex, content: &str) -> BTreeSet<String> {
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
