//! Rules for generated platebook pages (`print/platebook-N.html`).
//!
//! Each rule targets a defect that has shipped before: the old absolutely
//! positioned timeline, empty or Leaflet-less maps, missing CJK fonts,
//! Wikimedia hotlinks, emoji placeholders, centered-text layouts, broken image
//! references and em dash overuse.

use crate::config::Thresholds;
use crate::discover::platebook_path;
use crate::models::{Issue, Severity};
use crate::utils::display_path;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static EMPTY_MAP_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<div class="map-box">\s*\n?\s*</div>"#).unwrap());
static MAP_DIV_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<div id="[^"]*map[^"]*""#).unwrap());
static CJK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{4e00}-\x{9fff}\x{3040}-\x{309f}\x{30a0}-\x{30ff}\x{ac00}-\x{d7af}]").unwrap()
});
static EMOJI_GRADIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)background:\s*linear-gradient.*emoji").unwrap());
static CENTERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"text-align:\s*center").unwrap());
static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:src|url)\s*[=(]\s*["']?(images/[^"')\s]+)"#).unwrap());

const EM_DASH: &str = "\u{2014}";
/// An em dash that went through a UTF-8 -> cp1252 round trip.
const EM_DASH_MOJIBAKE: &str = " \u{e2}\u{20ac}\u{201d} ";

/// Run every platebook rule against one page, in report order.
///
/// `dir` is the page's directory; image references resolve against it.
pub fn check_platebook(file: &str, dir: &Path, content: &str, limits: &Thresholds) -> Vec<Issue> {
    let mut issues: Vec<Issue> = [
        old_timeline(file, content),
        empty_map_box(file, content),
        map_without_leaflet(file, content),
        cjk_without_font(file, content),
        wikimedia_hotlink(file, content),
        emoji_gradient_placeholder(file, content),
        excessive_centering(file, content, limits.centered_text),
    ]
    .into_iter()
    .flatten()
    .collect();
    issues.extend(broken_image_refs(file, dir, content));
    issues.extend(em_dash_overuse(file, content, limits.em_dash));
    issues
}

pub fn old_timeline(file: &str, content: &str) -> Option<Issue> {
    (content.contains("height: 78px") && content.contains("timeline-box")).then(|| {
        Issue::new(
            Severity::Critical,
            file,
            "Old timeline pattern (height:78px, absolute positioning). Use flexbox tl-row/tl-event.",
        )
    })
}

pub fn empty_map_box(file: &str, content: &str) -> Option<Issue> {
    EMPTY_MAP_BOX.is_match(content).then(|| {
        Issue::new(
            Severity::Critical,
            file,
            "Empty map box. Must use Leaflet with real coordinates.",
        )
    })
}

/// Only a literal `<div id="...map...">` counts as a map; class names do not.
pub fn map_without_leaflet(file: &str, content: &str) -> Option<Issue> {
    let has_leaflet = content.to_lowercase().contains("leaflet") || content.contains("L.map");
    (!has_leaflet && MAP_DIV_ID.is_match(content)).then(|| {
        Issue::new(
            Severity::Warning,
            file,
            "Map div found but no Leaflet.js included.",
        )
    })
}

pub fn cjk_without_font(file: &str, content: &str) -> Option<Issue> {
    let has_font = content.contains("Noto Sans") || content.contains("fonts.googleapis.com");
    (!has_font && CJK.is_match(content)).then(|| {
        Issue::new(
            Severity::Minor,
            file,
            "CJK characters present but no Noto Sans font include.",
        )
    })
}

pub fn wikimedia_hotlink(file: &str, content: &str) -> Option<Issue> {
    content.contains("upload.wikimedia.org").then(|| {
        Issue::new(
            Severity::Critical,
            file,
            "Wikimedia Commons hotlink (will 404). Use local images.",
        )
    })
}

pub fn emoji_gradient_placeholder(file: &str, content: &str) -> Option<Issue> {
    EMOJI_GRADIENT.is_match(content).then(|| {
        Issue::new(
            Severity::Critical,
            file,
            "CSS gradient + emoji as image placeholder. Use real images.",
        )
    })
}

/// Labels and markers legitimately center a few lines; only flag above `limit`.
pub fn excessive_centering(file: &str, content: &str, limit: usize) -> Option<Issue> {
    let count = CENTERED.find_iter(content).count();
    (count > limit).then(|| {
        Issue::new(
            Severity::Minor,
            file,
            format!(
                "Excessive text-align:center ({} instances). Check layout rules.",
                count
            ),
        )
    })
}

/// One issue per `images/...` reference whose file is missing under `dir`.
pub fn broken_image_refs(file: &str, dir: &Path, content: &str) -> Vec<Issue> {
    IMAGE_REF
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|rel| !dir.join(rel).exists())
        .map(|rel| {
            Issue::new(
                Severity::Warning,
                file,
                format!("Broken local image ref: {}", rel),
            )
        })
        .collect()
}

pub fn em_dash_overuse(file: &str, content: &str, limit: usize) -> Option<Issue> {
    let count = content.matches(EM_DASH).count() + content.matches(EM_DASH_MOJIBAKE).count();
    (count > limit).then(|| {
        Issue::new(
            Severity::Minor,
            file,
            format!(
                "Em dash overuse ({} instances). Use periods, commas, colons.",
                count
            ),
        )
    })
}

/// One WARNING per plate in `1..=plates` without a platebook page.
pub fn missing_platebooks(root: &Path, print_dir: &Path, plates: u32) -> Vec<Issue> {
    (1..=plates)
        .filter_map(|n| {
            let pb = platebook_path(print_dir, n);
            (!pb.exists()).then(|| {
                Issue::new(
                    Severity::Warning,
                    display_path(root, &pb),
                    format!("Platebook {} does not exist.", n),
                )
            })
        })
        .collect()
}
