//! Project settings: where the site lives and which limits the rules use.
//!
//! The project root is the `--repo-root` path exactly as given. Without it,
//! the inspector starts from the working directory and climbs to the first
//! directory holding a `qa-inspector.toml|yaml|yml` or `.git`. Settings from
//! that root's config file fill in whatever the CLI leaves open; anything
//! still unset falls back to the site's historical layout (`print/`,
//! `prep/`, `index.html`, 25 plates) and the original rule limits.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_TOML: &str = "qa-inspector.toml";
pub const CONFIG_YAML: [&str; 2] = ["qa-inspector.yaml", "qa-inspector.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Threshold section under `[thresholds]`.
pub struct ThresholdsCfg {
    pub centered_text: Option<usize>,
    pub em_dash: Option<usize>,
    pub summary_min_chars: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `qa-inspector.toml|yaml`.
pub struct InspectorConfig {
    pub project: Option<String>,
    pub print_dir: Option<String>,
    pub prep_dir: Option<String>,
    pub dashboard: Option<String>,
    pub plates: Option<u32>,
    pub color: Option<bool>,
    #[serde(default)]
    pub thresholds: Option<ThresholdsCfg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Numeric limits used by threshold rules.
pub struct Thresholds {
    /// Flag centered text only above this many declarations.
    pub centered_text: usize,
    /// Flag em dashes only above this many occurrences.
    pub em_dash: usize,
    /// Minimum executive summary length in characters.
    pub summary_min_chars: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            centered_text: 8,
            em_dash: 10,
            summary_min_chars: 50,
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the scan after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub project: String,
    /// Platebook directory relative to `repo_root`; also the dashboard link prefix.
    pub print_dir: String,
    pub prep_dir: String,
    pub dashboard: String,
    pub plates: u32,
    pub thresholds: Thresholds,
    pub color: bool,
    pub fix: bool,
}

impl Effective {
    /// Defaults rooted at `repo_root`, without reading any config file.
    pub fn with_root(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        let project = project_name(&repo_root);
        Effective {
            repo_root,
            project,
            print_dir: "print".to_string(),
            prep_dir: "prep".to_string(),
            dashboard: "index.html".to_string(),
            plates: 25,
            thresholds: Thresholds::default(),
            color: true,
            fix: false,
        }
    }

    pub fn print_path(&self) -> PathBuf {
        self.repo_root.join(&self.print_dir)
    }

    pub fn prep_path(&self) -> PathBuf {
        self.repo_root.join(&self.prep_dir)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.repo_root.join(&self.dashboard)
    }
}

#[derive(Debug, Default, Clone)]
/// CLI-level overrides fed into `resolve_effective`.
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub no_color: bool,
    pub fix: bool,
}

/// First directory at or above `start` that holds an inspector config or a
/// `.git` entry; `start` itself when none does.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let is_root = |dir: &Path| {
        std::iter::once(CONFIG_TOML)
            .chain(CONFIG_YAML)
            .chain(std::iter::once(".git"))
            .any(|marker| dir.join(marker).exists())
    };
    start
        .ancestors()
        .find(|dir| is_root(*dir))
        .unwrap_or(start)
        .to_path_buf()
}

/// Load `InspectorConfig` from `qa-inspector.toml` or `.yaml|.yml` if present.
///
/// A file that exists but cannot be read or parsed is an error; no file at
/// all is `Ok(None)`.
pub fn load_config(root: &Path) -> Result<Option<InspectorConfig>, ConfigError> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: toml_path.clone(),
            source,
        })?;
        return Ok(Some(cfg));
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: p.clone(),
                source,
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` from CLI flags, the root's config file, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, ConfigError> {
    // Explicit roots are used as given, even when missing
    let repo_root = match cli.repo_root.as_deref() {
        Some(root) => PathBuf::from(root),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            detect_repo_root(&cwd)
        }
    };
    let cfg = load_config(&repo_root)?.unwrap_or_default();
    let thresholds = cfg.thresholds.clone().unwrap_or_default();
    let defaults = Effective::with_root(repo_root);
    let base = Thresholds::default();

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && cfg.color.unwrap_or(true);

    Ok(Effective {
        project: cfg.project.unwrap_or(defaults.project),
        print_dir: cfg.print_dir.unwrap_or(defaults.print_dir),
        prep_dir: cfg.prep_dir.unwrap_or(defaults.prep_dir),
        dashboard: cfg.dashboard.unwrap_or(defaults.dashboard),
        plates: cfg.plates.unwrap_or(defaults.plates),
        thresholds: Thresholds {
            centered_text: thresholds.centered_text.unwrap_or(base.centered_text),
            em_dash: thresholds.em_dash.unwrap_or(base.em_dash),
            summary_min_chars: thresholds
                .summary_min_chars
                .unwrap_or(base.summary_min_chars),
        },
        color,
        fix: cli.fix,
        repo_root: defaults.repo_root,
    })
}

fn project_name(root: &Path) -> String {
    // "." has no file name; canonicalize to get the real directory name
    let named = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            fs::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        });
    named.unwrap_or_else(|| "project".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn overrides(root: &Path) -> CliOverrides {
        CliOverrides {
            repo_root: root.to_str().map(String::from),
            // keep assertions independent of the caller's NO_COLOR
            no_color: false,
            fix: false,
        }
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join(CONFIG_TOML)).unwrap();
        writeln!(
            f,
            "{}",
            r#"
project = "hist213-dashboard"
print_dir = "out/print"
plates = 30
[thresholds]
em_dash = 4
    "#
        )
        .unwrap();

        let eff = resolve_effective(&overrides(root)).unwrap();
        assert_eq!(eff.project, "hist213-dashboard");
        assert_eq!(eff.print_dir, "out/print");
        assert_eq!(eff.prep_dir, "prep");
        assert_eq!(eff.plates, 30);
        assert_eq!(eff.thresholds.em_dash, 4);
        // unspecified thresholds keep their defaults
        assert_eq!(eff.thresholds.centered_text, 8);
        assert_eq!(eff.thresholds.summary_min_chars, 50);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("qa-inspector.yaml"),
            "dashboard: site/index.html\ncolor: false\n",
        )
        .unwrap();

        let eff = resolve_effective(&overrides(root)).unwrap();
        assert_eq!(eff.dashboard, "site/index.html");
        assert_eq!(eff.plates, 25);
        assert!(!eff.color);
    }

    #[test]
    fn test_no_config_uses_directory_name() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("hist213-dashboard");
        fs::create_dir_all(root.join(".git")).unwrap();

        let eff = resolve_effective(&overrides(&root)).unwrap();
        assert_eq!(eff.project, "hist213-dashboard");
        assert_eq!(eff.print_path(), root.join("print"));
    }

    #[test]
    fn test_cli_no_color_wins_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(CONFIG_TOML), "color = true\n").unwrap();

        let mut cli = overrides(root);
        cli.no_color = true;
        cli.fix = true;
        let eff = resolve_effective(&cli).unwrap();
        assert!(!eff.color);
        assert!(eff.fix);
    }

    #[test]
    fn test_detect_walks_up_to_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(CONFIG_TOML), "").unwrap();
        let nested = root.join("print/images");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_repo_root(&nested), root.to_path_buf());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(CONFIG_TOML), "plates = \"many\"\n").unwrap();

        let err = resolve_effective(&overrides(root)).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_explicit_root_is_not_climbed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        let site = dir.path().join("site");
        fs::create_dir_all(&site).unwrap();

        let eff = resolve_effective(&overrides(&site)).unwrap();
        assert_eq!(eff.repo_root, site);
        assert_eq!(eff.project, "site");
    }

    #[test]
    fn test_missing_explicit_root_fails_the_scan() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        let typo = dir.path().join("no-such-site");

        let eff = resolve_effective(&overrides(&typo)).unwrap();
        assert_eq!(eff.repo_root, typo);
        let err = crate::scan::run_scan(&eff).unwrap_err();
        assert!(matches!(err, crate::error::ScanError::RootUnreadable { .. }));
    }
}
