//! Configuration discovery and effective settings resolution.
//!
//! html-lint reads `htmlint.toml` from the start directory (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `paths`: none (standard input)
//!
//! The rule set itself is fixed and not configurable; the config file only
//! covers output mode and default lint targets.
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `htmlint.toml`.
pub struct LintConfig {
    pub output: Option<String>,
    /// Default paths or glob patterns linted when the CLI names none.
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: String,
    pub paths: Vec<String>,
}

/// Walk upward from `start` to find the directory owning the config.
///
/// Stops when an `htmlint.toml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("htmlint.toml").exists() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintConfig` from `htmlint.toml` if present.
pub fn load_config(root: &Path) -> Option<LintConfig> {
    let path = root.join("htmlint.toml");
    if !path.exists() {
        return None;
    }
    let s = fs::read_to_string(&path).ok()?;
    toml::from_str(&s).ok()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_output: Option<&str>,
    cli_paths: &[String],
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let paths = if cli_paths.is_empty() {
        cfg.paths
    } else {
        cli_paths.to_vec()
    };

    Effective { root, output, paths }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("htmlint.toml"),
            "output = \"json\"\npaths = [\"site/**/*.html\"]\n",
        )
        .unwrap();
        let cfg = load_config(dir.path()).unwrap();
        assert_eq!(cfg.output.as_deref(), Some("json"));
        assert_eq!(cfg.paths, vec!["site/**/*.html".to_string()]);
    }

    #[test]
    fn test_detect_root_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("htmlint.toml"), "").unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_root(&nested), dir.path());
    }

    #[test]
    fn test_resolve_effective_precedence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("htmlint.toml"), "output = \"json\"\n").unwrap();
        let root = dir.path().to_string_lossy().to_string();

        // Config applies when CLI is silent.
        let eff = resolve_effective(Some(&root), None, &[]);
        assert_eq!(eff.output, "json");
        assert!(eff.paths.is_empty());

        // CLI wins over config.
        let paths = vec!["index.html".to_string()];
        let eff = resolve_effective(Some(&root), Some("human"), &paths);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.paths, paths);
    }

    #[test]
    fn test_resolve_effective_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let eff = resolve_effective(Some(&root), None, &[]);
        assert_eq!(eff.output, "human");
    }
}
