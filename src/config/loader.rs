//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavError, NavResult};

use super::types::Config;

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".sidenav.toml";

/// Environment variable overriding `sidebar.default_collapsed`
pub const ENV_DEFAULT_COLLAPSED: &str = "SIDENAV_DEFAULT_COLLAPSED";

/// Non-fatal configuration warning (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: key_line(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_file) = user_config_file(|name| std::env::var(name).ok()) {
        candidates.push(user_file);
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for w in &warnings {
                    match &w.suggestion {
                        Some(s) => log::warn!(
                            "unknown key '{}' in {} (did you mean '{}'?)",
                            w.key,
                            w.file.display(),
                            s
                        ),
                        None => log::warn!("unknown key '{}' in {}", w.key, w.file.display()),
                    }
                }
                return with_env_overrides(config);
            }
            Err(e) => log::warn!("ignoring {}: {}", path.display(), e),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (SIDENAV_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_DEFAULT_COLLAPSED) {
        match parse_bool(&val) {
            Some(b) => config.sidebar.default_collapsed = b,
            None => log::warn!(
                "invalid {} value '{}', expected true or false",
                ENV_DEFAULT_COLLAPSED,
                val
            ),
        }
    }
    config
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// User-level config file: `$XDG_CONFIG_HOME/sidenav/config.toml`, falling
/// back to `$HOME/.config/sidenav/config.toml`
pub(crate) fn user_config_file<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let base = lookup("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(base.join("sidenav").join("config.toml"))
}

/// 1-based line where `key` is assigned or opened as a table
pub(crate) fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) == Some(key)
                || line
                    .strip_prefix(key)
                    .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &["sidebar", "default_collapsed"];
const MAX_SUGGESTION_EDITS: usize = 2;

/// Closest known key within two edits of `unknown`
pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    (0..=MAX_SUGGESTION_EDITS)
        .find_map(|budget| {
            KNOWN_KEYS
                .iter()
                .find(|known| within_edits(unknown.as_bytes(), known.as_bytes(), budget))
        })
        .map(|known| known.to_string())
}

/// True when `a` becomes `b` with at most `budget` byte insertions,
/// deletions or substitutions
fn within_edits(a: &[u8], b: &[u8], budget: usize) -> bool {
    match (a.split_first(), b.split_first()) {
        (None, _) => b.len() <= budget,
        (_, None) => a.len() <= budget,
        (Some((x, a_rest)), Some((y, b_rest))) if x == y => within_edits(a_rest, b_rest, budget),
        (Some((_, a_rest)), Some((_, b_rest))) => {
            budget > 0
                && (within_edits(a_rest, b_rest, budget - 1)
                    || within_edits(a_rest, b, budget - 1)
                    || within_edits(a, b_rest, budget - 1))
        }
    }
}
