use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{Bounds, DEFAULT_MAX_SIZE};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub max_width: Option<usize>,
    pub max_height: Option<usize>,
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            max_width: other.max_width.or(self.max_width),
            max_height: other.max_height.or(self.max_height),
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    /// Image size limits, falling back to the defaults for unset sides.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.max_width.unwrap_or(DEFAULT_MAX_SIZE),
            self.max_height.unwrap_or(DEFAULT_MAX_SIZE),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("bitmap-editor").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("bitmap-editor")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("bitmap-editor").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("bitmap-editor")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".bitmaprc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# bitmap-editor defaults (saved with --save)".to_string()];
    if let Some(width) = flags.max_width {
        lines.push(format!("--max-width {width}"));
    }
    if let Some(height) = flags.max_height {
        lines.push(format!("--max-height {height}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from a token list. Unknown tokens and malformed
/// values are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--perf" => flags.perf = true,
            "--max-width" | "--max-height" | "--debug-log" => {
                if let Some(next) = tokens.get(i + 1) {
                    apply_valued(&mut flags, token, next);
                    i += 1;
                }
            }
            _ => {
                if let Some((name, value)) = token.split_once('=') {
                    apply_valued(&mut flags, name, value);
                }
            }
        }
        i += 1;
    }
    flags
}

fn apply_valued(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--max-width" => flags.max_width = value.parse().ok().or(flags.max_width),
        "--max-height" => flags.max_height = value.parse().ok().or(flags.max_height),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "bitmap-editor".to_string(),
            "--max-width".to_string(),
            "40".to_string(),
            "--max-height=30".to_string(),
            "--perf".to_string(),
            "--debug-log=run.log".to_string(),
            "script.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.max_width, Some(40));
        assert_eq!(flags.max_height, Some(30));
        assert!(flags.perf);
        assert_eq!(flags.debug_log, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_parse_flag_tokens_skips_malformed_sizes() {
        let args = vec!["--max-width".to_string(), "wide".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.max_width, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            perf: true,
            max_width: Some(10),
            max_height: Some(12),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            max_width: Some(20),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.perf);
        assert_eq!(merged.max_width, Some(20));
        assert_eq!(merged.max_height, Some(12));
    }

    #[test]
    fn test_bounds_default_to_250() {
        assert_eq!(ConfigFlags::default().bounds(), Bounds::new(250, 250));
        let flags = ConfigFlags {
            max_height: Some(7),
            ..ConfigFlags::default()
        };
        assert_eq!(flags.bounds(), Bounds::new(250, 7));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".bitmaprc");
        let flags = ConfigFlags {
            max_width: Some(64),
            max_height: Some(48),
            perf: true,
            debug_log: Some(PathBuf::from("run.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
