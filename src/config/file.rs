//! Locating and reading `.tfplan-tools.yaml`.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

/// File names tried in each candidate directory, dotfiles first.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".tfplan-tools.yaml",
    ".tfplan-tools.yml",
    "tfplan-tools.yaml",
    "tfplan-tools.yml",
];

const CONFIG_DIR_NAME: &str = "tfplan-tools";

/// Resolve the config file to use.
///
/// An existing `explicit_path` wins. Otherwise the working directory, the
/// enclosing git checkout, [`user_config_dir`] and the home directory are
/// searched in that order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok();
    let checkout = cwd.as_deref().and_then(enclosing_checkout);
    [cwd, checkout, user_config_dir(), dirs::home_dir()]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// `~/.config/tfplan-tools` or the platform equivalent.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR_NAME))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn enclosing_checkout(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Read an [`AppConfig`] from YAML. A blank file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigFileError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        Ok(AppConfig::default())
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}

/// Discover and load a config file, returning the path it came from.
///
/// An unreadable file is logged and replaced by the defaults.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };
    match load_config_file(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            (config, Some(path))
        }
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            (AppConfig::default(), None)
        }
    }
}

impl AppConfig {
    /// Overlay `other` on `self`.
    ///
    /// Settings left at their default in `other` do not override.
    pub fn merge(&mut self, other: &Self) {
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if let Some(file) = &other.output.file {
            self.output.file = Some(file.clone());
        }
        if let Some(filter_file) = &other.filter.filter_file {
            self.filter.filter_file = Some(filter_file.clone());
        }
        self.output.no_color |= other.output.no_color;
        self.behavior.detailed_exitcode |= other.behavior.detailed_exitcode;
        self.behavior.quiet |= other.behavior.quiet;
    }

    /// Effective settings: the discovered file with `cli_overrides` on top.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, source) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, source)
    }
}

/// Commented YAML matching [`AppConfig::default`], written by `config init`.
#[must_use]
pub fn generate_example_config() -> String {
    r"# tfplan-tools settings
# Looked up as .tfplan-tools.yaml in the working directory, the git checkout
# root, ~/.config/tfplan-tools/ and the home directory.
# Command-line flags take precedence.

output:
  # auto | json | pretty | summary
  format: auto
  # Write the report here instead of stdout
  # file: inspection.json
  no_color: false

behavior:
  # Exit 2 when un-filtered changes or divergences remain
  detailed_exitcode: false
  quiet: false

filter:
  # Used when --filter is not given, e.g. ./plan-filter.json
  filter_file: ~
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".tfplan-tools.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("tfplan-tools.yml"), "").unwrap();
        let dotfile = tmp.path().join(".tfplan-tools.yml");
        std::fs::write(&dotfile, "").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(dotfile));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
output:
  format: summary
  no_color: true
behavior:
  detailed_exitcode: true
filter:
  filter_file: filters/plan.json
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert!(config.output.no_color);
        assert!(config.behavior.detailed_exitcode);
        assert_eq!(
            config.filter.filter_file,
            Some(PathBuf::from("filters/plan.json"))
        );
    }

    #[test]
    fn test_load_empty_config_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "output:\n  format: [not, a, format]\n").unwrap();

        let err = load_config_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .output_format(ReportFormat::Summary)
            .filter_file(Some(PathBuf::from("base.json")))
            .build();
        let overrides = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .detailed_exitcode(true)
            .build();

        base.merge(&overrides);

        assert_eq!(base.output.format, ReportFormat::Json);
        assert!(base.behavior.detailed_exitcode);
        assert_eq!(base.filter.filter_file, Some(PathBuf::from("base.json")));
    }

    #[test]
    fn test_merge_keeps_file_values_for_defaults() {
        let mut base = AppConfig::builder()
            .output_format(ReportFormat::Pretty)
            .no_color(true)
            .build();
        base.merge(&AppConfig::default());

        assert_eq!(base.output.format, ReportFormat::Pretty);
        assert!(base.output.no_color);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("detailed_exitcode"));

        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("ci.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
