//! Project configuration for a generation run.
//!
//! Loads optional `.comptree/config.toml` from the client project root;
//! CLI flags override file values. Discovery of the client project itself
//! (git-root walking, interactive setup) belongs to the surrounding tool,
//! not this crate.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Fully resolved configuration handed to the tree builder.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the client project; logs live beneath it.
    pub client_path: PathBuf,
    /// Directory all components are expected to reside under.
    pub src_path: PathBuf,
    /// Entry component of the client app.
    pub root_component_path: PathBuf,
}

impl GeneratorConfig {
    /// Directory for write-only debug artifacts.
    pub fn log_path(&self) -> PathBuf {
        self.client_path.join(".comptree").join("logs")
    }
}

/// On-disk configuration, all fields optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Source directory, relative to the client root.
    pub src_path: Option<PathBuf>,
    /// Entry component, relative to the source directory.
    pub root_component: Option<PathBuf>,
}

impl ConfigFile {
    /// Load config from `.comptree/config.toml` under the client root.
    /// Returns defaults if the file doesn't exist or is invalid.
    pub fn load(client_path: &Path) -> Self {
        let config_path = client_path.join(".comptree").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[comptree][warn] Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[comptree][warn] Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Combine the client root, its config file, and CLI overrides into a
/// resolved [`GeneratorConfig`].
///
/// Relative `src` resolves against the client root; a relative root
/// component resolves against the source directory.
pub fn resolve_config(
    client_path: PathBuf,
    src_override: Option<PathBuf>,
    root_override: Option<PathBuf>,
) -> GeneratorConfig {
    let file = ConfigFile::load(&client_path);

    let src_rel = src_override
        .or(file.src_path)
        .unwrap_or_else(|| PathBuf::from("src"));
    let src_path = join_unless_absolute(&client_path, &src_rel);

    let root_rel = root_override
        .or(file.root_component)
        .unwrap_or_else(|| PathBuf::from("App.js"));
    let root_component_path = join_unless_absolute(&src_path, &root_rel);

    GeneratorConfig {
        client_path,
        src_path,
        root_component_path,
    }
}

fn join_unless_absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_when_no_config_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = resolve_config(temp.path().to_path_buf(), None, None);
        assert_eq!(config.src_path, temp.path().join("src"));
        assert_eq!(
            config.root_component_path,
            temp.path().join("src").join("App.js")
        );
    }

    #[test]
    fn loads_values_from_config_file() {
        let temp = TempDir::new().expect("temp dir");
        let cfg_dir = temp.path().join(".comptree");
        std::fs::create_dir_all(&cfg_dir).expect("create .comptree");

        let mut file = std::fs::File::create(cfg_dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r#"
src_path = "client/src"
root_component = "Main.jsx"
"#
        )
        .expect("write config");

        let config = resolve_config(temp.path().to_path_buf(), None, None);
        assert_eq!(config.src_path, temp.path().join("client/src"));
        assert_eq!(
            config.root_component_path,
            temp.path().join("client/src").join("Main.jsx")
        );
    }

    #[test]
    fn cli_overrides_beat_config_file() {
        let temp = TempDir::new().expect("temp dir");
        let cfg_dir = temp.path().join(".comptree");
        std::fs::create_dir_all(&cfg_dir).expect("create .comptree");
        std::fs::write(cfg_dir.join("config.toml"), "src_path = \"client/src\"\n")
            .expect("write config");

        let config = resolve_config(
            temp.path().to_path_buf(),
            Some(PathBuf::from("web/src")),
            Some(PathBuf::from("Entry.jsx")),
        );
        assert_eq!(config.src_path, temp.path().join("web/src"));
        assert_eq!(
            config.root_component_path,
            temp.path().join("web/src").join("Entry.jsx")
        );
    }

    #[test]
    fn absolute_overrides_are_kept() {
        let temp = TempDir::new().expect("temp dir");
        let config = resolve_config(
            temp.path().to_path_buf(),
            Some(PathBuf::from("/elsewhere/src")),
            Some(PathBuf::from("/elsewhere/src/App.jsx")),
        );
        assert_eq!(config.src_path, PathBuf::from("/elsewhere/src"));
        assert_eq!(
            config.root_component_path,
            PathBuf::from("/elsewhere/src/App.jsx")
        );
    }

    #[test]
    fn invalid_config_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let cfg_dir = temp.path().join(".comptree");
        std::fs::create_dir_all(&cfg_dir).expect("create .comptree");
        std::fs::write(cfg_dir.join("config.toml"), "src_path = [not toml").expect("write config");

        let config = resolve_config(temp.path().to_path_buf(), None, None);
        assert_eq!(config.src_path, temp.path().join("src"));
    }

    #[test]
    fn log_path_lives_under_client_root() {
        let config = resolve_config(PathBuf::from("/app"), None, None);
        assert_eq!(config.log_path(), PathBuf::from("/app/.comptree/logs"));
    }
}
