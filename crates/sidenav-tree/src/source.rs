//! Where raw sidebars come from.
//!
//! [`SidebarSource`] abstracts over the origin of the raw configuration.
//! [`FileSource`] reads YAML, JSON or TOML files; [`StaticSource`] holds an
//! in-memory sidebar for embedders and tests.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::raw::{RawSidebar, TomlSidebar};

/// Error loading a raw sidebar.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Sidebar file does not exist.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the sidebar file.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File extension does not map to a known format.
    #[error("Unsupported sidebar format: {} (expected .yaml, .yml, .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// File content could not be parsed.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Origin of a raw sidebar.
pub trait SidebarSource: Send + Sync {
    /// Load the current raw sidebar.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebar cannot be read or parsed.
    fn load(&self) -> Result<RawSidebar, SourceError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Serialization format of a sidebar file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
    /// `.toml`, with entries under a top-level `sidebar` array.
    Toml,
}

impl SidebarFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse sidebar content in this format.
    ///
    /// Empty content is an empty sidebar.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the content is malformed.
    pub fn parse(self, content: &str) -> Result<RawSidebar, String> {
        if content.trim().is_empty() {
            return Ok(RawSidebar::new());
        }

        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<TomlSidebar>(content)
                .map(|doc| doc.sidebar)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Sidebar read from a file on every load.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    format: SidebarFormat,
}

impl FileSource {
    /// Create a file source, detecting the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnsupportedFormat`] for unknown extensions.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let format = SidebarFormat::from_path(&path)
            .ok_or_else(|| SourceError::UnsupportedFormat(path.clone()))?;
        Ok(Self { path, format })
    }

    /// Path of the sidebar file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SidebarSource for FileSource {
    fn load(&self) -> Result<RawSidebar, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.clone())
            } else {
                SourceError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        self.format
            .parse(&content)
            .map_err(|message| SourceError::Parse {
                path: self.path.clone(),
                message,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sidebar that can be replaced between loads.
#[derive(Debug, Default)]
pub struct StaticSource {
    sidebar: Mutex<RawSidebar>,
}

impl StaticSource {
    /// Create a source serving `sidebar`.
    #[must_use]
    pub fn new(sidebar: RawSidebar) -> Self {
        Self {
            sidebar: Mutex::new(sidebar),
        }
    }

    /// Replace the sidebar returned by subsequent loads.
    pub fn set(&self, sidebar: RawSidebar) {
        *self.sidebar.lock().unwrap_or_else(PoisonError::into_inner) = sidebar;
    }
}

impl SidebarSource for StaticSource {
    fn load(&self) -> Result<RawSidebar, SourceError> {
        Ok(self
            .sidebar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::raw::{RawBadge, RawEntry};

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn expected() -> RawSidebar {
        vec![RawEntry::group(
            "Deploy",
            vec![
                RawEntry::leaf("Deploy to Varity L3", "deploy/varity-l3")
                    .with_badge(RawBadge::new("Testnet", "note")),
            ],
        )]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SidebarFormat::from_path(Path::new("sidebar.yml")),
            Some(SidebarFormat::Yaml)
        );
        assert_eq!(
            SidebarFormat::from_path(Path::new("nav/sidebar.json")),
            Some(SidebarFormat::Json)
        );
        assert_eq!(
            SidebarFormat::from_path(Path::new("sidebar.toml")),
            Some(SidebarFormat::Toml)
        );
        assert_eq!(SidebarFormat::from_path(Path::new("sidebar.txt")), None);
        assert_eq!(SidebarFormat::from_path(Path::new("sidebar")), None);
    }

    #[test]
    fn test_file_source_unsupported_extension() {
        let err = FileSource::new("sidebar.ini").unwrap_err();

        assert!(matches!(err, SourceError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.yaml");
        fs::write(
            &path,
            r"
- label: Deploy
  items:
    - label: Deploy to Varity L3
      slug: deploy/varity-l3
      badge: { text: Testnet, variant: note }
",
        )
        .unwrap();

        let sidebar = FileSource::new(&path).unwrap().load().unwrap();

        assert_eq!(sidebar, expected());
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.json");
        fs::write(
            &path,
            r#"[{"label": "Deploy", "items": [
                {"label": "Deploy to Varity L3", "slug": "deploy/varity-l3",
                 "badge": {"text": "Testnet", "variant": "note"}}
            ]}]"#,
        )
        .unwrap();

        let sidebar = FileSource::new(&path).unwrap().load().unwrap();

        assert_eq!(sidebar, expected());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.toml");
        fs::write(
            &path,
            r#"
[[sidebar]]
label = "Deploy"

[[sidebar.items]]
label = "Deploy to Varity L3"
slug = "deploy/varity-l3"
badge = { text = "Testnet", variant = "note" }
"#,
        )
        .unwrap();

        let sidebar = FileSource::new(&path).unwrap().load().unwrap();

        assert_eq!(sidebar, expected());
    }

    #[test]
    fn test_load_empty_file_returns_empty_sidebar() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.yaml");
        fs::write(&path, "\n").unwrap();

        let sidebar = FileSource::new(&path).unwrap().load().unwrap();

        assert!(sidebar.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = create_test_dir();
        let source = FileSource::new(temp_dir.path().join("missing.yaml")).unwrap();

        let err = source.load().unwrap_err();

        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_load_toml_with_misspelled_table() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.toml");
        fs::write(
            &path,
            "[[sidbar]]\nlabel = \"Deploy\"\n\n[[sidbar.items]]\nlabel = \"L3\"\nslug = \"deploy/l3\"\n",
        )
        .unwrap();

        let err = FileSource::new(&path).unwrap().load().unwrap_err();

        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("sidebar.json");
        fs::write(&path, "[{").unwrap();

        let err = FileSource::new(&path).unwrap().load().unwrap_err();

        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("sidebar.json"));
    }

    #[test]
    fn test_static_source_returns_replaced_sidebar() {
        let source = StaticSource::new(Vec::new());
        source.set(expected());

        assert_eq!(source.load().unwrap(), expected());
    }
}
