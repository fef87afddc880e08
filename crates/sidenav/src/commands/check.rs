//! `sidenav check` command implementation.

use clap::{Args, ValueEnum};
use serde::Serialize;
use sidenav_tree::{LoadError, PathSegment, ValidationError, ValidationErrors};

use super::SidebarArgs;
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Report format for validation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// One line per error on stderr.
    #[default]
    Text,
    /// JSON array of errors on stdout.
    Json,
}

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    sidebar: SidebarArgs,

    /// Output format for errors.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// One validation error as reported in JSON.
///
/// `path` lists `{index, label}` steps from the top level down; `location`
/// is the same path joined for display.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ErrorReport<'a> {
    kind: &'static str,
    message: String,
    path: &'a [PathSegment],
    location: String,
}

impl<'a> From<&'a ValidationError> for ErrorReport<'a> {
    fn from(error: &'a ValidationError) -> Self {
        Self {
            kind: error.kind.code(),
            message: error.kind.to_string(),
            path: error.path.segments(),
            location: error.path.to_string(),
        }
    }
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let errors = match self.sidebar.load_sidebar() {
            Ok(sidebar) => {
                let nav = sidebar.current();
                if self.format == Format::Json {
                    print_json(&[] as &[ErrorReport<'_>])?;
                }
                output.success(&format!(
                    "Sidebar is valid: {} groups, {} pages",
                    nav.full_tree().group_count(),
                    nav.len()
                ));
                return Ok(());
            }
            Err(CliError::Load(LoadError::Invalid(errors))) => errors,
            Err(e) => return Err(e),
        };

        match self.format {
            Format::Text => {
                for line in text_report(&errors) {
                    output.info(&line);
                }
            }
            Format::Json => print_json(&json_report(&errors))?,
        }

        Err(CliError::Validation(format!(
            "sidebar has {} error(s)",
            errors.len()
        )))
    }
}

/// `path: message` lines, one per error.
fn text_report(errors: &ValidationErrors) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

fn json_report(errors: &ValidationErrors) -> Vec<ErrorReport<'_>> {
    errors.iter().map(ErrorReport::from).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sidenav_tree::{RawEntry, validate};

    use super::*;
    use crate::commands::test_support::{SIDEBAR_YAML, sidebar_args};

    fn invalid_errors() -> ValidationErrors {
        validate(&[
            RawEntry::group(
                "Guide",
                vec![
                    RawEntry::leaf("Intro", "guide/intro"),
                    RawEntry::leaf("Again", "guide/intro"),
                ],
            ),
            RawEntry::leaf("Stray", "stray"),
        ])
        .unwrap_err()
    }

    #[test]
    fn test_text_report_lists_every_error() {
        let lines = text_report(&invalid_errors());

        assert_eq!(
            lines,
            vec![
                "Guide > Again: duplicate slug: guide/intro (first defined at Guide > Intro)",
                "Stray: leaf at top level",
            ]
        );
    }

    #[test]
    fn test_json_report_fields() {
        let errors = invalid_errors();
        let report = json_report(&errors);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].kind, "duplicate_slug");
        assert_eq!(report[0].location, "Guide > Again");
        assert_eq!(report[1].kind, "leaf_at_top_level");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json[0]["path"],
            serde_json::json!([
                {"index": 0, "label": "Guide"},
                {"index": 1, "label": "Again"},
            ])
        );
        assert_eq!(
            json[1],
            serde_json::json!({
                "kind": "leaf_at_top_level",
                "message": "leaf at top level",
                "path": [{"index": 1, "label": "Stray"}],
                "location": "Stray",
            })
        );
    }

    #[test]
    fn test_json_path_keeps_labels_containing_separator() {
        let errors = validate(&[RawEntry::group("A > B", Vec::new())]).unwrap_err();

        let json = serde_json::to_value(json_report(&errors)).unwrap();

        assert_eq!(
            json[0]["path"],
            serde_json::json!([{"index": 0, "label": "A > B"}])
        );
    }

    #[test]
    fn test_check_valid_sidebar() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            sidebar: sidebar_args(temp_dir.path(), SIDEBAR_YAML),
            format: Format::Text,
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_invalid_sidebar_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            sidebar: sidebar_args(temp_dir.path(), "- label: Empty\n  items: []\n"),
            format: Format::Text,
        };

        let err = args.execute().unwrap_err();

        assert_eq!(err.to_string(), "sidebar has 1 error(s)");
    }

    #[test]
    fn test_check_missing_sidebar_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("sidenav.toml"), "").unwrap();
        let args = CheckArgs {
            sidebar: SidebarArgs {
                config: Some(temp_dir.path().join("sidenav.toml")),
                ..SidebarArgs::default()
            },
            format: Format::Json,
        };

        let err = args.execute().unwrap_err();

        assert!(err.to_string().contains("Sidebar file not found"));
    }
}
