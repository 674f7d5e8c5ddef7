use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationIssue;

/// Errors that abort a compile run.
///
/// Unknown node types are not errors; they render as comments.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse input {}: {source}", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid page definitions in {}:\n{}", .path.display(), render_issues(.issues))]
    InvalidInput {
        path: PathBuf,
        issues: Vec<ValidationIssue>,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy theme stylesheet from {} to {}: {source}", .from.display(), .to.display())]
    ThemeCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompileError>;

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::E_NODE_ID;

    #[test]
    fn test_invalid_input_lists_issues() {
        let err = CompileError::InvalidInput {
            path: PathBuf::from("ui.json"),
            issues: vec![ValidationIssue {
                code: E_NODE_ID.to_string(),
                page: "home".to_string(),
                path: "pages[0].components[0].id".to_string(),
                message: "'text' component has an empty id".to_string(),
            }],
        };
        assert_eq!(
            err.to_string(),
            "invalid page definitions in ui.json:\n  - [E-NODE-ID] pages[0].components[0].id: 'text' component has an empty id"
        );
    }

    #[test]
    fn test_io_errors_name_the_path() {
        let err = CompileError::WriteFile {
            path: PathBuf::from("out/home/home.component.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/home/home.component.ts: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
