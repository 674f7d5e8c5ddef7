//! Parse Module
//!
//! Loads the page definitions saved by the page builder and checks them
//! before any emitter sees them.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CompileError, Result};
use crate::model::PageDefinition;
use crate::validate::validate_pages;

/// Read, parse and validate a page definition file.
pub fn load_pages(path: &Path) -> Result<Vec<PageDefinition>> {
    let source = fs::read_to_string(path).map_err(|e| CompileError::ReadInput {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_pages(&source, path)
}

/// Parse and validate page definitions; `path` is only used for reporting.
pub fn parse_pages(source: &str, path: &Path) -> Result<Vec<PageDefinition>> {
    let pages: Vec<PageDefinition> =
        serde_json::from_str(source).map_err(|e| CompileError::ParseInput {
            path: path.to_path_buf(),
            source: e,
        })?;

    let issues = validate_pages(&pages);
    if !issues.is_empty() {
        return Err(CompileError::InvalidInput {
            path: path.to_path_buf(),
            issues,
        });
    }

    debug!(path = %path.display(), pages = pages.len(), "Parsed page definitions");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;
    use std::io::Write;

    #[test]
    fn test_parse_pages() {
        let json = r#"[
            { "pageName": "home-page", "components": [{ "type": "text", "id": "t", "text": "Hi" }] },
            { "pageName": "about-page", "components": [] }
        ]"#;
        let pages = parse_pages(json, Path::new("ui.json")).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].components[0].kind, ComponentKind::Text);
        assert!(pages[1].components.is_empty());
    }

    #[test]
    fn test_top_level_must_be_array() {
        let err = parse_pages(r#"{ "pageName": "x", "components": [] }"#, Path::new("ui.json"))
            .unwrap_err();
        assert!(matches!(err, CompileError::ParseInput { .. }));
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let err = parse_pages("[{ \"pageName\": }]", Path::new("ui.json")).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("failed to parse input ui.json"));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_wrong_field_type() {
        let json = r#"[{ "pageName": "p", "components": [{ "type": "list", "id": "l", "listType": "bulleted" }] }]"#;
        let err = parse_pages(json, Path::new("ui.json")).unwrap_err();
        assert!(matches!(err, CompileError::ParseInput { .. }));
    }

    #[test]
    fn test_validation_issues_abort() {
        let json = r#"[{ "pageName": "", "components": [{ "type": "text", "id": "" }] }]"#;
        match parse_pages(json, Path::new("ui.json")) {
            Err(CompileError::InvalidInput { issues, .. }) => assert_eq!(issues.len(), 2),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_load_pages_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "pageName": "p", "components": [] }}]"#).unwrap();
        let pages = load_pages(file.path()).unwrap();
        assert_eq!(pages[0].page_name, "p");
    }

    #[test]
    fn test_missing_file() {
        let err = load_pages(Path::new("/nonexistent/ui.json")).unwrap_err();
        assert!(matches!(err, CompileError::ReadInput { .. }));
    }
}
