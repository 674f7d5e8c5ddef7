//! Compiler orchestrator
//!
//! Turns a page definition file into per-page component directories:
//!
//! ```text
//! {output}/{pageName}/{pageName}.component.html
//! {output}/{pageName}/{pageName}.component.scss
//! {output}/{pageName}/{pageName}.component.ts
//! ```
//!
//! Pages are independent and compile in parallel; the theme stylesheet is
//! copied once per run alongside them. The first failure is returned. Files
//! already written by other pages are left in place.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::codegen::generate_page;
use crate::config::{CompileOptions, ThemeAsset};
use crate::error::{CompileError, Result};
use crate::library::{
    module_file_name, render_library_module, render_public_api, render_routes, PUBLIC_API_FILE,
    ROUTES_FILE,
};
use crate::model::PageDefinition;
use crate::parse::load_pages;
use crate::validate::{find_collisions, find_route_collisions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub page_name: String,
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
    /// Node types rendered as "Unknown component" comments
    pub unknown_kinds: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileReport {
    pub pages: Vec<PageReport>,
    pub theme_copied: Option<PathBuf>,
    pub library_files: Vec<PathBuf>,
}

/// Compile every page in `input` into `output_dir`.
pub fn compile(input: &Path, output_dir: &Path, options: &CompileOptions) -> Result<CompileReport> {
    info!(input = %input.display(), output = %output_dir.display(), "Starting compilation");
    let pages = load_pages(input)?;
    compile_pages(&pages, output_dir, options)
}

/// Compile already-loaded pages.
pub fn compile_pages(
    pages: &[PageDefinition],
    output_dir: &Path,
    options: &CompileOptions,
) -> Result<CompileReport> {
    for page in pages {
        for collision in find_collisions(page) {
            warn!(
                page = %page.page_name,
                kind = ?collision.kind,
                name = %collision.name,
                nodes = ?collision.node_ids,
                "Generated name is shared by several nodes: {}",
                collision.kind.effect()
            );
        }
    }
    if options.library.is_some() {
        for collision in find_route_collisions(pages) {
            warn!(
                route = %collision.name,
                pages = ?collision.node_ids,
                "Route path is shared by several pages: {}",
                collision.kind.effect()
            );
        }
    }

    let (theme_result, pages_result) = rayon::join(
        || {
            if options.copy_theme {
                copy_theme(&options.theme).map(Some)
            } else {
                Ok(None)
            }
        },
        || {
            pages
                .par_iter()
                .map(|page| compile_page(page, output_dir, &options.theme_import))
                .collect::<Result<Vec<_>>>()
        },
    );

    // A failed theme copy fails the run even if every page succeeded
    let theme_copied = theme_result?;
    let page_reports = pages_result?;

    let library_files = match &options.library {
        Some(library) => write_library(pages, output_dir, &library.module_name)?,
        None => Vec::new(),
    };

    info!(pages = page_reports.len(), "Compilation finished");
    Ok(CompileReport {
        pages: page_reports,
        theme_copied,
        library_files,
    })
}

fn compile_page(page: &PageDefinition, output_dir: &Path, theme_import: &str) -> Result<PageReport> {
    info!(page = %page.page_name, "Generating component");

    let unknown_kinds = page.unknown_kinds();
    for kind in &unknown_kinds {
        warn!(page = %page.page_name, kind = %kind, "Unknown component type rendered as a comment");
    }

    let generated = generate_page(page, theme_import);
    let directory = output_dir.join(&page.page_name);
    ensure_dir_exists(&directory)?;

    let files = generated
        .files()
        .par_iter()
        .map(|(name, contents)| {
            let path = directory.join(name);
            write_file(&path, contents)?;
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageReport {
        page_name: page.page_name.clone(),
        directory,
        files,
        unknown_kinds,
    })
}

fn write_library(
    pages: &[PageDefinition],
    output_dir: &Path,
    module_name: &str,
) -> Result<Vec<PathBuf>> {
    ensure_dir_exists(output_dir)?;

    let outputs = [
        (
            module_file_name(module_name),
            render_library_module(pages, module_name),
        ),
        (PUBLIC_API_FILE.to_string(), render_public_api(pages, module_name)),
        (ROUTES_FILE.to_string(), render_routes(pages)),
    ];

    outputs
        .iter()
        .map(|(name, contents)| {
            let path = output_dir.join(name);
            write_file(&path, contents)?;
            Ok(path)
        })
        .collect()
}

/// Create `path` and its parents; an existing directory is fine.
fn ensure_dir_exists(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(CompileError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "Writing file");
    fs::write(path, contents).map_err(|e| CompileError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_theme(theme: &ThemeAsset) -> Result<PathBuf> {
    let theme_error = |e: io::Error| CompileError::ThemeCopy {
        from: theme.source.clone(),
        to: theme.target.clone(),
        source: e,
    };

    let content = fs::read(&theme.source).map_err(theme_error)?;
    if let Some(parent) = theme.target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(theme_error)?;
    }
    fs::write(&theme.target, content).map_err(theme_error)?;

    info!(from = %theme.source.display(), to = %theme.target.display(), "Copied theme stylesheet");
    Ok(theme.target.clone())
}
