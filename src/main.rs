use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use nocode_compiler::{compile, CompileOptions, CompileReport, LibraryOptions};

#[derive(Parser, Debug)]
#[command(name = "nocode-compiler")]
#[command(about = "Compile no-code page definitions into Angular components", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding the array of page definitions
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory that receives one sub-directory per page
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// TOML file with compile options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    theme_source: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    theme_target: Option<PathBuf>,

    /// Skip copying the theme stylesheet
    #[arg(long, conflicts_with_all = ["theme_source", "theme_target"])]
    no_theme: bool,

    /// Path written into each stylesheet's @import
    #[arg(long, value_name = "PATH")]
    theme_import: Option<String>,

    /// Also emit the library module, public API and routes under this module name
    #[arg(long, value_name = "NAME")]
    library: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> anyhow::Result<CompileOptions> {
        let mut options = match &self.config {
            Some(path) => CompileOptions::from_toml_file(path)?,
            None => CompileOptions::default(),
        };

        if let Some(source) = &self.theme_source {
            options.theme.source = source.clone();
        }
        if let Some(target) = &self.theme_target {
            options.theme.target = target.clone();
        }
        if self.no_theme {
            options.copy_theme = false;
        }
        if let Some(theme_import) = &self.theme_import {
            options.theme_import = theme_import.clone();
        }
        if let Some(module_name) = &self.library {
            options.library = Some(LibraryOptions {
                module_name: module_name.clone(),
            });
        }

        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<CompileReport> {
    let options = cli.options().context("failed to load compile options")?;
    let report = compile(&cli.input, &cli.output_dir, &options).with_context(|| {
        format!(
            "failed to compile {} into {}",
            cli.input.display(),
            cli.output_dir.display()
        )
    })?;
    Ok(report)
}

fn print_summary(report: &CompileReport) {
    for page in &report.pages {
        println!("{} -> {}", page.page_name, page.directory.display());
        for kind in &page.unknown_kinds {
            println!("  unknown component type: {}", kind);
        }
    }
    if let Some(theme) = &report.theme_copied {
        println!("theme -> {}", theme.display());
    }
    for file in &report.library_files {
        println!("library -> {}", file.display());
    }
    println!("{} page(s) generated", report.pages.len());
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
