//! kwgen — generate an Arduino keywords.txt syntax-coloring file from
//! C/C++ header sources.
//!
//! Methods are extracted from headers with a heuristic signature scan,
//! constants from `#define` lines; datatypes and instance names are passed
//! in literally. The classified names are rendered into the fixed
//! keywords.txt section layout and written to stdout or a file.

mod config;
mod extract;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, Sink};
use render::Classification;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "kwgen",
    about = "Generate an Arduino keywords.txt file from C/C++ header sources"
)]
struct Cli {
    /// Project name used in the banner comment
    #[arg(short = 'n', long)]
    name: String,

    /// Header files to scan for method declarations (glob patterns supported)
    #[arg(short = 'm', long = "methods")]
    method_files: Vec<String>,

    /// Header files to scan for #define constants (glob patterns supported).
    /// When several are given, only the last file's constants are kept.
    #[arg(short = 'c', long = "constants")]
    constant_files: Vec<String>,

    /// Datatype names to emit as KEYWORD1
    #[arg(short = 'd', long = "datatype")]
    datatypes: Vec<String>,

    /// Instance names to emit as KEYWORD2
    #[arg(short = 'i', long = "instance")]
    instances: Vec<String>,

    /// Base directory input paths are resolved against
    #[arg(short = 'C', long = "directory", default_value = ".")]
    directory: PathBuf,

    /// Output file. If omitted, the document is printed to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve(&cli)?;
    run(&config)
}

/// Turn CLI arguments into a resolved [`Config`].
fn resolve(cli: &Cli) -> Result<Config> {
    if cli.method_files.is_empty()
        && cli.constant_files.is_empty()
        && cli.datatypes.is_empty()
        && cli.instances.is_empty()
    {
        anyhow::bail!("nothing to do: give at least one of -m, -c, -d, -i");
    }

    Ok(Config {
        method_files: expand_globs(&cli.method_files, &cli.directory)?,
        constant_files: expand_globs(&cli.constant_files, &cli.directory)?,
        datatypes: cli.datatypes.clone(),
        instances: cli.instances.clone(),
        project_name: cli.name.clone(),
        sink: match &cli.output {
            Some(path) => Sink::File(path.clone()),
            None => Sink::Stdout,
        },
    })
}

/// Scan the configured files, render, and write to the configured sink.
///
/// Any unreadable input file aborts the whole run; nothing is written.
fn run(config: &Config) -> Result<()> {
    let mut methods = Vec::new();
    for path in &config.method_files {
        methods.extend(extract::methods(&read(path)?));
    }

    // Last constant file wins; earlier results are discarded.
    let mut literals = Vec::new();
    for path in &config.constant_files {
        literals = extract::constants(&read(path)?);
    }

    let lists = Classification {
        datatypes: config.datatypes.clone(),
        instances: config.instances.clone(),
        methods,
        literals,
    };
    let document = render::render(&config.project_name, &lists);

    match &config.sink {
        Sink::Stdout => print!("{}", document),
        Sink::File(path) => fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Expand glob patterns against the base directory into concrete paths.
///
/// Literal paths are kept verbatim (existing or not — a missing file should
/// fail loudly at read time, not vanish here). Each pattern's expansion is
/// sorted for deterministic scan order; the order of patterns themselves is
/// preserved as given.
fn expand_globs(patterns: &[String], directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let resolved = directory.join(pattern);
        if resolved.is_file() || !is_glob(pattern) {
            files.push(resolved);
            continue;
        }
        let resolved = resolved.to_string_lossy().into_owned();
        let mut matches: Vec<PathBuf> = glob::glob(&resolved)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        matches.sort();
        matches.dedup();
        files.extend(matches);
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
