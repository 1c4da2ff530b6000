//! Run configuration — everything the driver needs, resolved up front.
//!
//! The original tool compiled its file lists and project name into the
//! script itself; keeping them in one explicit structure makes the driver
//! callable from tests without touching a fixed filesystem layout.

use std::path::PathBuf;

/// Output destination for the rendered document.
#[derive(Debug)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

/// A fully resolved run configuration.
#[derive(Debug)]
pub struct Config {
    /// Header files scanned for method-like declarations, in scan order.
    pub method_files: Vec<PathBuf>,
    /// Header files scanned for `#define` constants, in scan order.
    /// Only the last file's result is used (last wins).
    pub constant_files: Vec<PathBuf>,
    /// Literal datatype names (KEYWORD1), emitted as given.
    pub datatypes: Vec<String>,
    /// Literal instance names (KEYWORD2), emitted as given.
    pub instances: Vec<String>,
    /// Project name for the banner comment.
    pub project_name: String,
    /// Where the document goes.
    pub sink: Sink,
}
