//! Front door: one locate query from file path and kind to rendered report.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::LocateError;
use crate::kind::NodeKind;
use crate::parse::parse_ruby;
use crate::report;
use crate::walker::TreeWalker;

/// Run a locate query: read and parse `path`, find nodes of `kind`, and
/// render the report as a single string for the caller to print.
pub fn run_locate(kind: &str, path: &Path) -> Result<String, LocateError> {
    let display_path = path.display().to_string();
    let source =
        fs::read_to_string(path).map_err(|e| LocateError::file_access(&display_path, e))?;
    let tree = parse_ruby(&source, &display_path)?;

    let search = NodeKind::from_tag(kind);
    let (pois, index) = TreeWalker::locate(&tree, &source, search.clone());
    info!(
        kind = %search,
        pois = pois.len(),
        file = %display_path,
        "traversal complete"
    );

    // Lines are trimmed once up front; report rows index into these.
    let lines: Vec<&str> = source.lines().map(str::trim).collect();
    report::render(&pois, &search, &index, &lines)
}
