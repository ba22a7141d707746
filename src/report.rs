//! Report rendering: filter, sort, resolve nesting, emit fixed-column rows.
//!
//! Output contract: one header row, then one row per match in ascending
//! line order. Columns are `%-7s | %-50s | %s` — line number with a
//! trailing colon, rendered scope chain, trimmed source text. The whole
//! report is built as a string before anything is printed, so a failing
//! line lookup aborts the query without emitting partial rows.

use std::fmt::Write;

use crate::error::LocateError;
use crate::kind::NodeKind;
use crate::scope::{NestingResolver, ScopeEntry, ScopeIndex};
use crate::walker::Poi;

const LINE_COL_WIDTH: usize = 7;
const SCOPE_COL_WIDTH: usize = 50;

/// Render the full report for one query. The header row is always present,
/// even with zero matches.
pub fn render(
    pois: &[Poi],
    search: &NodeKind,
    index: &ScopeIndex,
    lines: &[&str],
) -> Result<String, LocateError> {
    let resolver = NestingResolver::new(index);
    let mut out = format_row("Line nr", "Module, class, method", "Code");

    for poi in select_matches(pois, search) {
        let chain = render_chain(&resolver.resolve(&poi.address));
        let code = source_line(lines, poi.line)?;
        out.push('\n');
        out.push_str(&format_row(&format!("{}:", poi.line), &chain, code));
    }

    Ok(out)
}

/// Matches of the search kind, sorted ascending by line. The sort is
/// stable: ties keep pre-order discovery order.
fn select_matches<'a>(pois: &'a [Poi], search: &NodeKind) -> Vec<&'a Poi> {
    let mut matches: Vec<&Poi> = pois.iter().filter(|p| &p.kind == search).collect();
    matches.sort_by_key(|p| p.line);
    matches
}

/// Render a nesting chain, outermost scope first.
///
/// A `defn` entry concatenates directly as `#name`; any other scope kind
/// renders as `kind name`, preceded by `, ` unless it opens the chain.
fn render_chain(chain: &[&ScopeEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in chain.iter().enumerate() {
        if entry.kind == NodeKind::Defn {
            out.push('#');
            out.push_str(&entry.name);
        } else {
            if i != 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}", entry.kind, entry.name);
        }
    }
    out
}

/// 1-based lookup into the pre-trimmed source lines.
fn source_line<'a>(lines: &[&'a str], line: usize) -> Result<&'a str, LocateError> {
    line.checked_sub(1)
        .and_then(|i| lines.get(i).copied())
        .ok_or(LocateError::LineOutOfRange {
            line,
            line_count: lines.len(),
        })
}

fn format_row(line_col: &str, scope_col: &str, code: &str) -> String {
    format!(
        "{:<lw$} | {:<sw$} | {}",
        line_col,
        scope_col,
        code,
        lw = LINE_COL_WIDTH,
        sw = SCOPE_COL_WIDTH
    )
}

// ============================================================================
// Tests
// ============================================================================
