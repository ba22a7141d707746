//! External parser binding: Ruby source text to a tree-sitter syntax tree.
//!
//! The parser is a collaborator, not part of the core: everything past this
//! module only sees `tree_sitter::Node` values with kind tags, indexed
//! children, and positions. tree-sitter recovers from broken input by
//! emitting ERROR nodes instead of failing, so a tree containing any is
//! rejected here — downstream line lookups assume a tree the grammar fully
//! understood.

use tree_sitter::{Node, Parser, Tree};

use crate::error::LocateError;

/// Parse Ruby source into a syntax tree.
pub fn parse_ruby(source: &str, path: &str) -> Result<Tree, LocateError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_ruby::LANGUAGE.into())
        .map_err(|e| LocateError::parse(path, format!("failed to load Ruby grammar: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| LocateError::parse(path, "parser produced no tree"))?;

    if let Some(bad) = first_error_node(tree.root_node()) {
        return Err(LocateError::parse(
            path,
            format!(
                "syntax error near line {}",
                bad.start_position().row + 1
            ),
        ));
    }

    Ok(tree)
}

/// First ERROR or MISSING node in pre-order, if any.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}

// ============================================================================
// Tests
// ============================================================================
