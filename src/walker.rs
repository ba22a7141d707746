//! Depth-first tree traversal registering points of interest.
//!
//! The walker makes exactly one pre-order pass over the syntax tree. It
//! owns the address stack for the duration of the pass: each descent pushes
//! the child's index and pops it before moving to the next sibling, so a
//! node's address is complete at the moment it is visited.

use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::address::Address;
use crate::kind::NodeKind;
use crate::scope::{ScopeEntry, ScopeIndex};

/// A point of interest: a node that matches the search kind or defines a
/// lexical scope. Held only for the duration of one query.
#[derive(Debug, Clone)]
pub struct Poi {
    pub address: Address,
    pub kind: NodeKind,
    pub name: String,
    /// 1-based source line of the node's start.
    pub line: usize,
}

/// Pre-order walker computing a structural address for every visited node.
pub struct TreeWalker<'s> {
    source: &'s str,
    search: NodeKind,
    address: Address,
    pois: Vec<Poi>,
    index: ScopeIndex,
}

impl<'s> TreeWalker<'s> {
    /// Walk `tree`, collecting POIs for `search` matches and scope-defining
    /// nodes in strict pre-order, siblings left to right.
    pub fn locate(tree: &Tree, source: &'s str, search: NodeKind) -> (Vec<Poi>, ScopeIndex) {
        let mut walker = TreeWalker {
            source,
            search,
            address: Address::root(),
            pois: Vec::new(),
            index: ScopeIndex::new(),
        };
        walker.visit(tree.root_node());
        (walker.pois, walker.index)
    }

    fn visit(&mut self, node: Node<'_>) {
        // A childless node carries no information of its own.
        if node.child_count() == 0 {
            return;
        }

        // A node can match the search kind and define a scope at once;
        // it still registers a single POI under its actual kind.
        let kind = NodeKind::from_tag(node.kind());
        if kind == self.search || kind.defines_scope() {
            self.register(node, kind);
        }

        for i in 0..node.child_count() {
            let Some(child) = node.child(i) else { continue };
            self.address.push(i);
            self.visit(child);
            self.address.pop();
        }
    }

    fn register(&mut self, node: Node<'_>, kind: NodeKind) {
        let name = node_name(node, self.source);
        let line = node.start_position().row + 1;
        debug!(address = %self.address, kind = %kind, name = %name, line, "registered poi");

        self.index.insert(
            self.address.clone(),
            ScopeEntry {
                kind: kind.clone(),
                name: name.clone(),
            },
        );
        self.pois.push(Poi {
            address: self.address.clone(),
            kind,
            name,
            line,
        });
    }
}

/// Best-effort node name following the grammar's field conventions:
/// definitions carry a `name` field, calls a `method` field, assignments a
/// `left` field. Falls back to the first named child's text.
fn node_name(node: Node<'_>, source: &str) -> String {
    ["name", "method", "left"]
        .into_iter()
        .find_map(|field| node.child_by_field_name(field))
        .or_else(|| node.named_child(0))
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .unwrap_or_default()
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_ruby;
    use std::collections::HashSet;

    const NESTED_SOURCE: &str = "\
module Outer
  class Foo
    def bar
      @x = 1
      @y = 2
    end
  end
end
";

    fn locate(source: &str, kind: &str) -> (Vec<Poi>, ScopeIndex) {
        let tree = parse_ruby(source, "test.rb").expect("parse error");
        TreeWalker::locate(&tree, source, NodeKind::from_tag(kind))
    }

    #[test]
    fn registers_matches_and_scopes() {
        let (pois, index) = locate(NESTED_SOURCE, "assignment");

        let kinds: Vec<String> = pois.iter().map(|p| p.kind.to_string()).collect();
        assert_eq!(
            kinds,
            ["module", "class", "defn", "assignment", "assignment"]
        );
        assert_eq!(index.len(), pois.len());
    }

    #[test]
    fn pois_come_out_in_pre_order() {
        let (pois, _) = locate(NESTED_SOURCE, "assignment");

        // Pre-order means enclosing scopes precede their contents and
        // sibling assignments keep source order.
        let names: Vec<&str> = pois.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Outer", "Foo", "bar", "@x", "@y"]);
        let lines: Vec<usize> = pois.iter().map(|p| p.line).collect();
        assert_eq!(lines, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn addresses_are_unique() {
        let (pois, _) = locate(NESTED_SOURCE, "assignment");
        let distinct: HashSet<_> = pois.iter().map(|p| p.address.clone()).collect();
        assert_eq!(distinct.len(), pois.len());
    }

    #[test]
    fn address_length_equals_depth() {
        let (pois, _) = locate(NESTED_SOURCE, "assignment");
        // module < class < defn < assignment; each nesting level adds at
        // least one index, so depths strictly increase down the chain.
        let depths: Vec<usize> = pois.iter().map(|p| p.address.len()).collect();
        assert!(
            depths.windows(2).all(|w| w[0] < w[1]),
            "depths not strictly increasing: {:?}",
            depths
        );
    }

    #[test]
    fn scope_addresses_are_proper_prefixes_of_nested_matches() {
        let (pois, _) = locate(NESTED_SOURCE, "assignment");
        let defn = pois.iter().find(|p| p.kind == NodeKind::Defn).unwrap();
        let assign = pois
            .iter()
            .find(|p| p.kind == NodeKind::Other("assignment".to_string()))
            .unwrap();

        assert!(assign
            .address
            .proper_prefixes()
            .any(|prefix| prefix == defn.address.as_slice()));
    }

    #[test]
    fn matching_scope_kind_registers_one_poi_per_node() {
        // `class` both matches the search and defines a scope.
        let (pois, _) = locate(NESTED_SOURCE, "class");
        let class_pois: Vec<&Poi> = pois.iter().filter(|p| p.kind == NodeKind::Class).collect();
        assert_eq!(class_pois.len(), 1);
        assert_eq!(class_pois[0].name, "Foo");
    }

    #[test]
    fn root_match_has_empty_address() {
        let (pois, _) = locate("x = 1\n", "program");
        let root = pois
            .iter()
            .find(|p| p.kind == NodeKind::Other("program".to_string()))
            .expect("root poi");
        assert!(root.address.is_empty());
        assert_eq!(root.line, 1);
    }

    #[test]
    fn childless_nodes_are_never_registered() {
        // `identifier` nodes are leaves; even when searched for, they carry
        // no children and are skipped.
        let (pois, _) = locate("foo\n", "identifier");
        assert!(pois.iter().all(|p| p.kind != NodeKind::Other("identifier".to_string())));
    }

    #[test]
    fn singleton_methods_register_as_defn() {
        let source = "\
class Foo
  def self.build
    @instance = new
  end
end
";
        let (pois, _) = locate(source, "assignment");
        let defn = pois.iter().find(|p| p.kind == NodeKind::Defn).unwrap();
        assert_eq!(defn.name, "build");
    }

    #[test]
    fn names_follow_field_conventions() {
        let source = "\
module M
  class C
    def m
      obj.run(1)
      @x = 2
    end
  end
end
";
        let (pois, _) = locate(source, "call");
        let call = pois
            .iter()
            .find(|p| p.kind == NodeKind::Other("call".to_string()))
            .unwrap();
        assert_eq!(call.name, "run");

        let (pois, _) = locate(source, "assignment");
        let assign = pois
            .iter()
            .find(|p| p.kind == NodeKind::Other("assignment".to_string()))
            .unwrap();
        assert_eq!(assign.name, "@x");
    }
}
