//! Node-kind vocabulary: a closed scope-defining set plus opaque parser tags.

use std::fmt;

/// Kind of a syntax-tree node.
///
/// The scope-defining kinds are a closed set; every other tag the parser
/// produces is carried through as opaque data and compared textually. The
/// search kind supplied on the command line goes through the same mapping,
/// so it is ordinary runtime data rather than a type to dispatch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `module M ... end`
    Module,
    /// `class C ... end`
    Class,
    /// A method definition, including `def self.` singletons.
    Defn,
    /// Any other parser tag (`call`, `assignment`, ...).
    Other(String),
}

impl NodeKind {
    /// Map a tree-sitter-ruby tag onto the kind space.
    ///
    /// `defn` is accepted as an alias for `method`, so searches can use the
    /// same vocabulary the report prints for scopes.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "module" => NodeKind::Module,
            "class" => NodeKind::Class,
            "method" | "singleton_method" | "defn" => NodeKind::Defn,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Whether this kind establishes a lexical boundary reported as context
    /// for nested matches.
    pub fn defines_scope(&self) -> bool {
        matches!(self, NodeKind::Module | NodeKind::Class | NodeKind::Defn)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Module => write!(f, "module"),
            NodeKind::Class => write!(f, "class"),
            NodeKind::Defn => write!(f, "defn"),
            NodeKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_tags_map_to_closed_variants() {
        assert_eq!(NodeKind::from_tag("module"), NodeKind::Module);
        assert_eq!(NodeKind::from_tag("class"), NodeKind::Class);
        assert_eq!(NodeKind::from_tag("method"), NodeKind::Defn);
        assert_eq!(NodeKind::from_tag("singleton_method"), NodeKind::Defn);
    }

    #[test]
    fn defn_alias_matches_method_nodes() {
        assert_eq!(NodeKind::from_tag("defn"), NodeKind::from_tag("method"));
    }

    #[test]
    fn unknown_tags_stay_opaque() {
        let kind = NodeKind::from_tag("assignment");
        assert_eq!(kind, NodeKind::Other("assignment".to_string()));
        assert!(!kind.defines_scope());
    }

    #[test]
    fn only_module_class_defn_define_scope() {
        assert!(NodeKind::Module.defines_scope());
        assert!(NodeKind::Class.defines_scope());
        assert!(NodeKind::Defn.defines_scope());
        assert!(!NodeKind::Other("call".to_string()).defines_scope());
    }

    #[test]
    fn display_round_trips_through_from_tag() {
        for tag in ["module", "class", "call"] {
            assert_eq!(NodeKind::from_tag(tag).to_string(), tag);
        }
        // The alias normalizes to the reporting vocabulary, not the grammar's.
        assert_eq!(NodeKind::from_tag("method").to_string(), "defn");
    }
}
