//! Scope index and nesting resolution.
//!
//! [`ScopeIndex`] is the address-keyed registry the walker fills in;
//! [`NestingResolver`] reads it back to reconstruct, for any matched node,
//! the ordered chain of enclosing scopes. Between them they replace parent
//! links entirely: an ancestor is just a registered proper prefix of the
//! match's address.

use std::collections::HashMap;

use tracing::debug;

use crate::address::Address;
use crate::kind::NodeKind;

/// What a registered address holds: the node's kind and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    pub kind: NodeKind,
    pub name: String,
}

// ============================================================================
// ScopeIndex
// ============================================================================

/// Address-keyed registry of points of interest.
///
/// Every POI is stored (matches included), but resolution only consumes the
/// scope-defining entries. Addresses are unique within one traversal, so
/// there is at most one entry per key.
#[derive(Debug, Default)]
pub struct ScopeIndex {
    entries: HashMap<Address, ScopeEntry>,
}

impl ScopeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry at `address`.
    pub fn insert(&mut self, address: Address, entry: ScopeEntry) {
        self.entries.insert(address, entry);
    }

    /// Look up the entry at an exact index path, if one was registered.
    pub fn lookup(&self, path: &[usize]) -> Option<&ScopeEntry> {
        self.entries.get(path)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// NestingResolver
// ============================================================================

/// Reconstructs the chain of enclosing scopes for a matched node.
pub struct NestingResolver<'a> {
    index: &'a ScopeIndex,
}

impl<'a> NestingResolver<'a> {
    pub fn new(index: &'a ScopeIndex) -> Self {
        NestingResolver { index }
    }

    /// Enclosing scope-defining entries for `address`, outermost first.
    ///
    /// Probes the index at every proper prefix, from the empty prefix (a
    /// top-level module or class wrapping everything) up to the match's
    /// immediate ancestors. The full address is never probed, so a node
    /// never appears in its own chain and a root match resolves to an
    /// empty chain. A miss at a prefix means no scope boundary sits at
    /// that depth; it is skipped, not an error.
    pub fn resolve(&self, address: &Address) -> Vec<&'a ScopeEntry> {
        let chain: Vec<&ScopeEntry> = address
            .proper_prefixes()
            .filter_map(|prefix| self.index.lookup(prefix))
            .filter(|entry| entry.kind.defines_scope())
            .collect();
        debug!(address = %address, depth = chain.len(), "resolved nesting chain");
        chain
    }
}

// ============================================================================
// Tests
// ============================================================================
