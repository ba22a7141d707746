//! Structural addresses for syntax-tree nodes.
//!
//! An [`Address`] is the sequence of child indices leading from the root to
//! a node. It is the only identity the pipeline needs: the walker computes
//! one per visited node, the scope index keys on them, and nesting
//! resolution probes their prefixes. No parent links are ever stored.

use std::borrow::Borrow;
use std::fmt;

/// Path of child indices identifying a node's exact position in the tree,
/// read root-to-node.
///
/// The empty address denotes the root. Within one tree, distinct nodes have
/// distinct addresses, and an address's length equals the node's depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Address(Vec<usize>);

impl Address {
    /// The root address (empty index sequence).
    pub fn root() -> Self {
        Address(Vec::new())
    }

    /// Depth of the addressed node.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root address.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Descend into the child at `index`.
    ///
    /// Every `push` during traversal must be paired with a [`pop`] before
    /// control returns to the parent frame, so sibling addressing stays
    /// correct.
    ///
    /// [`pop`]: Address::pop
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    /// Restore the address to its pre-descent value.
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// The underlying index path.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// All proper prefixes of this address, shortest first.
    ///
    /// Includes the empty prefix, excludes the full address. The root
    /// address has no proper prefixes.
    pub fn proper_prefixes(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.0.len()).map(move |end| &self.0[..end])
    }
}

impl From<Vec<usize>> for Address {
    fn from(path: Vec<usize>) -> Self {
        Address(path)
    }
}

// Lets a HashMap<Address, _> be probed with index slices, so prefix lookups
// never allocate. Consistent with the derived Hash/Eq: a single-field
// newtype hashes exactly like its Vec, which hashes like its slice.
impl Borrow<[usize]> for Address {
    fn borrow(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================
