//! Treescope: locate syntax-tree nodes by kind and report the lexical
//! scopes they are nested in.
//!
//! One query is a single pass over one file: parse it, walk the tree in
//! pre-order computing a structural address per node, register points of
//! interest (search matches and module/class/method scopes), then resolve
//! each match's enclosing scopes by probing the address index at every
//! proper prefix. No parent links are stored anywhere.
//!
//! Pipeline: [`parse`] → [`walker`] → [`scope`] → [`report`], wired
//! together by [`cli::run_locate`].

// Core data model
pub mod address;
pub mod kind;

// Traversal and resolution
pub mod scope;
pub mod walker;

// External parser collaborator
pub mod parse;

// Output and errors
pub mod error;
pub mod report;

// Front door for the binary
pub mod cli;

pub use address::Address;
pub use error::{ErrorCode, LocateError};
pub use kind::NodeKind;
