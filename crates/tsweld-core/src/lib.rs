//! Core protocol for composing TypeScript source fragments.
//!
//! A fragment is a tree of [`Node`]s. Nodes render themselves into text,
//! carry `before`/`after` satellites and declare the imports they need.
//! Nodes that describe declarations (classes, functions, fields, ...)
//! implement [`Declarative`] and are fused by the merge engine whenever two
//! of them land in the same [`NodeList`] with the same identity.
//!
//! # Example
//!
//! ```
//! use tsweld_core::{Build, Literal, NodeExt};
//!
//! let node = Literal::new("let distance = 0;").with_import("Distance", "./my-types");
//! let output = node.build_with_imports().unwrap();
//! assert_eq!(output, "import {Distance} from './my-types';\n\nlet distance = 0;");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod container;
pub mod context;
pub mod imports;
pub mod list;
pub mod literal;
pub mod merge;
pub mod node;
pub mod utils;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod context_tests;

pub use container::{Body, Container, ContentPolicy};
pub use context::Context;
pub use imports::{ImportRequest, ImportSet};
pub use list::NodeList;
pub use literal::Literal;
pub use merge::{Declarative, MergeDomain, Mergeable};
pub use node::{Build, DynNode, Node, NodeBase, NodeExt, render_node};

/// Errors raised while resolving or rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two declarations share an identity but their signatures differ.
    ///
    /// Both sides are carried fully rendered so the message points at the
    /// offending fragments.
    #[error(
        "Unable to merge two elements because the declarations differ.\nFirst:  {first}\nSecond: {second}"
    )]
    MergeConflict { first: String, second: String },

    /// Two unrelated node types were registered under the same merge domain.
    #[error("merge domain `{domain}` is shared by incompatible node types")]
    DomainMismatch { domain: MergeDomain },

    /// A lookup by name found no member of the requested kind.
    #[error("no {kind} named `{name}`")]
    UnknownElement { kind: &'static str, name: String },
}

impl Error {
    /// Build a [`Error::MergeConflict`] from the two clashing nodes.
    pub fn merge_conflict(first: &dyn Node, second: &dyn Node) -> Self {
        Self::MergeConflict {
            first: describe(first),
            second: describe(second),
        }
    }

    pub fn unknown_element(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownElement {
            kind,
            name: name.into(),
        }
    }
}

fn describe(node: &dyn Node) -> String {
    node.build().unwrap_or_else(|err| format!("<unrenderable: {err}>"))
}

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, Error>;
