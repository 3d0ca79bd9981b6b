//! Declarative nodes and the object-safe merge capability.

use std::fmt;

use crate::node::Node;
use crate::{Error, Result};

/// Tag partitioning declarative nodes into mutually mergeable groups.
///
/// Only nodes reporting the same domain are ever compared for identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MergeDomain(&'static str);

impl MergeDomain {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MergeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A node that represents a declaration and can be fused with duplicates.
///
/// Implementors must also return `Some(self)` from
/// [`Node::as_mergeable`] and [`Node::as_mergeable_mut`] to be picked up by
/// the merge engine.
pub trait Declarative: Node + Sized {
    fn merge_domain(&self) -> MergeDomain;

    /// Whether `other` declares the same thing as `self`.
    ///
    /// Must be reflexive for the engine's purposes: a node always matches an
    /// identical copy of itself.
    fn is_merge_required(&self, other: &Self) -> bool;

    /// Absorb `other` into `self`.
    ///
    /// Returns [`Error::MergeConflict`] when the two declarations share an
    /// identity but disagree on their signature.
    fn merge(&mut self, other: Self) -> Result<()>;
}

/// Object-safe view of a [`Declarative`] node used by the merge engine.
pub trait Mergeable {
    fn merge_domain(&self) -> MergeDomain;

    /// Whether `other` is a duplicate of this node.
    ///
    /// Only called for nodes reporting the same merge domain. Fails with
    /// [`Error::DomainMismatch`] when `other` is of a different concrete type.
    fn matches(&self, other: &dyn Node) -> Result<bool>;

    /// Fuse `other` into this node, carrying over its import requests.
    fn absorb(&mut self, other: Box<dyn Node>) -> Result<()>;
}

impl<T: Declarative + 'static> Mergeable for T {
    fn merge_domain(&self) -> MergeDomain {
        Declarative::merge_domain(self)
    }

    fn matches(&self, other: &dyn Node) -> Result<bool> {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => Ok(self.is_merge_required(other)),
            None => Err(Error::DomainMismatch {
                domain: Declarative::merge_domain(self),
            }),
        }
    }

    fn absorb(&mut self, mut other: Box<dyn Node>) -> Result<()> {
        let imports = other.base_mut().take_imports();
        let domain = Declarative::merge_domain(self);
        let other = other
            .into_any()
            .downcast::<T>()
            .map_err(|_| Error::DomainMismatch { domain })?;
        self.merge(*other)?;
        self.base_mut().extend_imports(imports);
        Ok(())
    }
}
