//! Ordered node sequences and the merge engine.

use std::slice;

use crate::context::Context;
use crate::node::{render_node, Node};
use crate::utils;
use crate::Result;

/// An ordered sequence of nodes rendered one per line.
///
/// Rendering resolves duplicates first: declarative nodes with the same
/// identity are fused into their first occurrence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeList {
    nodes: Vec<Box<dyn Node>>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Node) {
        self.nodes.push(Box::new(node));
    }

    pub fn push_boxed(&mut self, node: Box<dyn Node>) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Node>> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Box<dyn Node>> {
        self.nodes.iter_mut()
    }

    /// Whether a content-equal node is already in the list.
    pub fn contains(&self, node: &dyn Node) -> bool {
        self.nodes.iter().any(|existing| existing.eq_node(node))
    }

    /// Nodes of concrete type `T`, in order.
    pub fn of_type<T: Node + 'static>(&self) -> impl Iterator<Item = &T> {
        self.nodes
            .iter()
            .filter_map(|node| node.as_any().downcast_ref::<T>())
    }

    pub fn of_type_mut<T: Node + 'static>(&mut self) -> impl Iterator<Item = &mut T> {
        self.nodes
            .iter_mut()
            .filter_map(|node| node.as_any_mut().downcast_mut::<T>())
    }

    /// Fuse duplicate declarations in place.
    ///
    /// On [`crate::Error::MergeConflict`] the list is left empty.
    pub fn resolve(&mut self) -> Result<()> {
        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = resolve(nodes)?;
        Ok(())
    }

    /// A merge-resolved copy of this list.
    pub fn resolved(&self) -> Result<NodeList> {
        let mut copy = self.clone();
        copy.resolve()?;
        Ok(copy)
    }

    /// Resolve a copy of the list and render each node, joined by newlines.
    pub fn render(&self, ctx: &mut Context) -> Result<String> {
        self.render_joined(ctx, "\n")
    }

    pub fn render_joined(&self, ctx: &mut Context, separator: &str) -> Result<String> {
        let resolved = self.resolved()?;
        let mut parts = Vec::with_capacity(resolved.len());
        for node in resolved.iter() {
            parts.push(render_node(&**node, ctx)?);
        }
        Ok(utils::join(parts, separator))
    }
}

/// Fuse every declarative node with its later duplicates.
///
/// Single left-to-right pass: each surviving node absorbs, in encounter
/// order, every later node of the same merge domain that it matches.
/// Non-declarative nodes pass through untouched. Relative order of the
/// survivors is preserved.
#[tracing::instrument(level = "trace", skip_all, fields(len = nodes.len()))]
pub fn resolve(nodes: Vec<Box<dyn Node>>) -> Result<Vec<Box<dyn Node>>> {
    let mut pending: Vec<Option<Box<dyn Node>>> = nodes.into_iter().map(Some).collect();
    let mut merged = Vec::with_capacity(pending.len());

    let mut rest = pending.as_mut_slice();
    while let Some((slot, tail)) = std::mem::take(&mut rest).split_first_mut() {
        rest = tail;
        let Some(mut first) = slot.take() else {
            continue;
        };

        if first.as_mergeable().is_some() {
            for later in rest.iter_mut() {
                let Some(candidate) = later.as_deref() else {
                    continue;
                };
                if !is_duplicate(&*first, candidate)? {
                    continue;
                }
                let Some(second) = later.take() else {
                    continue;
                };
                if let Some(target) = first.as_mergeable_mut() {
                    tracing::debug!(domain = %target.merge_domain(), "absorbing duplicate declaration");
                    target.absorb(second)?;
                }
            }
        }

        merged.push(first);
    }

    Ok(merged)
}

/// Same merge domain and same identity. Two different node types sharing a
/// domain are reported as [`crate::Error::DomainMismatch`].
fn is_duplicate(first: &dyn Node, second: &dyn Node) -> Result<bool> {
    let (Some(a), Some(b)) = (first.as_mergeable(), second.as_mergeable()) else {
        return Ok(false);
    };
    if a.merge_domain() != b.merge_domain() {
        return Ok(false);
    }
    a.matches(second)
}

impl From<Vec<Box<dyn Node>>> for NodeList {
    fn from(nodes: Vec<Box<dyn Node>>) -> Self {
        Self { nodes }
    }
}

impl Extend<Box<dyn Node>> for NodeList {
    fn extend<I: IntoIterator<Item = Box<dyn Node>>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl FromIterator<Box<dyn Node>> for NodeList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Node>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NodeList {
    type Item = Box<dyn Node>;
    type IntoIter = std::vec::IntoIter<Box<dyn Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Box<dyn Node>;
    type IntoIter = slice::Iter<'a, Box<dyn Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
