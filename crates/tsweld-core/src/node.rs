//! The renderable node protocol.
//!
//! Every fragment implements [`Node`]. A node owns a [`NodeBase`] holding
//! its satellites (nodes emitted directly before and after it) and the
//! import requests it contributes. Rendering always goes through
//! [`render_node`], which attaches the node to the [`Context`] and wraps
//! the node's own output with its satellites.

use std::any::Any;
use std::fmt;

use crate::context::Context;
use crate::imports::{ImportRequest, ImportSet};
use crate::list::NodeList;
use crate::merge::Mergeable;
use crate::Result;

/// A renderable TypeScript fragment.
pub trait Node: DynNode + fmt::Debug + 'static {
    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    /// Render this node's own text, without its satellites.
    ///
    /// Nested nodes must be rendered through [`render_node`] (or a
    /// [`NodeList`]) so their imports reach the context.
    fn render(&self, ctx: &mut Context) -> Result<String>;

    /// Declarative nodes return themselves here to take part in merging.
    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        None
    }

    fn as_mergeable_mut(&mut self) -> Option<&mut dyn Mergeable> {
        None
    }
}

/// Object-safe plumbing for `dyn Node`: cloning, equality and downcasts.
///
/// Implemented automatically for every `Node + Clone + PartialEq`.
pub trait DynNode {
    fn as_node(&self) -> &dyn Node;

    fn clone_node(&self) -> Box<dyn Node>;

    /// Content equality: same concrete type and equal by `PartialEq`.
    fn eq_node(&self, other: &dyn Node) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> DynNode for T
where
    T: Node + Clone + PartialEq + 'static,
{
    fn as_node(&self) -> &dyn Node {
        self
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn eq_node(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

impl PartialEq for Box<dyn Node> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_node(&**other)
    }
}

// Derived `PartialEq` on structs holding a `Box<dyn Node>` compares through
// a reference to the box.
impl PartialEq<&Self> for Box<dyn Node> {
    fn eq(&self, other: &&Self) -> bool {
        self.eq_node(&***other)
    }
}

/// State shared by every node: satellites and import requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeBase {
    before: NodeList,
    after: NodeList,
    imports: ImportSet,
}

impl NodeBase {
    pub fn before(&self) -> &NodeList {
        &self.before
    }

    pub fn after(&self) -> &NodeList {
        &self.after
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn add_before(&mut self, node: impl Node) -> &mut Self {
        self.before.push(node);
        self
    }

    pub fn add_after(&mut self, node: impl Node) -> &mut Self {
        self.after.push(node);
        self
    }

    pub fn add_import(&mut self, request: ImportRequest) -> &mut Self {
        self.imports.insert(request);
        self
    }

    pub fn extend_imports(&mut self, imports: ImportSet) {
        self.imports.extend(imports);
    }

    pub fn take_imports(&mut self) -> ImportSet {
        std::mem::take(&mut self.imports)
    }
}

/// Consuming builder setters available on every concrete node.
pub trait NodeExt: Node + Sized {
    /// Require `module` from `path` wherever this node is rendered.
    fn with_import(self, module: impl Into<String>, path: impl Into<String>) -> Self {
        self.with_import_request(ImportRequest::new(module, path))
    }

    fn with_import_request(mut self, request: ImportRequest) -> Self {
        self.base_mut().add_import(request);
        self
    }

    /// Emit `node` on the line before this one.
    fn with_before(mut self, node: impl Node) -> Self {
        self.base_mut().add_before(node);
        self
    }

    /// Emit `node` on the line after this one.
    fn with_after(mut self, node: impl Node) -> Self {
        self.base_mut().add_after(node);
        self
    }
}

impl<T: Node> NodeExt for T {}

/// Attach `node` to `ctx` and render it wrapped in its satellites.
///
/// A non-empty `before` block is followed by a newline and a non-empty
/// `after` block is preceded by one. Satellite lists are merge-resolved like
/// any other [`NodeList`].
pub fn render_node(node: &dyn Node, ctx: &mut Context) -> Result<String> {
    ctx.attach(node);
    let base = node.base();

    let mut output = String::new();
    if !base.before().is_empty() {
        output.push_str(&base.before().render(ctx)?);
        output.push('\n');
    }
    output.push_str(&node.render(ctx)?);
    if !base.after().is_empty() {
        output.push('\n');
        output.push_str(&base.after().render(ctx)?);
    }
    Ok(output)
}

/// Entry points for turning a node into text.
///
/// Blanket-implemented for every node, `dyn Node` included.
pub trait Build {
    /// Render without imports in a fresh [`Context`].
    fn build(&self) -> Result<String> {
        self.build_with(&mut Context::default())
    }

    /// Render without imports in a caller-supplied context.
    fn build_with(&self, ctx: &mut Context) -> Result<String>;

    /// Render in a fresh context with the aggregated import block prepended.
    fn build_with_imports(&self) -> Result<String> {
        self.build_with_imports_in(&mut Context::default())
    }

    /// Render with the import block prepended, trimming surrounding
    /// whitespace. Imports are collected after the content is rendered, so
    /// requests of merged-in and nested nodes are included.
    fn build_with_imports_in(&self, ctx: &mut Context) -> Result<String> {
        let content = self.build_with(ctx)?;
        let imports = ctx.render_imports();
        Ok(format!("{imports}{content}").trim().to_string())
    }
}

impl<T: Node + ?Sized> Build for T {
    fn build_with(&self, ctx: &mut Context) -> Result<String> {
        render_node(self.as_node(), ctx)
    }
}
