//! Per-build rendering state.

use crate::imports::{ImportRequest, ImportSet};
use crate::node::Node;
use crate::utils;

/// Rendering context threaded through a single build.
///
/// Collects the import requests of every node rendered with it and holds
/// the indentation width used by block renderers.
#[derive(Clone, Debug)]
pub struct Context {
    /// Spaces per nesting level (default: 2)
    indent: usize,
    imports: ImportSet,
    attached: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            indent: 2,
            imports: ImportSet::default(),
            attached: 0,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn indent_width(&self) -> usize {
        self.indent
    }

    /// Indent `text` by one nesting level.
    pub fn indent_text(&self, text: &str) -> String {
        utils::indent(text, self.indent)
    }

    /// Register a node as part of this build.
    pub fn attach(&mut self, node: &dyn Node) {
        self.attached += 1;
        let imports = node.base().imports();
        if !imports.is_empty() {
            tracing::trace!(requests = imports.len(), "registering node imports");
            self.imports.extend(imports.iter().cloned());
        }
    }

    /// Register an import request not owned by any node.
    pub fn add_import(&mut self, request: ImportRequest) {
        self.imports.insert(request);
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Number of nodes rendered with this context so far.
    pub fn attached(&self) -> usize {
        self.attached
    }

    /// Render the aggregated import block, or an empty string.
    pub fn render_imports(&self) -> String {
        self.imports.render()
    }
}
