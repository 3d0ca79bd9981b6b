//! Top-level containers: named source files and anonymous blocks.

use tsweld_core::{Body, Container, Context, Declarative, MergeDomain, Node, NodeBase, Result};

/// A source file. Its content is rendered one entry per line without
/// indentation. Files with the same name merge.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    base: NodeBase,
    name: String,
    body: Body,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            body: Body::default(),
        }
    }

    body_builders!();

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for File {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        self.body.render(ctx)
    }
}

impl Declarative for File {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("file")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.merge_body(other)
    }
}

container!(File);

/// An anonymous group of nodes. Any two blocks in the same list merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    base: NodeBase,
    body: Body,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    body_builders!();
}

impl Node for Block {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        self.body.render(ctx)
    }
}

impl Declarative for Block {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("block")
    }

    fn is_merge_required(&self, _other: &Self) -> bool {
        true
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.merge_body(other)
    }
}

container!(Block);
