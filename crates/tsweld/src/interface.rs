//! Interfaces.

use tsweld_core::{Body, Container, Context, Declarative, Error, MergeDomain, Node, NodeBase, Result};

use crate::method::MethodDeclaration;
use crate::modifiers::{self, Modifiers};

/// `[modifiers ]interface Name{..}`.
///
/// Interfaces with the same name merge their members; their modifiers must
/// match.
#[derive(Clone, Debug, PartialEq)]
pub struct Interface {
    base: NodeBase,
    name: String,
    modifiers: Modifiers,
    body: Body,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            modifiers: Modifiers::default(),
            body: Body::default(),
        }
    }

    body_builders!();

    pub fn export(mut self) -> Self {
        self.modifiers.insert(modifiers::EXPORT);
        self
    }

    pub fn method(self, declaration: MethodDeclaration) -> Self {
        self.content(declaration)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header without the body, used in conflict reports.
    fn header(&self) -> Self {
        Self {
            base: NodeBase::default(),
            body: Body::default(),
            ..self.clone()
        }
    }

    pub fn declarations(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.body.nodes().of_type::<MethodDeclaration>()
    }
}

impl Node for Interface {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let body = self.body.render_indented(ctx)?;
        Ok(format!(
            "{}interface {}{{\n{}}}",
            self.modifiers.prefix(),
            self.name,
            body
        ))
    }
}

impl Declarative for Interface {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("interface")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if self.modifiers != other.modifiers {
            return Err(Error::merge_conflict(&self.header(), &other.header()));
        }
        self.merge_body(other)
    }
}

container!(Interface);
