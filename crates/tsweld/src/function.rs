//! Free functions.

use tsweld_core::{Body, Container, Context, Declarative, Error, MergeDomain, Node, NodeBase, Result};

use crate::method::MethodDeclaration;
use crate::modifiers;
use crate::signature::Signature;

/// `[modifiers ]function name (params)[: returns] {..}`.
///
/// Functions with the same name and accessor kind merge their bodies;
/// differing modifiers, parameters or return types are a conflict.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    base: NodeBase,
    signature: Signature,
    body: Body,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            signature: Signature::new(name),
            body: Body::default(),
        }
    }

    signature_builders!();
    body_builders!();

    /// `export default function ..`.
    pub fn export_default(self) -> Self {
        self.export().modifier(modifiers::DEFAULT)
    }

    /// The declaration of this function, without its body.
    pub fn declaration(&self) -> MethodDeclaration {
        MethodDeclaration::from_signature(self.signature.clone())
    }
}

impl Node for Function {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let params = self.signature.params.render(ctx)?;
        let returns = self.signature.returns.render_annotation(ctx)?;
        let body = self.body.render_indented(ctx)?;
        Ok(format!(
            "{}function {} ({}){} {{\n{}}}",
            self.signature.modifiers.prefix(),
            self.signature.name,
            params,
            returns,
            body
        ))
    }
}

impl Declarative for Function {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("function")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.signature.same_identity(&other.signature)
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if self.signature != other.signature {
            return Err(Error::merge_conflict(&self.declaration(), &other.declaration()));
        }
        self.merge_body(other)
    }
}

container!(Function);
