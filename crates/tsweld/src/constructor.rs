//! Class constructors.

use tsweld_core::{Body, Container, Context, Declarative, Error, MergeDomain, Node, NodeBase, Result};

use crate::signature::{Parameter, Parameters};

/// `constructor (params) {..}`.
///
/// A class has at most one constructor, so any two constructors merge.
/// Their parameter lists must be equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constructor {
    base: NodeBase,
    params: Parameters,
    body: Body,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    body_builders!();

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.params.push(parameter);
        self
    }

    /// `private name: ty` parameter property.
    pub fn inject(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.param(Parameter::custom(name, ty).private())
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Header without the body, used in conflict reports.
    fn header(&self) -> Self {
        Self {
            params: self.params.clone(),
            ..Self::default()
        }
    }
}

impl Node for Constructor {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let params = self.params.render(ctx)?;
        let body = self.body.render_indented(ctx)?;
        Ok(format!("constructor ({params}) {{\n{body}}}"))
    }
}

impl Declarative for Constructor {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("constructor")
    }

    fn is_merge_required(&self, _other: &Self) -> bool {
        true
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if self.params != other.params {
            return Err(Error::merge_conflict(&self.header(), &other.header()));
        }
        self.merge_body(other)
    }
}

container!(Constructor);
