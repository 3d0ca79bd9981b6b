//! Minimal declarative nodes for exercising the merge engine.

use crate::{
    Body, Container, ContentPolicy, Context, Declarative, Error, MergeDomain, Mergeable, Node,
    NodeBase, NodeList, Result,
};

/// A leaf declaration `let <name>: <ty>;` identified by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Decl {
    base: NodeBase,
    name: String,
    ty: String,
}

pub fn decl(name: &str, ty: &str) -> Decl {
    Decl {
        base: NodeBase::default(),
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

impl Node for Decl {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(format!("let {}: {};", self.name, self.ty))
    }

    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        Some(self)
    }

    fn as_mergeable_mut(&mut self) -> Option<&mut dyn Mergeable> {
        Some(self)
    }
}

impl Declarative for Decl {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("decl")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if self.ty != other.ty {
            return Err(Error::merge_conflict(&*self, &other));
        }
        Ok(())
    }
}

/// A declaration `const <name>;` that wrongly reuses the `decl` domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    base: NodeBase,
    name: String,
}

pub fn shadow(name: &str) -> Shadow {
    Shadow {
        base: NodeBase::default(),
        name: name.to_string(),
    }
}

impl Node for Shadow {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(format!("const {};", self.name))
    }

    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        Some(self)
    }

    fn as_mergeable_mut(&mut self) -> Option<&mut dyn Mergeable> {
        Some(self)
    }
}

impl Declarative for Shadow {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("decl")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, _other: Self) -> Result<()> {
        Ok(())
    }
}

/// A named block `<name> {..}` whose content merges.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    base: NodeBase,
    name: String,
    body: Body,
}

pub fn group(name: &str) -> Group {
    Group {
        base: NodeBase::default(),
        name: name.to_string(),
        body: Body::default(),
    }
}

impl Group {
    pub fn with(mut self, node: impl Node) -> Self {
        self.body.push(node);
        self
    }

    pub fn policy(mut self, policy: ContentPolicy) -> Self {
        self.body.set_policy(policy);
        self
    }
}

impl Node for Group {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let content = self.body.render_indented(ctx)?;
        Ok(format!("{} {{\n{}}}", self.name, content))
    }

    fn as_mergeable(&self) -> Option<&dyn Mergeable> {
        Some(self)
    }

    fn as_mergeable_mut(&mut self) -> Option<&mut dyn Mergeable> {
        Some(self)
    }
}

impl Declarative for Group {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("group")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        self.merge_body(other)
    }
}

impl Container for Group {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Build a list from heterogeneous nodes.
macro_rules! node_list {
    ($($node:expr),* $(,)?) => {{
        let mut list = $crate::NodeList::new();
        $(list.push($node);)*
        list
    }};
}
pub(crate) use node_list;

/// Render a list in a fresh context.
pub fn render(list: &NodeList) -> Result<String> {
    list.render(&mut Context::default())
}
