//! Classes.

use indexmap::IndexSet;
use tsweld_core::{
    Body, Container, Context, Declarative, Error, MergeDomain, Node, NodeBase, Result,
};

use crate::constructor::Constructor;
use crate::decorator::{self, Decorator};
use crate::field::Field;
use crate::method::Method;
use crate::modifiers::{self, Modifiers};

/// `[decorators\n][modifiers ]class Name[ extends S][ implements A, B]{..}`.
///
/// Classes with the same name merge their bodies. The header (decorators,
/// modifiers, superclass and implemented interfaces) must match.
#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    base: NodeBase,
    name: String,
    decorators: Vec<Decorator>,
    modifiers: Modifiers,
    extends: Option<String>,
    implements: IndexSet<String>,
    body: Body,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            decorators: Vec::new(),
            modifiers: Modifiers::default(),
            extends: None,
            implements: IndexSet::new(),
            body: Body::default(),
        }
    }

    body_builders!();

    pub fn export(mut self) -> Self {
        self.modifiers.insert(modifiers::EXPORT);
        self
    }

    pub fn modifier(mut self, keyword: impl Into<String>) -> Self {
        self.modifiers.insert(keyword);
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        decorator::push_unique(&mut self.decorators, decorator);
        self
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.insert(interface.into());
        self
    }

    pub fn field(self, field: Field) -> Self {
        self.content(field)
    }

    pub fn method(self, method: Method) -> Self {
        self.content(method)
    }

    pub fn constructor(self, constructor: Constructor) -> Self {
        self.content(constructor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First method named `name` that is not an accessor.
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods()
            .find(|m| m.name() == name && !m.is_getter() && !m.is_setter())
    }

    pub fn find_getter(&self, name: &str) -> Option<&Method> {
        self.methods().find(|m| m.name() == name && m.is_getter())
    }

    pub fn find_setter(&self, name: &str) -> Option<&Method> {
        self.methods().find(|m| m.name() == name && m.is_setter())
    }

    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.body.nodes().of_type::<Field>().find(|f| f.name() == name)
    }

    /// Append `node` to the body of the method named `name`.
    pub fn append_to_method(&mut self, name: &str, node: impl Node) -> Result<()> {
        let method = self
            .body
            .nodes_mut()
            .of_type_mut::<Method>()
            .find(|m| m.name() == name && !m.is_getter() && !m.is_setter())
            .ok_or_else(|| Error::unknown_element("method", name))?;
        tracing::debug!(class = %self.name, method = name, "appending to method");
        method.push_content(node);
        Ok(())
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.body.nodes().of_type::<Method>()
    }

    /// Header without the body, used in conflict reports.
    fn header(&self) -> Self {
        Self {
            base: NodeBase::default(),
            body: Body::default(),
            ..self.clone()
        }
    }

    fn same_header(&self, other: &Self) -> bool {
        self.decorators == other.decorators
            && self.modifiers == other.modifiers
            && self.extends == other.extends
            && self.implements == other.implements
    }
}

impl Node for Class {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let mut output = decorator::render_all(&self.decorators, ctx)?;
        output.push_str(&self.modifiers.prefix());
        output.push_str("class ");
        output.push_str(&self.name);
        if let Some(superclass) = &self.extends {
            output.push_str(" extends ");
            output.push_str(superclass);
        }
        if !self.implements.is_empty() {
            let interfaces: Vec<&str> = self.implements.iter().map(String::as_str).collect();
            output.push_str(" implements ");
            output.push_str(&interfaces.join(", "));
        }
        output.push_str("{\n");
        output.push_str(&self.body.render_indented(ctx)?);
        output.push('}');
        Ok(output)
    }
}

impl Declarative for Class {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("class")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if !self.same_header(&other) {
            return Err(Error::merge_conflict(&self.header(), &other.header()));
        }
        self.merge_body(other)
    }
}

container!(Class);
