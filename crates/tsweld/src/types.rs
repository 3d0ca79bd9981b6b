//! Type expressions and type aliases.

use tsweld_core::{Context, Declarative, Error, MergeDomain, Node, NodeBase, Result};

use crate::modifiers::{self, Modifiers};
use crate::render;
use crate::values::AttributeValuePair;

/// A named type such as `string` or `Distance[]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleType {
    base: NodeBase,
    name: String,
}

impl SimpleType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
        }
    }

    pub fn any() -> Self {
        Self::new("any")
    }

    pub fn unknown() -> Self {
        Self::new("unknown")
    }

    pub fn null() -> Self {
        Self::new("null")
    }

    pub fn undefined() -> Self {
        Self::new("undefined")
    }

    pub fn void() -> Self {
        Self::new("void")
    }

    pub fn string() -> Self {
        Self::new("string")
    }

    pub fn number() -> Self {
        Self::new("number")
    }

    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    pub fn date() -> Self {
        Self::new("Date")
    }

    /// The array type of this type, e.g. `string` becomes `string[]`.
    pub fn to_array(&self) -> Self {
        Self {
            base: self.base.clone(),
            name: format!("{}[]", self.name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for SimpleType {
    node_base!();

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(self.name.clone())
    }
}

/// A union of two or more types: `a | b`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrType {
    base: NodeBase,
    variants: Vec<Box<dyn Node>>,
}

impl OrType {
    pub fn new(first: impl Node, second: impl Node) -> Self {
        Self::from_boxed(Box::new(first), Box::new(second))
    }

    pub fn from_boxed(first: Box<dyn Node>, second: Box<dyn Node>) -> Self {
        Self {
            base: NodeBase::default(),
            variants: vec![first, second],
        }
    }

    pub fn or(mut self, variant: impl Node) -> Self {
        self.variants.push(Box::new(variant));
        self
    }
}

impl Node for OrType {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        render::boxed(&self.variants, ctx, " | ")
    }
}

/// An inline object type:
///
/// ```text
/// {
///   username: string,
///   token: string
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplexType {
    base: NodeBase,
    attributes: Vec<AttributeValuePair>,
}

impl ComplexType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, name: impl Into<String>, ty: impl Node) -> Self {
        self.attributes.push(AttributeValuePair::new(name, ty));
        self
    }

    pub fn string_attribute(self, name: impl Into<String>) -> Self {
        self.attribute(name, SimpleType::string())
    }

    pub fn number_attribute(self, name: impl Into<String>) -> Self {
        self.attribute(name, SimpleType::number())
    }
}

impl Node for ComplexType {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let attributes = render::joined(self.attributes.iter().map(|a| a as &dyn Node), ctx, ",\n")?;
        Ok(format!("{{\n{}}}", ctx.indent_text(&attributes)))
    }
}

/// `[export ]type Name = <value>`.
///
/// Aliases with the same name merge; a differing value is a conflict.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAlias {
    base: NodeBase,
    name: String,
    modifiers: Modifiers,
    value: Box<dyn Node>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, value: impl Node) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            modifiers: Modifiers::default(),
            value: Box::new(value),
        }
    }

    pub fn export(mut self) -> Self {
        self.modifiers.insert(modifiers::EXPORT);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for TypeAlias {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let value = tsweld_core::render_node(&*self.value, ctx)?;
        Ok(format!("{}type {} = {}", self.modifiers.prefix(), self.name, value))
    }
}

impl Declarative for TypeAlias {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("type-alias")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if self.modifiers != other.modifiers || self.value != other.value {
            return Err(Error::merge_conflict(&*self, &other));
        }
        Ok(())
    }
}
