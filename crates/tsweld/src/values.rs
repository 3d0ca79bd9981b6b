//! Literal values and generic type applications.

use std::fmt::Display;

use tsweld_core::{Context, Node, NodeBase, NodeExt, Result, render_node};

use crate::known_imports;
use crate::render;

/// A single-quoted string literal: `'value'`.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    base: NodeBase,
    value: String,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            value: value.into(),
        }
    }
}

impl Node for StringValue {
    node_base!();

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(format!("'{}'", self.value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberValue {
    base: NodeBase,
    value: String,
}

impl NumberValue {
    pub fn new(value: impl Display) -> Self {
        Self {
            base: NodeBase::default(),
            value: value.to_string(),
        }
    }
}

impl Node for NumberValue {
    node_base!();

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(self.value.clone())
    }
}

/// An array literal on one line: `[a, b]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayValue {
    base: NodeBase,
    values: Vec<Box<dyn Node>>,
}

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Node) -> Self {
        self.values.push(Box::new(value));
        self
    }

    pub fn strings<S: Into<String>>(self, values: impl IntoIterator<Item = S>) -> Self {
        values
            .into_iter()
            .fold(self, |array, value| array.value(StringValue::new(value)))
    }

    pub fn numbers<N: Display>(self, values: impl IntoIterator<Item = N>) -> Self {
        values
            .into_iter()
            .fold(self, |array, value| array.value(NumberValue::new(value)))
    }
}

impl Node for ArrayValue {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        Ok(format!("[{}]", render::boxed(&self.values, ctx, ", ")?))
    }
}

/// An array literal whose entries are unique.
///
/// A single entry stays on one line; more entries are placed one per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetArrayValue {
    base: NodeBase,
    values: Vec<Box<dyn Node>>,
}

impl SetArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Node) -> Self {
        render::push_unique(&mut self.values, Box::new(value));
        self
    }

    pub fn strings<S: Into<String>>(self, values: impl IntoIterator<Item = S>) -> Self {
        values
            .into_iter()
            .fold(self, |array, value| array.value(StringValue::new(value)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Node for SetArrayValue {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        if self.values.len() > 1 {
            let values = render::boxed(&self.values, ctx, ",\n")?;
            return Ok(format!("[\n{}]", ctx.indent_text(&values)));
        }
        Ok(format!("[{}]", render::boxed(&self.values, ctx, ", ")?))
    }
}

/// `name: value`, used in object literals and object types alike.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeValuePair {
    base: NodeBase,
    name: String,
    value: Box<dyn Node>,
}

impl AttributeValuePair {
    pub fn new(name: impl Into<String>, value: impl Node) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            value: Box::new(value),
        }
    }
}

impl Node for AttributeValuePair {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        Ok(format!("{}: {}", self.name, render_node(&*self.value, ctx)?))
    }
}

/// An object literal, one attribute per line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplexValue {
    base: NodeBase,
    attributes: Vec<Box<dyn Node>>,
}

impl ComplexValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw entry, e.g. a spread or a shorthand property.
    pub fn entry(mut self, node: impl Node) -> Self {
        self.attributes.push(Box::new(node));
        self
    }

    pub fn value(self, name: impl Into<String>, value: impl Node) -> Self {
        self.entry(AttributeValuePair::new(name, value))
    }

    pub fn string_value(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.value(name, StringValue::new(value))
    }

    pub fn string_array_value<S: Into<String>>(
        self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.value(name, ArrayValue::new().strings(values))
    }
}

impl Node for ComplexValue {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let attributes = render::boxed(&self.attributes, ctx, ",\n")?;
        Ok(format!("{{\n{}}}", ctx.indent_text(&attributes)))
    }
}

/// A generic application: `Name<A | B>`.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericValue {
    base: NodeBase,
    name: String,
    types: Vec<Box<dyn Node>>,
}

impl GenericValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn of(mut self, ty: impl Node) -> Self {
        self.types.push(Box::new(ty));
        self
    }
}

impl Node for GenericValue {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        Ok(format!("{}<{}>", self.name, render::boxed(&self.types, ctx, " | ")?))
    }
}

/// `Observable<T>`, importing `Observable` from `rxjs`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservableType {
    inner: GenericValue,
}

impl ObservableType {
    pub fn new(ty: impl Node) -> Self {
        Self {
            inner: GenericValue::new("Observable")
                .of(ty)
                .with_import_request(known_imports::rx::observable()),
        }
    }

    pub fn or(mut self, ty: impl Node) -> Self {
        self.inner = self.inner.of(ty);
        self
    }
}

impl Node for ObservableType {
    fn base(&self) -> &NodeBase {
        self.inner.base()
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        self.inner.base_mut()
    }

    fn render(&self, ctx: &mut Context) -> Result<String> {
        self.inner.render(ctx)
    }
}
