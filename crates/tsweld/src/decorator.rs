//! Decorators: `@Input()`, `@Component({...})`.

use tsweld_core::{Context, Literal, Node, NodeBase, Result, render_node, utils};

use crate::render;
use crate::values::StringValue;

/// A decorator with an optional property list.
///
/// Without properties it renders as `@Name()`. Properties are placed one
/// per line between the parentheses unless the decorator is inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorator {
    base: NodeBase,
    name: String,
    properties: Vec<DecoratorProperty>,
    inline: bool,
}

impl Decorator {
    /// The leading `@` is added when missing.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.starts_with('@') {
            name
        } else {
            format!("@{name}")
        };
        Self {
            base: NodeBase::default(),
            name,
            properties: Vec::new(),
            inline: false,
        }
    }

    pub fn property(mut self, property: DecoratorProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Add `name: <code>` with `code` emitted verbatim.
    pub fn literal_property(self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.property(DecoratorProperty::named(name, Literal::new(code)))
    }

    pub fn string_property(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property(DecoratorProperty::named(name, StringValue::new(value)))
    }

    /// Render the whole decorator on a single line.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// The name including the leading `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this decorator is called `name`, with or without `@`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim_start_matches('@') == name.trim_start_matches('@')
    }
}

impl Node for Decorator {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let properties = if self.properties.is_empty() {
            "()".to_string()
        } else {
            let properties =
                render::joined(self.properties.iter().map(|p| p as &dyn Node), ctx, ",\n")?;
            format!("(\n{})", ctx.indent_text(&properties))
        };

        let output = format!("{}{}", self.name, properties);
        if self.inline {
            return Ok(utils::flatten(&output));
        }
        Ok(output)
    }
}

/// A single decorator argument: `name: value` or a bare value.
#[derive(Clone, Debug, PartialEq)]
pub struct DecoratorProperty {
    base: NodeBase,
    name: Option<String>,
    value: Box<dyn Node>,
}

impl DecoratorProperty {
    pub fn new(value: impl Node) -> Self {
        Self {
            base: NodeBase::default(),
            name: None,
            value: Box::new(value),
        }
    }

    pub fn named(name: impl Into<String>, value: impl Node) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(value)
        }
    }
}

impl Node for DecoratorProperty {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let value = render_node(&*self.value, ctx)?;
        match self.name.as_deref().filter(|name| !name.trim().is_empty()) {
            Some(name) => Ok(format!("{name}: {value}")),
            None => Ok(value),
        }
    }
}

/// Push `decorator` unless an equal one is present.
pub(crate) fn push_unique(decorators: &mut Vec<Decorator>, decorator: Decorator) {
    if !decorators.contains(&decorator) {
        decorators.push(decorator);
    }
}

/// Decorators one per line, each line terminated, or nothing.
pub(crate) fn render_all(decorators: &[Decorator], ctx: &mut Context) -> Result<String> {
    render::lines_before(decorators.iter().map(|d| d as &dyn Node), ctx)
}
