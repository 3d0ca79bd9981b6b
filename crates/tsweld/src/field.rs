//! Class fields and their generated accessors.

use std::fmt::Display;

use tsweld_core::{Context, Declarative, Error, Literal, MergeDomain, Node, NodeBase, Result, render_node};

use crate::decorator::{self, Decorator};
use crate::method::Method;
use crate::signature::Parameter;
use crate::types::SimpleType;
use crate::values::{ArrayValue, NumberValue, StringValue};

/// `[decorators\n][prefix]name[?|!][: type][ = value];`.
///
/// Fields are identified by name. Two fields with the same name merge only
/// when every other attribute is equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    base: NodeBase,
    name: String,
    prefix: String,
    decorators: Vec<Decorator>,
    optional: bool,
    never_null: bool,
    ty: Option<Box<dyn Node>>,
    value: Option<Box<dyn Node>>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            prefix: String::new(),
            decorators: Vec::new(),
            optional: false,
            never_null: false,
            ty: None,
            value: None,
        }
    }

    /// `name: string;`
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name).ty(SimpleType::string())
    }

    /// `name: number;`
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name).ty(SimpleType::number())
    }

    /// `name: boolean;`
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name).ty(SimpleType::boolean())
    }

    pub fn custom(name: impl Into<String>, ty: impl Node) -> Self {
        Self::new(name).ty(ty)
    }

    pub fn ty(mut self, ty: impl Node) -> Self {
        self.ty = Some(Box::new(ty));
        self
    }

    pub fn value(mut self, value: impl Node) -> Self {
        self.value = Some(Box::new(value));
        self
    }

    /// Assign `'value'`, typing the field as `string` if it has no type yet.
    pub fn string_value(self, value: impl Into<String>) -> Self {
        self.default_ty(SimpleType::string()).value(StringValue::new(value))
    }

    /// Assign a number, typing the field as `number` if it has no type yet.
    pub fn number_value(self, value: impl Display) -> Self {
        self.default_ty(SimpleType::number()).value(NumberValue::new(value))
    }

    pub fn string_array_value<S: Into<String>>(self, values: impl IntoIterator<Item = S>) -> Self {
        self.default_ty(SimpleType::string().to_array())
            .value(ArrayValue::new().strings(values))
    }

    pub fn number_array_value<N: Display>(self, values: impl IntoIterator<Item = N>) -> Self {
        self.default_ty(SimpleType::number().to_array())
            .value(ArrayValue::new().numbers(values))
    }

    fn default_ty(self, ty: SimpleType) -> Self {
        if self.ty.is_some() {
            return self;
        }
        self.ty(ty)
    }

    /// `name?: ..`, the field may be undefined.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// `name!: ..`, the field is assigned outside the constructor.
    pub fn never_null(mut self) -> Self {
        self.never_null = true;
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        decorator::push_unique(&mut self.decorators, decorator);
        self
    }

    /// Prepend `prefix` to the rendered field name.
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Emit a setter after the field and rename the field to `_name`:
    ///
    /// ```text
    /// _value?: string;
    /// set value (value?: string) {
    ///   this._value = value;
    /// }
    /// ```
    pub fn add_setter(self) -> Self {
        let setter = self.default_setter();
        self.name_prefix("_").setter(setter)
    }

    /// Like [`Field::add_setter`] with `decorator` on the setter, e.g.
    /// `@Input()`.
    pub fn add_setter_with(self, decorator: Decorator) -> Self {
        let setter = self.default_setter().decorator(decorator);
        self.name_prefix("_").setter(setter)
    }

    /// Emit a getter after the field and rename the field to `_name`.
    pub fn add_getter(self) -> Self {
        let mut getter = Method::new(self.name.clone()).getter();
        if let Some(ty) = &self.ty {
            getter = getter.returns_boxed(ty.clone());
        }
        let getter = getter
            .optional(self.optional)
            .content(Literal::new(format!("return this._{};", self.name)));
        self.name_prefix("_").getter(getter)
    }

    /// Emit a custom setter after the field. The field name is unchanged.
    pub fn setter(mut self, setter: Method) -> Self {
        self.base.add_after(setter);
        self
    }

    /// Emit a custom getter after the field. The field name is unchanged.
    pub fn getter(mut self, getter: Method) -> Self {
        self.base.add_after(getter);
        self
    }

    fn default_setter(&self) -> Method {
        let mut parameter = Parameter::new("value").set_optional(self.optional);
        if let Some(ty) = &self.ty {
            parameter = parameter.boxed_ty(ty.clone());
        }
        Method::new(self.name.clone())
            .setter()
            .param(parameter)
            .content(Literal::new(format!("this._{} = value;", self.name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn same_signature(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.decorators == other.decorators
            && self.optional == other.optional
            && self.never_null == other.never_null
            && self.ty == other.ty
            && self.value == other.value
    }
}

impl Node for Field {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let mut output = decorator::render_all(&self.decorators, ctx)?;
        output.push_str(&self.prefix);
        output.push_str(&self.name);
        if self.optional {
            output.push('?');
        } else if self.never_null {
            output.push('!');
        }
        if let Some(ty) = &self.ty {
            output.push_str(": ");
            output.push_str(&render_node(&**ty, ctx)?);
        }
        if let Some(value) = &self.value {
            output.push_str(" = ");
            output.push_str(&render_node(&**value, ctx)?);
        }
        output.push(';');
        Ok(output)
    }
}

impl Declarative for Field {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("field")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn merge(&mut self, other: Self) -> Result<()> {
        if !self.same_signature(&other) {
            return Err(Error::merge_conflict(&*self, &other));
        }
        Ok(())
    }
}
