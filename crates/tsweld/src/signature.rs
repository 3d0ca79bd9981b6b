//! Parameter lists and return types of callables.

use tsweld_core::{Context, Node, NodeBase, Result, render_node};

use crate::modifiers::{self, Modifiers};
use crate::render;
use crate::types::{OrType, SimpleType};

/// A callable parameter: `[modifiers ]name[?]: type`.
///
/// The type defaults to `any`. Modifiers are only meaningful for
/// constructor parameter properties such as `private http: HttpClient`.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    base: NodeBase,
    name: String,
    ty: Box<dyn Node>,
    optional: bool,
    modifiers: Modifiers,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            name: name.into(),
            ty: Box::new(SimpleType::any()),
            optional: false,
            modifiers: Modifiers::default(),
        }
    }

    pub fn typed(name: impl Into<String>, ty: impl Node) -> Self {
        Self::new(name).ty(ty)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::typed(name, SimpleType::string())
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::typed(name, SimpleType::number())
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::typed(name, SimpleType::boolean())
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::typed(name, SimpleType::date())
    }

    /// A parameter of a named type, e.g. `custom("http", "HttpClient")`.
    pub fn custom(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::typed(name, SimpleType::new(ty))
    }

    pub fn ty(mut self, ty: impl Node) -> Self {
        self.ty = Box::new(ty);
        self
    }

    pub fn boxed_ty(mut self, ty: Box<dyn Node>) -> Self {
        self.ty = ty;
        self
    }

    pub fn optional(self) -> Self {
        self.set_optional(true)
    }

    pub fn set_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Widen the type to `<current> | <ty>`.
    pub fn or_type(mut self, ty: impl Node) -> Self {
        let current = std::mem::replace(&mut self.ty, Box::new(SimpleType::any()));
        self.ty = Box::new(OrType::from_boxed(current, Box::new(ty)));
        self
    }

    pub fn nullable(self) -> Self {
        self.or_type(SimpleType::null())
    }

    pub fn modifier(mut self, keyword: impl Into<String>) -> Self {
        self.modifiers.insert(keyword);
        self
    }

    pub fn private(mut self) -> Self {
        self.modifiers.set_visibility(modifiers::PRIVATE);
        self
    }

    pub fn public(mut self) -> Self {
        self.modifiers.set_visibility(modifiers::PUBLIC);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Parameter {
    node_base!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let optional = if self.optional { "?" } else { "" };
        let ty = render_node(&*self.ty, ctx)?;
        Ok(format!("{}{}{}: {}", self.modifiers.prefix(), self.name, optional, ty))
    }
}

/// Duplicate-free, ordered parameter list rendered as `a: A, b: B`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    pub fn push(&mut self, parameter: Parameter) {
        if !self.0.contains(&parameter) {
            self.0.push(parameter);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    pub fn render(&self, ctx: &mut Context) -> Result<String> {
        render::joined(self.0.iter().map(|p| p as &dyn Node), ctx, ", ")
    }
}

impl Extend<Parameter> for Parameters {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        for parameter in iter {
            self.push(parameter);
        }
    }
}

/// Duplicate-free union of return types rendered as `A | B`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReturnTypes(Vec<Box<dyn Node>>);

impl ReturnTypes {
    pub fn push(&mut self, ty: impl Node) {
        self.push_boxed(Box::new(ty));
    }

    pub fn push_boxed(&mut self, ty: Box<dyn Node>) {
        render::push_unique(&mut self.0, ty);
    }

    /// Add or remove the `undefined` variant.
    pub fn set_optional(&mut self, optional: bool) {
        let undefined = SimpleType::undefined();
        if optional {
            self.push(undefined);
        } else {
            self.0.retain(|ty| !ty.eq_node(&undefined));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self, ctx: &mut Context) -> Result<String> {
        render::boxed(&self.0, ctx, " | ")
    }

    /// `: A | B`, or nothing when no return type is declared.
    pub fn render_annotation(&self, ctx: &mut Context) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(": {}", self.render(ctx)?))
    }
}

impl Extend<Box<dyn Node>> for ReturnTypes {
    fn extend<I: IntoIterator<Item = Box<dyn Node>>>(&mut self, iter: I) {
        for ty in iter {
            self.push_boxed(ty);
        }
    }
}

/// Name, modifiers, parameters and return types shared by functions,
/// methods and method declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub(crate) name: String,
    pub(crate) modifiers: Modifiers,
    pub(crate) params: Parameters,
    pub(crate) returns: ReturnTypes,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::default(),
            params: Parameters::default(),
            returns: ReturnTypes::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn returns(&self) -> &ReturnTypes {
        &self.returns
    }

    /// Same name and same accessor kind. Parameters are not part of the
    /// identity, so overloads by parameter surface as conflicts.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name
            && self.modifiers.is_getter() == other.modifiers.is_getter()
            && self.modifiers.is_setter() == other.modifiers.is_setter()
    }
}
