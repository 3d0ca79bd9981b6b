//! Class methods and bodiless method declarations.

use tsweld_core::{Body, Container, Context, Declarative, Error, MergeDomain, Node, NodeBase, Result};

use crate::decorator::{self, Decorator};
use crate::modifiers;
use crate::signature::Signature;
use crate::values::ObservableType;

/// `[decorators\n][modifiers ]name (params)[: returns] {..}`.
///
/// Methods with the same name and accessor kind merge their bodies;
/// a differing declaration is a conflict.
#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    base: NodeBase,
    decorators: Vec<Decorator>,
    signature: Signature,
    body: Body,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_signature(Signature::new(name))
    }

    fn from_signature(signature: Signature) -> Self {
        Self {
            base: NodeBase::default(),
            decorators: Vec::new(),
            signature,
            body: Body::default(),
        }
    }

    /// A method implementing `declaration`, with an empty body.
    pub fn from_declaration(declaration: &MethodDeclaration) -> Self {
        let mut method = Self::from_signature(declaration.signature.clone());
        method
            .base
            .extend_imports(declaration.base().imports().clone());
        method
    }

    signature_builders!();
    body_builders!();

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        decorator::push_unique(&mut self.decorators, decorator);
        self
    }

    pub fn public(mut self) -> Self {
        self.signature.modifiers.set_visibility(modifiers::PUBLIC);
        self
    }

    pub fn private(mut self) -> Self {
        self.signature.modifiers.set_visibility(modifiers::PRIVATE);
        self
    }

    /// Add `Observable<ty>` to the return types.
    pub fn returns_observable(self, ty: impl Node) -> Self {
        self.returns(ObservableType::new(ty))
    }

    pub fn find_decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.is_named(name))
    }

    pub fn decorator_or_err(&self, name: &str) -> Result<&Decorator> {
        self.find_decorator(name)
            .ok_or_else(|| Error::unknown_element("decorator", name))
    }

    /// Append a node to the body in place.
    pub fn push_content(&mut self, node: impl Node) {
        self.body.push(node);
    }

    pub fn declaration(&self) -> MethodDeclaration {
        MethodDeclaration::from_signature(self.signature.clone())
    }
}

impl Node for Method {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let decorators = decorator::render_all(&self.decorators, ctx)?;
        let params = self.signature.params.render(ctx)?;
        let returns = self.signature.returns.render_annotation(ctx)?;
        let body = self.body.render_indented(ctx)?;
        Ok(format!(
            "{}{}{} ({}){} {{\n{}}}",
            decorators,
            self.signature.modifiers.prefix(),
            self.signature.name,
            params,
            returns,
            body
        ))
    }
}

impl Declarative for Method {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("method")
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

container!(Method);

/// `[modifiers ]name(params): returns;` as written in interfaces.
///
/// Without return types the declaration returns `void`. Two declarations
/// only merge when they are identical; differing ones are overloads.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodDeclaration {
    base: NodeBase,
    signature: Signature,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_signature(Signature::new(name))
    }

    pub(crate) fn from_signature(signature: Signature) -> Self {
        Self {
            base: NodeBase::default(),
            signature,
        }
    }

    signature_builders!();

    /// Add `Observable<ty>` to the return types.
    pub fn returns_observable(self, ty: impl Node) -> Self {
        self.returns(ObservableType::new(ty))
    }

    /// Implement this declaration as a method with an empty body.
    pub fn to_method(&self) -> Method {
        Method::from_declaration(self)
    }
}

impl Node for MethodDeclaration {
    node_base!();
    mergeable!();

    fn render(&self, ctx: &mut Context) -> Result<String> {
        let params = self.signature.params.render(ctx)?;
        let returns = if self.signature.returns.is_empty() {
            ": void".to_string()
        } else {
            self.signature.returns.render_annotation(ctx)?
        };
        Ok(format!(
            "{}{}({}){};",
            self.signature.modifiers.prefix(),
            self.signature.name,
            params,
            returns
        ))
    }
}

impl Declarative for MethodDeclaration {
    fn merge_domain(&self) -> MergeDomain {
        MergeDomain::new("method-declaration")
    }

    fn is_merge_required(&self, other: &Self) -> bool {
        self.signature == other.signature
    }

    fn merge(&mut self, _other: Self) -> Result<()> {
        Ok(())
    }
}

impl From<MethodDeclaration> for Method {
    fn from(declaration: MethodDeclaration) -> Self {
        Method::from_declaration(&declaration)
    }
}
