//! Declarations that own a body of further nodes.

use std::fmt;
use std::rc::Rc;

use crate::context::Context;
use crate::list::NodeList;
use crate::merge::Declarative;
use crate::node::Node;
use crate::Result;

/// How a container combines the content of a duplicate into its own.
#[derive(Clone, Default)]
pub enum ContentPolicy {
    /// Append the incoming content, unless it equals the existing content
    /// entry by entry.
    #[default]
    Append,
    /// Append only incoming entries with no content-equal entry already
    /// present in the accumulated body.
    DropEqual,
    /// Caller-supplied reconciliation.
    Custom(Rc<dyn Fn(&mut NodeList, NodeList)>),
}

impl ContentPolicy {
    pub fn custom(reconcile: impl Fn(&mut NodeList, NodeList) + 'static) -> Self {
        Self::Custom(Rc::new(reconcile))
    }

    /// Combine `incoming` into `existing`. Duplicate resolution happens
    /// afterwards, not here.
    pub fn reconcile(&self, existing: &mut NodeList, incoming: NodeList) {
        match self {
            Self::Append => {
                if *existing != incoming {
                    existing.extend(incoming);
                }
            }
            Self::DropEqual => {
                for node in incoming {
                    if !existing.contains(&*node) {
                        existing.push_boxed(node);
                    }
                }
            }
            Self::Custom(reconcile) => reconcile(existing, incoming),
        }
    }
}

impl fmt::Debug for ContentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => f.write_str("Append"),
            Self::DropEqual => f.write_str("DropEqual"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for ContentPolicy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Append, Self::Append) | (Self::DropEqual, Self::DropEqual) => true,
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The content of a container together with its merge policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    nodes: NodeList,
    policy: ContentPolicy,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut NodeList {
        &mut self.nodes
    }

    pub fn policy(&self) -> &ContentPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: ContentPolicy) {
        self.policy = policy;
    }

    pub fn push(&mut self, node: impl Node) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn take_nodes(&mut self) -> NodeList {
        std::mem::take(&mut self.nodes)
    }

    /// Reconcile `incoming` under this body's policy, then fuse duplicates
    /// across the combined content.
    pub fn absorb(&mut self, incoming: NodeList) -> Result<()> {
        self.policy.reconcile(&mut self.nodes, incoming);
        self.nodes.resolve()
    }

    pub fn render(&self, ctx: &mut Context) -> Result<String> {
        self.nodes.render(ctx)
    }

    /// Render the content one nesting level deeper.
    pub fn render_indented(&self, ctx: &mut Context) -> Result<String> {
        let content = self.render(ctx)?;
        Ok(ctx.indent_text(&content))
    }
}

/// A declaration whose merge is defined by merging its [`Body`].
pub trait Container: Declarative {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Move the content of `other` into this container.
    ///
    /// `other`'s own satellites and policy are dropped; the receiving
    /// container's policy decides how the content is combined.
    fn merge_body(&mut self, mut other: Self) -> Result<()> {
        let incoming = other.body_mut().take_nodes();
        self.body_mut().absorb(incoming)
    }
}
