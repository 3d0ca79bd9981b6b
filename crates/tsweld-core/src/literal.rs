use crate::context::Context;
use crate::node::{Node, NodeBase};
use crate::Result;

/// Verbatim text. Never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Literal {
    base: NodeBase,
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: NodeBase::default(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Node for Literal {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(self.text.clone())
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
