use tsweld_core::{Context, Node, NodeBase, Result};

/// Comment lines emitted verbatim, one per line.
///
/// Lines carry their own markers (`//`, `/**`, ` * `).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comment {
    base: NodeBase,
    lines: Vec<String>,
}

impl Comment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// A `/** .. */` block around `lines`.
    pub fn doc<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        let comment = Self::new().line("/**");
        lines
            .into_iter()
            .fold(comment, |comment, line| comment.line(format!(" * {}", line.as_ref())))
            .line(" */")
    }
}

impl Node for Comment {
    node_base!();

    fn render(&self, _ctx: &mut Context) -> Result<String> {
        Ok(self.lines.join("\n"))
    }
}
