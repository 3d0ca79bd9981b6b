use crate::{Context, ImportRequest, Literal, NodeExt};

#[test]
fn default_indent_is_two_spaces() {
    let ctx = Context::default();
    assert_eq!(ctx.indent_width(), 2);
    assert_eq!(ctx.indent_text("a"), "  a\n");
}

#[test]
fn indent_is_configurable() {
    let ctx = Context::new().indent(4);
    assert_eq!(ctx.indent_text("a\nb"), "    a\n    b\n");
}

#[test]
fn attach_registers_imports_once_and_counts_nodes() {
    let mut ctx = Context::new();
    let node = Literal::new("x").with_import("A", "./a");
    ctx.attach(&node);
    ctx.attach(&node);

    assert_eq!(ctx.attached(), 2);
    assert_eq!(ctx.imports().len(), 1);
    assert_eq!(ctx.render_imports(), "import {A} from './a';\n\n");
}

#[test]
fn loose_imports_are_rendered() {
    let mut ctx = Context::new();
    assert_eq!(ctx.render_imports(), "");
    ctx.add_import(ImportRequest::new("Observable", "rxjs"));
    assert_eq!(ctx.render_imports(), "import {Observable} from 'rxjs';\n\n");
}
