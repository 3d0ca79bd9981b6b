//! Test utilities and render assertions.

/// Assert that a node renders (without imports) to the dedented text.
macro_rules! assert_renders {
    ($node:expr, $expected:literal) => {{
        let output = tsweld_core::Build::build(&$node).expect("render failed");
        assert_eq!(output, indoc::indoc!($expected).trim_end());
    }};
}

/// Assert that a node renders with its import block to the dedented text.
macro_rules! assert_renders_with_imports {
    ($node:expr, $expected:literal) => {{
        let output = tsweld_core::Build::build_with_imports(&$node).expect("render failed");
        assert_eq!(output, indoc::indoc!($expected).trim_end());
    }};
}

pub(crate) use {assert_renders, assert_renders_with_imports};
