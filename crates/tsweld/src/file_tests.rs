use crate::test_utils::assert_renders;
use crate::{Block, Class, Comment, Declarative, File, Function, Literal};

#[test]
fn file_content_is_not_indented() {
    let file = File::new("main.ts")
        .content(Comment::doc(["Entry point."]))
        .content(Function::new("main"))
        .statement("main();");
    assert_renders!(file, r#"
        /**
         * Entry point.
         */
        function main () {
        }
        main();
    "#);
}

#[test]
fn files_match_by_name() {
    assert!(File::new("a.ts").is_merge_required(&File::new("a.ts")));
    assert!(!File::new("a.ts").is_merge_required(&File::new("b.ts")));
}

#[test]
fn files_with_different_names_stay_apart() {
    let block = Block::new()
        .content(File::new("a.ts").statement("const a = 1;"))
        .content(File::new("b.ts").statement("const b = 2;"));
    assert_renders!(block, r#"
        const a = 1;
        const b = 2;
    "#);
}

#[test]
fn blocks_always_merge() {
    let outer = Block::new()
        .content(Block::new().content(Class::new("A")))
        .content(Block::new().content(Class::new("A")).statement("new A();"));
    assert_renders!(outer, r#"
        class A{
        }
        new A();
    "#);
}

#[test]
fn comment_joins_lines() {
    let comment = Comment::new().line("// one").line("// two");
    assert_renders!(comment, "// one\n// two");
    assert_renders!(Literal::new("// raw"), "// raw");
}
