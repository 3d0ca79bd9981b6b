//! End-to-end compositions mixing several element kinds.

use indoc::indoc;

use crate::test_utils::{assert_renders, assert_renders_with_imports};
use crate::{
    Block, Build, Class, Context, Error, Field, File, Function, Literal, Method, NodeExt,
    NodeList, SimpleType,
};

#[test]
fn functions_with_same_name_merge_bodies() {
    let block = Block::new()
        .content(Function::new("fn").comment("Comment 1"))
        .content(Function::new("fn").comment("Comment 2"));
    assert_renders!(block, r#"
        function fn () {
          // Comment 1
          // Comment 2
        }
    "#);
}

#[test]
fn identical_fields_render_once() {
    let block = Block::new()
        .content(Field::string("foo").string_value("bar"))
        .content(Field::string("foo").string_value("bar"));
    assert_renders!(block, "foo: string = 'bar';");
}

#[test]
fn fields_with_different_types_conflict() {
    let block = Block::new()
        .content(Field::string("foo").string_value("bar"))
        .content(Field::number("foo").number_value(1));
    let err = block.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to merge two elements because the declarations differ.\nFirst:  foo: string = 'bar';\nSecond: foo: number = 1;"
    );
}

#[test]
fn imports_from_one_path_share_a_line() {
    let block = Block::new()
        .content(Literal::new("let d: Distance;").with_import("Distance", "./my-types"))
        .content(Literal::new("let m: Miles;").with_import("Miles", "./my-types"))
        .content(Literal::new("let k: Kilometers;").with_import("Kilometers", "./my-types"))
        .content(Literal::new("let again: Distance;").with_import("Distance", "./my-types"));
    assert_renders_with_imports!(block, r#"
        import {Distance, Miles, Kilometers} from './my-types';

        let d: Distance;
        let m: Miles;
        let k: Kilometers;
        let again: Distance;
    "#);
}

#[test]
fn merged_member_keeps_first_position() {
    let mut list = NodeList::new();
    list.push(Function::new("x").statement("a();"));
    list.push(Literal::new("y();"));
    list.push(Function::new("x").statement("b();"));

    let output = list.render(&mut Context::default()).unwrap();
    assert_eq!(output, "function x () {\n  a();\n  b();\n}\ny();");
}

#[test]
fn empty_input_renders_nothing() {
    let mut ctx = Context::default();
    assert_eq!(NodeList::new().render(&mut ctx).unwrap(), "");
    assert_eq!(ctx.render_imports(), "");
    assert_eq!(Block::new().build_with_imports().unwrap(), "");
}

fn calculate() -> Function {
    Function::new("calculate")
        .number_param("c1")
        .number_param("c2")
        .returns(SimpleType::number())
        .statement("return c1 + c2;")
}

#[test]
fn files_with_same_name_merge_through_classes() {
    let first = File::new("example.ts")
        .content(calculate())
        .content(Function::new("calculateFirstFile"))
        .content(
            Class::new("ExampleClass")
                .field(Field::string("value"))
                .field(Field::string("valueFromFirstClass"))
                .method(Method::new("myMethod").comment("Comment 1")),
        );
    let second = File::new("example.ts")
        .content(calculate())
        .content(
            Class::new("ExampleClass")
                .field(Field::string("value"))
                .method(Method::new("myMethod").comment("Comment 2"))
                .field(Field::string("valueFromSecondClass")),
        )
        .content(Function::new("calculateSecondFile"));

    let output = Block::new().content(first).content(second).build().unwrap();
    insta::assert_snapshot!(output, @r"
    function calculate (c1: number, c2: number): number {
      return c1 + c2;
    }
    function calculateFirstFile () {
    }
    class ExampleClass{
      value: string;
      valueFromFirstClass: string;
      myMethod () {
        // Comment 1
        // Comment 2
      }
      valueFromSecondClass: string;
    }
    function calculateSecondFile () {
    }
    ");
}

#[test]
fn conflict_deep_in_a_file_fails_the_build() {
    let first = File::new("example.ts")
        .content(Class::new("ExampleClass").field(Field::string("value")));
    let second = File::new("example.ts")
        .content(Class::new("ExampleClass").field(Field::number("value")));

    let err = Block::new().content(first).content(second).build().unwrap_err();
    assert_eq!(
        err,
        Error::MergeConflict {
            first: "value: string;".to_string(),
            second: "value: number;".to_string(),
        }
    );
}

#[test]
fn imports_of_merged_declarations_survive() {
    let first = Class::new("Service")
        .with_import("Injectable", "@angular/core")
        .field(Field::string("a"));
    let second = Class::new("Service")
        .with_import("HttpClient", "@angular/common/http")
        .field(Field::string("b"));

    let mut ctx = Context::new().indent(4);
    let output = Block::new()
        .content(first)
        .content(second)
        .build_with_imports_in(&mut ctx)
        .unwrap();
    assert_eq!(
        output,
        indoc! {"
            import {Injectable} from '@angular/core';
            import {HttpClient} from '@angular/common/http';

            class Service{
                a: string;
                b: string;
            }"}
    );
}

#[test]
fn known_imports_pull_in_their_dependencies() {
    use crate::known_imports::{rx, stomp};

    let field = Field::custom("client", SimpleType::new("RxStomp"))
        .with_import_request(stomp::rx_stomp().depends_on(rx::replay_subject()));
    assert_renders_with_imports!(field, r#"
        import {RxStomp} from '@stomp/rx-stomp';
        import {ReplaySubject} from 'rxjs';

        client: RxStomp;
    "#);
}
