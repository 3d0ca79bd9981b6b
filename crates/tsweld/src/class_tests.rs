use crate::test_utils::assert_renders;
use crate::{
    Build, Class, Constructor, Decorator, Error, Field, File, Literal, Method, NodeExt, Parameter,
};

#[test]
fn empty_class() {
    assert_renders!(Class::new("MyClass"), "class MyClass{\n}");
}

#[test]
fn exported_class_with_public_method() {
    let class = Class::new("MyClass")
        .export()
        .method(Method::new("ping").public().statement("console.log('pong');"));
    insta::assert_snapshot!(class.build().unwrap(), @r"
    export class MyClass{
      public ping () {
        console.log('pong');
      }
    }
    ");
}

#[test]
fn superclass_and_interfaces() {
    assert_renders!(
        Class::new("MyClass").implements("MyInterface"),
        "class MyClass implements MyInterface{\n}"
    );
    assert_renders!(
        Class::new("MyClass").extends("MySuperClass"),
        "class MyClass extends MySuperClass{\n}"
    );
    assert_renders!(
        Class::new("MyClass")
            .extends("MySuperClass")
            .implements("MyInterface")
            .implements("OtherInterface"),
        "class MyClass extends MySuperClass implements MyInterface, OtherInterface{\n}"
    );
}

#[test]
fn class_with_constructor() {
    let class = Class::new("MyClass").constructor(
        Constructor::new()
            .param(Parameter::string("stringParam"))
            .statement("console.log(stringParam);"),
    );
    insta::assert_snapshot!(class.build().unwrap(), @r"
    class MyClass{
      constructor (stringParam: string) {
        console.log(stringParam);
      }
    }
    ");
}

#[test]
fn decorated_component() {
    let class = Class::new("AppComponent")
        .export()
        .decorator(
            Decorator::new("Component")
                .string_property("selector", "app-root")
                .string_property("templateUrl", "./app.component.html"),
        )
        .with_import("Component", "@angular/core")
        .field(Field::new("title").string_value("app"));
    insta::assert_snapshot!(class.build_with_imports().unwrap(), @r"
    import {Component} from '@angular/core';

    @Component(
      selector: 'app-root',
      templateUrl: './app.component.html'
    )
    export class AppComponent{
      title: string = 'app';
    }
    ");
}

#[test]
fn member_lookup() {
    let class = Class::new("MyClass")
        .field(Field::string("value").optional())
        .method(Method::new("value").getter())
        .method(Method::new("load"));
    assert!(class.find_method("load").is_some());
    assert!(class.find_method("value").is_none());
    assert!(class.find_getter("value").is_some());
    assert!(class.find_setter("value").is_none());
    assert_eq!(class.find_field("value").map(Field::name), Some("value"));
    assert_eq!(class.methods().count(), 2);
}

#[test]
fn append_to_existing_method() {
    let mut class = Class::new("MyClass").method(Method::new("init").statement("this.a();"));
    class.append_to_method("init", Literal::new("this.b();")).unwrap();
    insta::assert_snapshot!(class.build().unwrap(), @r"
    class MyClass{
      init () {
        this.a();
        this.b();
      }
    }
    ");
}

#[test]
fn append_to_missing_method_fails() {
    let mut class = Class::new("MyClass");
    let err = class
        .append_to_method("init", Literal::new("this.b();"))
        .unwrap_err();
    assert_eq!(err, Error::unknown_element("method", "init"));
    assert_eq!(err.to_string(), "no method named `init`");
}

#[test]
fn classes_with_different_headers_conflict() {
    let file = File::new("a.ts")
        .content(Class::new("A").extends("Base").field(Field::string("x")))
        .content(Class::new("A").extends("Other"));
    assert_eq!(
        file.build().unwrap_err(),
        Error::MergeConflict {
            first: "class A extends Base{\n}".to_string(),
            second: "class A extends Other{\n}".to_string(),
        }
    );
}
