use crate::test_utils::assert_renders;
use crate::{ComplexValue, Decorator, DecoratorProperty};

#[test]
fn bare_decorator() {
    assert_renders!(Decorator::new("Input"), "@Input()");
    assert_renders!(Decorator::new("@Input"), "@Input()");
}

#[test]
fn named_properties_one_per_line() {
    let decorator = Decorator::new("Component")
        .string_property("selector", "app-root")
        .literal_property("standalone", "true");
    assert_renders!(decorator, r#"
        @Component(
          selector: 'app-root',
          standalone: true
        )
    "#);
}

#[test]
fn unnamed_object_property() {
    let decorator = Decorator::new("Component").property(DecoratorProperty::new(
        ComplexValue::new().string_value("selector", "app-root"),
    ));
    assert_renders!(decorator, r#"
        @Component(
          {
            selector: 'app-root'
          }
        )
    "#);
}

#[test]
fn inline_decorator_collapses_whitespace() {
    let decorator = Decorator::new("Component")
        .property(DecoratorProperty::new(
            ComplexValue::new().string_value("selector", "app-root"),
        ))
        .inline();
    assert_renders!(decorator, "@Component({selector: 'app-root'})");
}

#[test]
fn name_lookup_ignores_at_sign() {
    let decorator = Decorator::new("Input");
    assert_eq!(decorator.name(), "@Input");
    assert!(decorator.is_named("Input"));
    assert!(decorator.is_named("@Input"));
    assert!(!decorator.is_named("Output"));
}
