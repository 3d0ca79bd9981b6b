use crate::test_utils::{assert_renders, assert_renders_with_imports};
use crate::{
    ArrayValue, ComplexValue, GenericValue, NumberValue, ObservableType, SetArrayValue,
    SimpleType, StringValue,
};

#[test]
fn scalar_values() {
    assert_renders!(StringValue::new("bar"), "'bar'");
    assert_renders!(NumberValue::new(42), "42");
    assert_renders!(NumberValue::new(1.5), "1.5");
}

#[test]
fn array_value_stays_on_one_line() {
    assert_renders!(ArrayValue::new().strings(["a", "b"]), "['a', 'b']");
    assert_renders!(ArrayValue::new().numbers([1, 2, 3]), "[1, 2, 3]");
    assert_renders!(ArrayValue::new(), "[]");
}

#[test]
fn set_array_value_drops_duplicates() {
    let single = SetArrayValue::new().strings(["a", "a"]);
    assert_eq!(single.len(), 1);
    assert_renders!(single, "['a']");
}

#[test]
fn set_array_value_breaks_lines_for_many_values() {
    assert_renders!(SetArrayValue::new().strings(["a", "b", "a"]), r#"
        [
          'a',
          'b'
        ]
    "#);
}

#[test]
fn complex_value() {
    let value = ComplexValue::new()
        .string_value("selector", "app-root")
        .string_array_value("styleUrls", ["./app.component.css"]);
    assert_renders!(value, r#"
        {
          selector: 'app-root',
          styleUrls: ['./app.component.css']
        }
    "#);
}

#[test]
fn nested_complex_values_indent_per_level() {
    let value = ComplexValue::new().value("inner", ComplexValue::new().value("depth", NumberValue::new(2)));
    assert_renders!(value, r#"
        {
          inner: {
            depth: 2
          }
        }
    "#);
}

#[test]
fn generic_value() {
    let value = GenericValue::new("Map")
        .of(SimpleType::string())
        .of(SimpleType::number());
    assert_renders!(value, "Map<string | number>");
}

#[test]
fn observable_imports_rxjs() {
    assert_renders!(ObservableType::new(SimpleType::string()), "Observable<string>");
    assert_renders_with_imports!(ObservableType::new(SimpleType::new("User")), r#"
        import {Observable} from 'rxjs';

        Observable<User>
    "#);
}
