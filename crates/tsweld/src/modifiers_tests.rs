use crate::modifiers::{self, Modifiers};

#[test]
fn renders_in_insertion_order() {
    let mods: Modifiers = ["export", "default"].into_iter().collect();
    assert_eq!(mods.to_string(), "export default");
    assert_eq!(mods.prefix(), "export default ");
}

#[test]
fn empty_has_no_prefix() {
    assert_eq!(Modifiers::new().prefix(), "");
}

#[test]
fn keywords_are_stored_once() {
    let mut mods = Modifiers::new();
    mods.insert(modifiers::STATIC);
    mods.insert(modifiers::STATIC);
    assert_eq!(mods.to_string(), "static");
}

#[test]
fn visibility_is_exclusive() {
    let mut mods: Modifiers = ["private", "static"].into_iter().collect();
    mods.set_visibility(modifiers::PUBLIC);
    assert_eq!(mods.to_string(), "static public");
}

#[test]
fn accessor_flags() {
    let mods: Modifiers = ["get"].into_iter().collect();
    assert!(mods.is_getter());
    assert!(!mods.is_setter());
}

#[test]
fn equality_ignores_order() {
    let a: Modifiers = ["public", "static"].into_iter().collect();
    let b: Modifiers = ["static", "public"].into_iter().collect();
    assert_eq!(a, b);
}
