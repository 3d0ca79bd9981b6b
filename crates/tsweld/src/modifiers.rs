//! Declaration keywords such as `export`, `private` or `get`.

use std::fmt;

use indexmap::IndexSet;

pub const EXPORT: &str = "export";
pub const DEFAULT: &str = "default";
pub const PUBLIC: &str = "public";
pub const PROTECTED: &str = "protected";
pub const PRIVATE: &str = "private";
pub const STATIC: &str = "static";
pub const READONLY: &str = "readonly";
pub const ASYNC: &str = "async";
pub const GET: &str = "get";
pub const SET: &str = "set";

const VISIBILITY: [&str; 3] = [PUBLIC, PROTECTED, PRIVATE];

/// Ordered, duplicate-free set of modifier keywords.
///
/// Equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers(IndexSet<String>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keyword: impl Into<String>) {
        self.0.insert(keyword.into());
    }

    pub fn remove(&mut self, keyword: &str) {
        self.0.shift_remove(keyword);
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Replace any visibility keyword with `visibility`.
    pub fn set_visibility(&mut self, visibility: &str) {
        for keyword in VISIBILITY {
            self.remove(keyword);
        }
        self.insert(visibility);
    }

    pub fn is_getter(&self) -> bool {
        self.contains(GET)
    }

    pub fn is_setter(&self) -> bool {
        self.contains(SET)
    }

    /// Keywords followed by a single space, or an empty string.
    pub fn prefix(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{self} ")
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(keyword)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Modifiers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Modifiers {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
