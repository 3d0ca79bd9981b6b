//! TypeScript source fragments that compose and merge by declaration.
//!
//! Every element here is a [`tsweld_core::Node`]. Declarations (classes,
//! functions, methods, fields, ...) fuse with duplicates when they meet in
//! the same list, so independent generators can each emit a partial class or
//! file and the rendered output contains every declaration once.
//!
//! # Example
//!
//! ```
//! use tsweld::{Block, Build, Class, Field, File, Method};
//!
//! let first = File::new("example.ts").content(
//!     Class::new("Example")
//!         .field(Field::string("a"))
//!         .method(Method::new("run").comment("step 1")),
//! );
//! let second = File::new("example.ts").content(
//!     Class::new("Example")
//!         .field(Field::string("b"))
//!         .method(Method::new("run").comment("step 2")),
//! );
//!
//! let output = Block::new().content(first).content(second).build().unwrap();
//! assert_eq!(
//!     output,
//!     "class Example{\n  a: string;\n  run () {\n    // step 1\n    // step 2\n  }\n  b: string;\n}"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[macro_use]
mod macros;

pub mod class;
pub mod comment;
pub mod constructor;
pub mod decorator;
pub mod field;
pub mod file;
pub mod function;
pub mod interface;
pub mod known_imports;
pub mod method;
pub mod modifiers;
pub mod signature;
pub mod types;
pub mod values;

mod render;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod class_tests;
#[cfg(test)]
mod decorator_tests;
#[cfg(test)]
mod file_tests;
#[cfg(test)]
mod modifiers_tests;
#[cfg(test)]
mod scenario_tests;
#[cfg(test)]
mod values_tests;

pub use class::Class;
pub use comment::Comment;
pub use constructor::Constructor;
pub use decorator::{Decorator, DecoratorProperty};
pub use field::Field;
pub use file::{Block, File};
pub use function::Function;
pub use interface::Interface;
pub use method::{Method, MethodDeclaration};
pub use modifiers::Modifiers;
pub use signature::{Parameter, Parameters, ReturnTypes, Signature};
pub use types::{ComplexType, OrType, SimpleType, TypeAlias};
pub use values::{
    ArrayValue, AttributeValuePair, ComplexValue, GenericValue, NumberValue, ObservableType,
    SetArrayValue, StringValue,
};

pub use tsweld_core::{
    Body, Build, Container, ContentPolicy, Context, Declarative, Error, ImportRequest, ImportSet,
    Literal, MergeDomain, Node, NodeBase, NodeExt, NodeList, Result,
};
