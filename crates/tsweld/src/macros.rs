/// Accessors for the `base` field every element carries.
macro_rules! node_base {
    () => {
        fn base(&self) -> &tsweld_core::NodeBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut tsweld_core::NodeBase {
            &mut self.base
        }
    };
}

/// Opt a `Declarative` element into the merge engine.
macro_rules! mergeable {
    () => {
        fn as_mergeable(&self) -> Option<&dyn tsweld_core::Mergeable> {
            Some(self)
        }

        fn as_mergeable_mut(&mut self) -> Option<&mut dyn tsweld_core::Mergeable> {
            Some(self)
        }
    };
}

/// Content builders shared by every element that owns a `body`.
macro_rules! body_builders {
    () => {
        /// Append a node to the body.
        pub fn content(mut self, node: impl tsweld_core::Node) -> Self {
            self.body.push(node);
            self
        }

        /// Append a raw line of code to the body.
        pub fn statement(self, code: impl Into<String>) -> Self {
            self.content(tsweld_core::Literal::new(code))
        }

        /// Append a `// ` line comment to the body.
        pub fn comment(self, text: &str) -> Self {
            self.content(tsweld_core::Literal::new(format!("// {text}")))
        }

        pub fn content_policy(mut self, policy: tsweld_core::ContentPolicy) -> Self {
            self.body.set_policy(policy);
            self
        }

        /// Skip incoming content already present when a duplicate is merged.
        pub fn drop_equal_on_merge(self) -> Self {
            self.content_policy(tsweld_core::ContentPolicy::DropEqual)
        }
    };
}

/// `Container` accessors for a struct with a `body` field.
macro_rules! container {
    ($ty:ty) => {
        impl tsweld_core::Container for $ty {
            fn body(&self) -> &tsweld_core::Body {
                &self.body
            }

            fn body_mut(&mut self) -> &mut tsweld_core::Body {
                &mut self.body
            }
        }
    };
}

/// Builders for elements carrying a `signature: Signature` field.
macro_rules! signature_builders {
    () => {
        pub fn modifier(mut self, keyword: impl Into<String>) -> Self {
            self.signature.modifiers.insert(keyword);
            self
        }

        pub fn export(self) -> Self {
            self.modifier($crate::modifiers::EXPORT)
        }

        pub fn param(mut self, parameter: $crate::signature::Parameter) -> Self {
            self.signature.params.push(parameter);
            self
        }

        pub fn string_param(self, name: impl Into<String>) -> Self {
            self.param($crate::signature::Parameter::string(name))
        }

        pub fn number_param(self, name: impl Into<String>) -> Self {
            self.param($crate::signature::Parameter::number(name))
        }

        pub fn custom_param(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
            self.param($crate::signature::Parameter::custom(name, ty))
        }

        /// Add a variant to the return type union.
        pub fn returns(mut self, ty: impl tsweld_core::Node) -> Self {
            self.signature.returns.push(ty);
            self
        }

        pub fn returns_boxed(mut self, ty: Box<dyn tsweld_core::Node>) -> Self {
            self.signature.returns.push_boxed(ty);
            self
        }

        /// Add a named return type such as `Distance`.
        pub fn returns_type(self, name: impl Into<String>) -> Self {
            self.returns($crate::types::SimpleType::new(name))
        }

        /// Add or remove `undefined` from the return type union.
        pub fn optional(mut self, optional: bool) -> Self {
            self.signature.returns.set_optional(optional);
            self
        }

        /// Turn this callable into a `get` accessor.
        pub fn getter(self) -> Self {
            self.modifier($crate::modifiers::GET)
        }

        /// Turn this callable into a `set` accessor.
        pub fn setter(self) -> Self {
            self.modifier($crate::modifiers::SET)
        }

        pub fn is_getter(&self) -> bool {
            self.signature.modifiers.is_getter()
        }

        pub fn is_setter(&self) -> bool {
            self.signature.modifiers.is_setter()
        }

        pub fn name(&self) -> &str {
            &self.signature.name
        }

        pub fn signature(&self) -> &$crate::signature::Signature {
            &self.signature
        }
    };
}
