// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read-only view of annotated class declarations.
//!
//! The schema builders never walk source code themselves. A declaration
//! provider (for example `preference-room-syn`) turns its input into values
//! implementing [`Declaration`], and the builders only read through that
//! trait.
//!
//! # Model
//!
//! ```text
//! Declaration (class)
//! ├── simple_name     "UserProfile"
//! ├── package_name    Some("com.example") | None
//! ├── annotations[]   Annotation { name, values[(attribute, raw)] }
//! └── members[]       Member
//!     ├── name, kind (Field | Method)
//!     ├── type_name   field type or method return type
//!     ├── modifiers   Public | Private | Static
//!     ├── annotations[]
//!     ├── parameters[] Parameter { name, type_name }
//!     └── initializer raw constant text, unquoted, with an optional
//!                     LiteralKind when the provider knows it
//! ```
//!
//! [`ClassDeclaration`] is the owned implementation every provider in this
//! workspace produces. Its builder methods also make test fixtures short:
//!
//! ```rust
//! use preference_room_core::declaration::{Annotation, ClassDeclaration, Member};
//!
//! let decl = ClassDeclaration::new("UserProfile")
//!     .in_package("com.example")
//!     .annotated(Annotation::new("PreferenceEntity").with("name", "Profile"))
//!     .member(Member::field("nickname", "String").initialized("skydoves"));
//! assert_eq!(decl.members.len(), 1);
//! ```

/// Whether a member is a field or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Data member.
    Field,
    /// Function member.
    Method
}

/// Member modifier relevant to schema extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Visible outside the declaring class.
    Public,
    /// Hidden outside the declaring class.
    Private,
    /// Not bound to an instance.
    Static
}

/// Syntactic kind of a constant initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Quoted text.
    Text,
    /// Integer or floating literal.
    Number,
    /// `true` or `false`.
    Boolean
}

/// One annotation attached to a class or member.
///
/// Attribute values are kept as raw strings in declaration order.
/// Multi-valued attributes arrive comma-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Canonical annotation name, e.g. `PreferenceEntity`.
    pub name:   String,
    /// `(attribute, raw value)` pairs.
    pub values: Vec<(String, String)>
}

impl Annotation {
    /// Create an annotation without attribute values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            values: Vec::new()
        }
    }

    /// Append an attribute value.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((attribute.into(), value.into()));
        self
    }

    /// First raw value of `attribute`, if present.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value.as_str())
    }
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter identifier.
    pub name:      String,
    /// Declared type descriptor.
    pub type_name: String
}

impl Parameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            type_name: type_name.into()
        }
    }
}

/// A field or function enclosed by a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member identifier.
    pub name:        String,
    /// Field or method.
    pub kind:        MemberKind,
    /// Field type, or return type for methods.
    pub type_name:   String,
    /// Declared modifiers.
    pub modifiers:   Vec<Modifier>,
    /// Attached annotations.
    pub annotations: Vec<Annotation>,
    /// Method parameters; always empty for fields.
    pub parameters:  Vec<Parameter>,
    /// Constant initializer text for fields, unquoted.
    pub initializer: Option<String>,
    /// Kind of the initializer literal, `None` when unknown.
    pub initializer_kind: Option<LiteralKind>
}

impl Member {
    /// Create a private field.
    #[must_use]
    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_kind(name, MemberKind::Field, type_name)
    }

    /// Create a private method returning `return_type`.
    #[must_use]
    pub fn method(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self::with_kind(name, MemberKind::Method, return_type)
    }

    fn with_kind(name: impl Into<String>, kind: MemberKind, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: type_name.into(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            parameters: Vec::new(),
            initializer: None,
            initializer_kind: None
        }
    }

    /// Add a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    /// Mark the member public.
    #[must_use]
    pub fn public(self) -> Self {
        self.with_modifier(Modifier::Public)
    }

    /// Attach an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, type_name));
        self
    }

    /// Set the constant initializer text.
    #[must_use]
    pub fn initialized(mut self, raw: impl Into<String>) -> Self {
        self.initializer = Some(raw.into());
        self
    }

    /// Set the constant initializer text together with its literal kind.
    #[must_use]
    pub fn initialized_as(mut self, raw: impl Into<String>, kind: LiteralKind) -> Self {
        self.initializer = Some(raw.into());
        self.initializer_kind = Some(kind);
        self
    }

    /// Whether this member is a field.
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    /// Whether this member is declared public.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers.contains(&Modifier::Public)
    }

    /// Annotation with the given name, if attached.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

/// Capability interface over one annotated class declaration.
///
/// Implementations must be pure views: repeated calls return the same data
/// and nothing is mutated by the builders.
pub trait Declaration {
    /// Simple (unqualified) class name.
    fn simple_name(&self) -> &str;

    /// Enclosing package, or `None` for the unnamed package.
    fn package_name(&self) -> Option<&str>;

    /// Annotations attached to the class.
    fn annotations(&self) -> &[Annotation];

    /// Enclosed members in declaration order.
    fn members(&self) -> &[Member];

    /// Class annotation with the given name, if attached.
    fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.name == name)
    }

    /// Field members in declaration order.
    fn fields(&self) -> impl Iterator<Item = &Member> {
        self.members().iter().filter(|m| m.is_field())
    }
}

/// Owned class declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// Simple class name.
    pub name:        String,
    /// Enclosing package.
    pub package:     Option<String>,
    /// Class annotations.
    pub annotations: Vec<Annotation>,
    /// Enclosed members.
    pub members:     Vec<Member>
}

impl ClassDeclaration {
    /// Create an empty declaration in the unnamed package.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Place the declaration in a package.
    #[must_use]
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Attach a class annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a member.
    #[must_use]
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

impl Declaration for ClassDeclaration {
    fn simple_name(&self) -> &str {
        &self.name
    }

    fn package_name(&self) -> Option<&str> {
        self.package.as_deref()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn members(&self) -> &[Member] {
        &self.members
    }
}
