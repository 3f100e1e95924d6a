// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic types and type-name normalization.
//!
//! Raw type descriptors come from the declaration provider in whatever
//! spelling the source used. [`SemanticType::resolve`] maps them onto the
//! closed set of six storable types.
//!
//! | Semantic | Accepted spellings | Storage suffix | Zero |
//! |----------|--------------------|----------------|------|
//! | `String` | `String`, `java.lang.String`, `&str`, `std::string::String` | `String` | `""` |
//! | `Integer` | `int`, `Integer`, `i32` | `Int` | `0` |
//! | `Long` | `long`, `Long`, `i64` | `Long` | `0L` |
//! | `Float` | `float`, `Float`, `f32` | `Float` | `0.0f` |
//! | `Double` | `double`, `Double`, `f64` | `Double` | `0.0` |
//! | `Boolean` | `boolean`, `Boolean`, `bool` | `Boolean` | `false` |

use std::fmt;

use convert_case::{Case, Casing};

/// One of the six value types a preference key may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SemanticType {
    /// Text value.
    String,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Boolean flag.
    Boolean
}

impl SemanticType {
    /// All semantic types in canonical order.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean
    ];

    /// Resolve a raw type descriptor.
    ///
    /// Whitespace is ignored and qualified names are reduced to their last
    /// segment before matching. Returns `None` for anything outside the
    /// closed set.
    #[must_use]
    pub fn resolve(descriptor: &str) -> Option<Self> {
        let compact: String = descriptor.chars().filter(|c| !c.is_whitespace()).collect();
        let simple = match compact.as_str() {
            "&str" | "&'staticstr" => return Some(Self::String),
            other => simple_type_name(other)
        };

        match simple {
            "String" => Some(Self::String),
            "int" | "Integer" | "i32" => Some(Self::Integer),
            "long" | "Long" | "i64" => Some(Self::Long),
            "float" | "Float" | "f32" => Some(Self::Float),
            "double" | "Double" | "f64" => Some(Self::Double),
            "boolean" | "Boolean" | "bool" => Some(Self::Boolean),
            _ => None
        }
    }

    /// Canonical name (`String`, `Integer`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean"
        }
    }

    /// Type name used in generated signatures.
    #[must_use]
    pub const fn primitive_name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean"
        }
    }

    /// Suffix of the typed storage calls (`get<Suffix>`, `put<Suffix>`).
    #[must_use]
    pub fn storage_suffix(self) -> String {
        to_upper_camel(self.primitive_name())
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Last path segment of a qualified type name.
///
/// Both `.` and `::` separators are understood. Names without a separator
/// are returned unchanged.
///
/// ```rust
/// use preference_room_core::types::simple_type_name;
///
/// assert_eq!(simple_type_name("com.example.Preference_User"), "Preference_User");
/// assert_eq!(simple_type_name("crate::prefs::Preference_User"), "Preference_User");
/// assert_eq!(simple_type_name("Preference_User"), "Preference_User");
/// ```
#[must_use]
pub fn simple_type_name(descriptor: &str) -> &str {
    let descriptor = descriptor.trim();
    let after_path = descriptor.rsplit("::").next().unwrap_or(descriptor);
    after_path.rsplit('.').next().unwrap_or(after_path)
}

/// Upper camel case (`user_profile` -> `UserProfile`).
#[must_use]
pub fn to_upper_camel(name: &str) -> String {
    name.to_case(Case::Pascal)
}
