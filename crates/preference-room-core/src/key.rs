// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Key field resolution.
//!
//! Turns one field member into a [`KeyField`]:
//!
//! 1. Semantic type from the declared type descriptor
//!    ([`SchemaError::UnsupportedType`] when outside the closed set).
//! 2. Key name from `KeyName(name = ...)`, falling back to the field
//!    identifier.
//! 3. Default value from the constant initializer coerced to the semantic
//!    type, falling back to the type's zero value.
//!
//! # Default Coercion
//!
//! | Type | Accepted text | Example |
//! |------|---------------|---------|
//! | String | anything, verbatim | `skydoves` |
//! | Integer | `i32` | `-12` |
//! | Long | `i64`, optional `L` suffix | `42L` |
//! | Float | finite `f32`, optional `f` suffix | `1.5f` |
//! | Double | finite `f64`, optional `d` suffix | `2.25` |
//! | Boolean | `true` / `false` | `true` |

use std::fmt;

use crate::{
    declaration::{LiteralKind, Member},
    error::{Result, SchemaError},
    naming::KEY_NAME,
    types::SemanticType
};

/// Typed default value of a key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DefaultValue {
    /// Text default.
    String(String),
    /// 32-bit integer default.
    Integer(i32),
    /// 64-bit integer default.
    Long(i64),
    /// 32-bit float default.
    Float(f32),
    /// 64-bit float default.
    Double(f64),
    /// Boolean default.
    Boolean(bool)
}

impl DefaultValue {
    /// Zero value of a semantic type.
    #[must_use]
    pub fn zero(ty: SemanticType) -> Self {
        match ty {
            SemanticType::String => Self::String(String::new()),
            SemanticType::Integer => Self::Integer(0),
            SemanticType::Long => Self::Long(0),
            SemanticType::Float => Self::Float(0.0),
            SemanticType::Double => Self::Double(0.0),
            SemanticType::Boolean => Self::Boolean(false)
        }
    }

    /// Coerce raw initializer text to `ty`.
    ///
    /// Returns `None` when the text is not a valid literal of `ty`.
    #[must_use]
    pub fn parse(ty: SemanticType, raw: &str) -> Option<Self> {
        if ty == SemanticType::String {
            return Some(Self::String(raw.to_string()));
        }

        let text = raw.trim();
        match ty {
            SemanticType::String => None,
            SemanticType::Integer => text.parse().ok().map(Self::Integer),
            SemanticType::Long => strip_suffix(text, ['L', 'l'])
                .parse()
                .ok()
                .map(Self::Long),
            SemanticType::Float => strip_suffix(text, ['F', 'f'])
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Float),
            SemanticType::Double => strip_suffix(text, ['D', 'd'])
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Double),
            SemanticType::Boolean => text.parse().ok().map(Self::Boolean)
        }
    }

    /// Semantic type of this value.
    #[must_use]
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Self::String(_) => SemanticType::String,
            Self::Integer(_) => SemanticType::Integer,
            Self::Long(_) => SemanticType::Long,
            Self::Float(_) => SemanticType::Float,
            Self::Double(_) => SemanticType::Double,
            Self::Boolean(_) => SemanticType::Boolean
        }
    }

    /// Source literal for generated code.
    ///
    /// Strings are quoted and escaped, floats carry an `f` suffix, every
    /// other value renders bare. Floating values always keep a fractional
    /// part so `0` never reads as an integer literal.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::String(s) => quote_string(s),
            Self::Integer(v) => v.to_string(),
            Self::Long(v) => v.to_string(),
            Self::Float(v) => format!("{}f", with_fraction(v.to_string())),
            Self::Double(v) => with_fraction(v.to_string()),
            Self::Boolean(v) => v.to_string()
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal())
    }
}

fn strip_suffix(text: &str, suffixes: [char; 2]) -> &str {
    text.strip_suffix(suffixes).unwrap_or(text)
}

fn with_fraction(mut number: String) -> String {
    if !number.contains(['.', 'e', 'E']) {
        number.push_str(".0");
    }
    number
}

/// Quote and escape text as a string literal.
#[must_use]
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other)
        }
    }
    out.push('"');
    out
}

/// One resolved preference entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyField {
    /// Declaring field identifier.
    pub field_name:    String,
    /// Logical key, unique within the owning entity.
    pub key_name:      String,
    /// Value type.
    pub semantic_type: SemanticType,
    /// Declared or zero default.
    pub default_value: DefaultValue
}

impl KeyField {
    /// Resolve a key field from a field member of `class`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::UnsupportedType`] for types outside the closed set
    /// - [`SchemaError::InvalidDefaultValue`] for initializers that do not
    ///   coerce to the resolved type, or whose known literal kind does not
    ///   match it (quoted text only for `String` keys)
    pub fn resolve(class: &str, member: &Member) -> Result<Self> {
        let semantic_type = SemanticType::resolve(&member.type_name).ok_or_else(|| {
            SchemaError::UnsupportedType {
                class:     class.to_string(),
                field:     member.name.clone(),
                type_name: member.type_name.clone()
            }
        })?;

        let key_name = member
            .annotation(KEY_NAME)
            .and_then(|a| a.get("name"))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&member.name)
            .to_string();

        let default_value = match &member.initializer {
            Some(raw) => {
                let kind_fits = member
                    .initializer_kind
                    .is_none_or(|kind| (kind == LiteralKind::Text) == (semantic_type == SemanticType::String));
                kind_fits
                    .then(|| DefaultValue::parse(semantic_type, raw))
                    .flatten()
                    .ok_or_else(|| SchemaError::InvalidDefaultValue {
                        class:     class.to_string(),
                        key:       key_name.clone(),
                        type_name: semantic_type.to_string(),
                        raw:       raw.clone()
                    })?
            }
            None => DefaultValue::zero(semantic_type)
        };

        tracing::trace!(
            class,
            key = %key_name,
            ty = %semantic_type,
            default = %default_value,
            "resolved key field"
        );

        Ok(Self {
            field_name: member.name.clone(),
            key_name,
            semantic_type,
            default_value
        })
    }

    /// Lower-cased key name, used as the setter parameter.
    #[must_use]
    pub fn parameter_name(&self) -> String {
        self.key_name.to_lowercase()
    }
}
