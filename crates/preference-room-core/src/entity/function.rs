// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom accessor overrides.
//!
//! A public function tagged `PreferenceFunction(keyname = "...")` replaces
//! the value transform of the generated getter or setter for that key:
//!
//! ```text
//! @PreferenceFunction(keyname = "Nickname")
//! public String putNicknameFunction(String nickname) { ... }   // setter
//! @PreferenceFunction(keyname = "Nickname")
//! public String getNicknameFunction(String nickname) { ... }   // getter
//! ```
//!
//! The function takes exactly one parameter of the key type and returns the
//! key type. Its name selects the role: `put...` for setters, `get...` for
//! getters.

use std::collections::BTreeMap;

use crate::{
    declaration::Member,
    error::{Result, SchemaError},
    key::KeyField,
    naming::PREFERENCE_FUNCTION,
    types::SemanticType
};

/// Which generated accessor a custom function overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorRole {
    /// Wraps the value read by the getter.
    Getter,
    /// Wraps the value written by the setter.
    Setter
}

impl AccessorRole {
    fn from_name(name: &str) -> Option<Self> {
        if name.starts_with("put") {
            Some(Self::Setter)
        } else if name.starts_with("get") {
            Some(Self::Getter)
        } else {
            None
        }
    }
}

/// Validated custom accessor function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccessorFunction {
    /// Function name.
    pub name:           String,
    /// Single parameter name.
    pub parameter_name: String,
    /// Parameter and return type, equal to the key type.
    pub value_type:     SemanticType
}

/// Validate one tagged function and return the key it overrides.
pub(super) fn resolve(
    class: &str,
    member: &Member,
    keys: &BTreeMap<String, usize>,
    fields: &[KeyField]
) -> Result<(String, AccessorRole, AccessorFunction)> {
    let invalid = |reason: String| SchemaError::InvalidAccessorSignature {
        class: class.to_string(),
        function: member.name.clone(),
        reason
    };

    let key = member
        .annotation(PREFERENCE_FUNCTION)
        .and_then(|a| a.get("keyname"))
        .unwrap_or_default();
    let field = keys
        .get(key)
        .map(|&index| &fields[index])
        .ok_or_else(|| SchemaError::UnknownKeyReference {
            class:    class.to_string(),
            function: member.name.clone(),
            key:      key.to_string()
        })?;
    let expected = field.semantic_type;

    let [parameter] = member.parameters.as_slice() else {
        return Err(invalid(format!(
            "expected exactly one parameter, found {}",
            member.parameters.len()
        )));
    };
    if SemanticType::resolve(&parameter.type_name) != Some(expected) {
        return Err(invalid(format!(
            "parameter '{}' type should be {}",
            parameter.name,
            expected.primitive_name()
        )));
    }
    if SemanticType::resolve(&member.type_name) != Some(expected) {
        return Err(invalid(format!(
            "return type should be {}",
            expected.primitive_name()
        )));
    }
    let role = AccessorRole::from_name(&member.name)
        .ok_or_else(|| invalid("name should start with 'get' or 'put'".to_string()))?;

    Ok((
        field.key_name.clone(),
        role,
        AccessorFunction {
            name:           member.name.clone(),
            parameter_name: parameter.name.clone(),
            value_type:     expected
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_follows_prefix() {
        assert_eq!(AccessorRole::from_name("putName"), Some(AccessorRole::Setter));
        assert_eq!(AccessorRole::from_name("getName"), Some(AccessorRole::Getter));
        assert_eq!(AccessorRole::from_name("setName"), None);
        assert_eq!(AccessorRole::from_name("Getname"), None);
    }
}
