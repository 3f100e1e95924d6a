// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Preference entity schema.
//!
//! [`EntitySchema::build`] validates one `PreferenceEntity` declaration and
//! produces an immutable schema. Construction is fail-fast: the first error
//! aborts the entity and nothing is returned.
//!
//! # Build Steps
//!
//! ```text
//! declaration
//! │
//! ├── 1. storage name     PreferenceEntity(name) or UpperCamel(class)
//! ├── 2. key fields       KeyField::resolve per field, names unique
//! ├── 3. reserved names   no member may be put/get/contains/remove + key
//! └── 4. custom accessors public PreferenceFunction members, last per key wins
//! │
//! └── EntitySchema
//! ```

mod function;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

pub use function::{AccessorFunction, AccessorRole};

use crate::{
    declaration::{Declaration, Member},
    error::{Result, SchemaError},
    key::KeyField,
    naming::{ACCESSOR_PREFIXES, PREFERENCE_ENTITY, PREFERENCE_FUNCTION, storage_class_name},
    types::to_upper_camel
};

/// Validated preference entity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntitySchema {
    /// Enclosing package, `None` for the unnamed package.
    pub package_name:      Option<String>,
    /// Declaring class name.
    pub source_class_name: String,
    /// Logical name of the generated storage unit.
    pub storage_name:      String,
    /// Key fields in declaration order.
    pub key_fields:        Vec<KeyField>,
    /// Custom setter functions by key name.
    pub setter_overrides:  BTreeMap<String, AccessorFunction>,
    /// Custom getter functions by key name.
    pub getter_overrides:  BTreeMap<String, AccessorFunction>,
    #[cfg_attr(feature = "serde", serde(skip))]
    key_index:             BTreeMap<String, usize>
}

impl EntitySchema {
    /// Build and validate an entity schema.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::MissingName`] when the storage name is empty
    /// - [`SchemaError::UnsupportedType`] / [`SchemaError::InvalidDefaultValue`]
    ///   from key resolution
    /// - [`SchemaError::DuplicateKey`] when two fields share a key name
    /// - [`SchemaError::ReservedName`] when a member shadows an accessor
    /// - [`SchemaError::InvalidAccessorSignature`] /
    ///   [`SchemaError::UnknownKeyReference`] for bad custom accessors
    pub fn build<D: Declaration>(decl: &D) -> Result<Self> {
        let class = decl.simple_name();
        let storage_name = resolve_storage_name(decl)?;

        let mut key_fields: Vec<KeyField> = Vec::new();
        let mut key_index: BTreeMap<String, usize> = BTreeMap::new();
        for member in decl.fields() {
            let field = KeyField::resolve(class, member)?;
            if let Some(&existing) = key_index.get(&field.key_name) {
                let owner = &key_fields[existing];
                return Err(SchemaError::DuplicateKey {
                    class:      class.to_string(),
                    key:        field.key_name,
                    owner:      owner.field_name.clone(),
                    owner_type: owner.semantic_type
                });
            }
            key_index.insert(field.key_name.clone(), key_fields.len());
            key_fields.push(field);
        }

        check_reserved_names(class, decl.members(), &key_index)?;

        let mut setter_overrides: BTreeMap<String, AccessorFunction> = BTreeMap::new();
        let mut getter_overrides: BTreeMap<String, AccessorFunction> = BTreeMap::new();
        for member in decl
            .members()
            .iter()
            .filter(|m| !m.is_field() && m.annotation(PREFERENCE_FUNCTION).is_some())
        {
            if !member.is_public() {
                tracing::debug!(class, function = %member.name, "ignoring non-public custom accessor");
                continue;
            }
            let (key, role, function) = function::resolve(class, member, &key_index, &key_fields)?;
            let overrides = match role {
                AccessorRole::Setter => &mut setter_overrides,
                AccessorRole::Getter => &mut getter_overrides
            };
            if let Some(previous) = overrides.insert(key, function) {
                tracing::debug!(
                    class,
                    function = %member.name,
                    replaced = %previous.name,
                    "custom accessor replaces an earlier one"
                );
            }
        }

        tracing::debug!(
            class,
            storage = %storage_name,
            keys = key_fields.len(),
            setters = setter_overrides.len(),
            getters = getter_overrides.len(),
            "built preference entity"
        );

        Ok(Self {
            package_name: decl.package_name().map(str::to_string),
            source_class_name: class.to_string(),
            storage_name,
            key_fields,
            setter_overrides,
            getter_overrides,
            key_index
        })
    }

    /// Key field by key name.
    #[must_use]
    pub fn key_field(&self, key_name: &str) -> Option<&KeyField> {
        self.key_index.get(key_name).map(|&i| &self.key_fields[i])
    }

    /// Key names in declaration order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.key_fields.iter().map(|f| f.key_name.as_str())
    }

    /// Name of the generated storage class.
    #[must_use]
    pub fn generated_class_name(&self) -> String {
        storage_class_name(&self.storage_name)
    }

    /// Custom setter for a key, if any.
    #[must_use]
    pub fn setter_override(&self, key_name: &str) -> Option<&AccessorFunction> {
        self.setter_overrides.get(key_name)
    }

    /// Custom getter for a key, if any.
    #[must_use]
    pub fn getter_override(&self, key_name: &str) -> Option<&AccessorFunction> {
        self.getter_overrides.get(key_name)
    }
}

fn resolve_storage_name<D: Declaration>(decl: &D) -> Result<String> {
    let explicit = decl
        .annotation(PREFERENCE_ENTITY)
        .and_then(|a| a.get("name"))
        .filter(|name| !name.is_empty());
    let name = match explicit {
        Some(name) => name.to_string(),
        None => to_upper_camel(decl.simple_name())
    };

    if name.trim().is_empty() {
        return Err(SchemaError::MissingName {
            class: decl.simple_name().to_string()
        });
    }
    Ok(name)
}

// Generated accessors are named `<prefix><key>`; a member whose name splits
// that way would clash with one of them.
fn check_reserved_names(
    class: &str,
    members: &[Member],
    keys: &BTreeMap<String, usize>
) -> Result<()> {
    for member in members {
        let collision = ACCESSOR_PREFIXES
            .iter()
            .filter_map(|prefix| member.name.strip_prefix(prefix))
            .find(|rest| keys.contains_key(*rest));
        if let Some(key) = collision {
            return Err(SchemaError::ReservedName {
                class:  class.to_string(),
                member: member.name.clone(),
                key:    key.to_string()
            });
        }
    }
    Ok(())
}
