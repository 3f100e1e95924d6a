// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor method plans.
//!
//! Every key field yields four methods on the generated storage class. The
//! plans below carry everything a code writer needs, including the single
//! body statement, so templating involves no further decisions.
//!
//! For key `Nickname: String = "skydoves"` and handle `preference`:
//!
//! | Method | Signature | Statement |
//! |--------|-----------|-----------|
//! | getter | `String getNickname()` | `return preference.getString("Nickname", "skydoves")` |
//! | setter | `void putNickname(String nickname)` | `preference.edit().putString("Nickname", nickname).apply()` |
//! | contains | `boolean containsNickname()` | `return preference.contains("Nickname")` |
//! | remove | `void removeNickname()` | `preference.edit().remove("Nickname").apply()` |
//!
//! Writes use the fire-and-forget `apply()` commit: nothing is returned and
//! commit failures are not reported to the caller.
//!
//! Custom accessor overrides wrap the value: a getter override becomes
//! `return getFn(<read>)`, a setter override writes `putFn(<param>)`.

use crate::{
    entity::{AccessorFunction, EntitySchema},
    key::{KeyField, quote_string},
    types::SemanticType
};

const EDIT_CALL: &str = "edit()";
const COMMIT_CALL: &str = "apply()";

/// Accessor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AccessorKind {
    /// `get<Key>`.
    Getter,
    /// `put<Key>`.
    Setter,
    /// `contains<Key>`.
    Contains,
    /// `remove<Key>`.
    Remove
}

impl AccessorKind {
    /// Method name prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Getter => "get",
            Self::Setter => "put",
            Self::Contains => "contains",
            Self::Remove => "remove"
        }
    }
}

/// Declared return of a planned method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReturnKind {
    /// Returns the key value.
    Value(SemanticType),
    /// Returns an existence flag.
    Boolean,
    /// Returns nothing.
    Void
}

/// Single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterPlan {
    /// Parameter identifier.
    pub name: String,
    /// Parameter type.
    pub ty:   SemanticType
}

/// Storage handle operation performed by the method body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StorageCall {
    /// Typed read with a default, e.g. `getInt("Visits", 0)`.
    Read {
        /// Handle method, e.g. `getInt`.
        method:   String,
        /// Preference key.
        key:      String,
        /// Rendered default literal.
        default:  String,
        /// Getter override wrapping the read value.
        wrapper:  Option<String>
    },
    /// Typed write inside an edit transaction, e.g. `putInt("Visits", visits)`.
    Write {
        /// Handle method, e.g. `putInt`.
        method:   String,
        /// Preference key.
        key:      String,
        /// Parameter holding the value.
        argument: String,
        /// Setter override wrapping the written value.
        wrapper:  Option<String>
    },
    /// Existence check.
    Contains {
        /// Preference key.
        key: String
    },
    /// Removal inside an edit transaction.
    Remove {
        /// Preference key.
        key: String
    }
}

/// Plan for one generated accessor method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccessorPlan {
    /// Operation.
    pub kind:        AccessorKind,
    /// Method name, `<prefix><key>`.
    pub method_name: String,
    /// Setter parameter.
    pub parameter:   Option<ParameterPlan>,
    /// Return kind.
    pub returns:     ReturnKind,
    /// Body operation.
    pub call:        StorageCall,
    /// Storage handle identifier.
    pub handle:      String
}

impl AccessorPlan {
    /// Render the method body statement, without a trailing semicolon.
    #[must_use]
    pub fn statement(&self) -> String {
        let h = &self.handle;
        match &self.call {
            StorageCall::Read {
                method,
                key,
                default,
                wrapper
            } => {
                let read = format!("{h}.{method}({}, {default})", quote_string(key));
                match wrapper {
                    Some(function) => format!("return {function}({read})"),
                    None => format!("return {read}")
                }
            }
            StorageCall::Write {
                method,
                key,
                argument,
                wrapper
            } => {
                let value = match wrapper {
                    Some(function) => format!("{function}({argument})"),
                    None => argument.clone()
                };
                format!(
                    "{h}.{EDIT_CALL}.{method}({}, {value}).{COMMIT_CALL}",
                    quote_string(key)
                )
            }
            StorageCall::Contains {
                key
            } => format!("return {h}.contains({})", quote_string(key)),
            StorageCall::Remove {
                key
            } => format!("{h}.{EDIT_CALL}.remove({}).{COMMIT_CALL}", quote_string(key))
        }
    }
}

/// The four accessors of one key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccessorSet {
    /// Key these accessors serve.
    pub key_name: String,
    /// `get<Key>`.
    pub getter:   AccessorPlan,
    /// `put<Key>`.
    pub setter:   AccessorPlan,
    /// `contains<Key>`.
    pub contains: AccessorPlan,
    /// `remove<Key>`.
    pub remove:   AccessorPlan
}

impl AccessorSet {
    /// Plans in emission order: getter, setter, contains, remove.
    #[must_use]
    pub fn plans(&self) -> [&AccessorPlan; 4] {
        [&self.getter, &self.setter, &self.contains, &self.remove]
    }
}

/// Plans accessor methods against one storage handle.
#[derive(Debug, Clone)]
pub struct AccessorPlanner {
    handle: String
}

impl AccessorPlanner {
    /// Planner for the storage handle named `handle`.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into()
        }
    }

    /// Plan the accessors of a key without overrides.
    #[must_use]
    pub fn plan(&self, field: &KeyField) -> AccessorSet {
        self.plan_with(field, None, None)
    }

    /// Plan every key of an entity, applying its custom accessors.
    #[must_use]
    pub fn plan_entity(&self, entity: &EntitySchema) -> Vec<AccessorSet> {
        entity
            .key_fields
            .iter()
            .map(|field| {
                self.plan_with(
                    field,
                    entity.getter_override(&field.key_name),
                    entity.setter_override(&field.key_name)
                )
            })
            .collect()
    }

    fn plan_with(
        &self,
        field: &KeyField,
        getter: Option<&AccessorFunction>,
        setter: Option<&AccessorFunction>
    ) -> AccessorSet {
        let key = &field.key_name;
        let ty = field.semantic_type;
        let suffix = ty.storage_suffix();
        let parameter = field.parameter_name();

        AccessorSet {
            key_name: key.clone(),
            getter:   self.method(AccessorKind::Getter, key, None, ReturnKind::Value(ty), StorageCall::Read {
                method:  format!("get{suffix}"),
                key:     key.clone(),
                default: field.default_value.literal(),
                wrapper: getter.map(|f| f.name.clone())
            }),
            setter:   self.method(
                AccessorKind::Setter,
                key,
                Some(ParameterPlan {
                    name: parameter.clone(),
                    ty
                }),
                ReturnKind::Void,
                StorageCall::Write {
                    method:   format!("put{suffix}"),
                    key:      key.clone(),
                    argument: parameter,
                    wrapper:  setter.map(|f| f.name.clone())
                }
            ),
            contains: self.method(AccessorKind::Contains, key, None, ReturnKind::Boolean, StorageCall::Contains {
                key: key.clone()
            }),
            remove:   self.method(AccessorKind::Remove, key, None, ReturnKind::Void, StorageCall::Remove {
                key: key.clone()
            })
        }
    }

    fn method(
        &self,
        kind: AccessorKind,
        key: &str,
        parameter: Option<ParameterPlan>,
        returns: ReturnKind,
        call: StorageCall
    ) -> AccessorPlan {
        AccessorPlan {
            kind,
            method_name: format!("{}{key}", kind.prefix()),
            parameter,
            returns,
            call,
            handle: self.handle.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::DefaultValue;

    fn key(name: &str, ty: SemanticType, default: DefaultValue) -> KeyField {
        KeyField {
            field_name: name.to_lowercase(),
            key_name: name.to_string(),
            semantic_type: ty,
            default_value: default
        }
    }

    #[test]
    fn string_key_plans() {
        let set = AccessorPlanner::new("preference").plan(&key(
            "name",
            SemanticType::String,
            DefaultValue::String("Bob".into())
        ));

        assert_eq!(set.getter.method_name, "getname");
        assert_eq!(set.getter.returns, ReturnKind::Value(SemanticType::String));
        assert_eq!(set.getter.statement(), r#"return preference.getString("name", "Bob")"#);

        assert_eq!(set.setter.method_name, "putname");
        assert_eq!(
            set.setter.parameter,
            Some(ParameterPlan {
                name: "name".into(),
                ty:   SemanticType::String
            })
        );
        assert_eq!(set.setter.returns, ReturnKind::Void);
        assert_eq!(
            set.setter.statement(),
            r#"preference.edit().putString("name", name).apply()"#
        );

        assert_eq!(set.contains.method_name, "containsname");
        assert_eq!(set.contains.returns, ReturnKind::Boolean);
        assert_eq!(set.contains.statement(), r#"return preference.contains("name")"#);

        assert_eq!(set.remove.method_name, "removename");
        assert_eq!(set.remove.statement(), r#"preference.edit().remove("name").apply()"#);
    }

    #[test]
    fn float_default_gets_suffix() {
        let set = AccessorPlanner::new("preference").plan(&key(
            "rate",
            SemanticType::Float,
            DefaultValue::Float(1.5)
        ));
        assert_eq!(set.getter.statement(), r#"return preference.getFloat("rate", 1.5f)"#);
        assert_eq!(
            set.setter.statement(),
            r#"preference.edit().putFloat("rate", rate).apply()"#
        );
    }

    #[test]
    fn other_types_render_bare_literals() {
        let planner = AccessorPlanner::new("prefs");
        let cases = [
            (SemanticType::Integer, DefaultValue::Integer(3), r#"return prefs.getInt("Key", 3)"#),
            (SemanticType::Long, DefaultValue::Long(0), r#"return prefs.getLong("Key", 0)"#),
            (SemanticType::Double, DefaultValue::Double(0.0), r#"return prefs.getDouble("Key", 0.0)"#),
            (SemanticType::Boolean, DefaultValue::Boolean(true), r#"return prefs.getBoolean("Key", true)"#)
        ];
        for (ty, default, expected) in cases {
            let set = planner.plan(&key("Key", ty, default));
            assert_eq!(set.getter.statement(), expected);
        }
    }

    #[test]
    fn setter_parameter_is_lower_cased() {
        let set = AccessorPlanner::new("preference").plan(&key(
            "UserName",
            SemanticType::String,
            DefaultValue::String(String::new())
        ));
        assert_eq!(set.setter.method_name, "putUserName");
        assert_eq!(set.setter.parameter.as_ref().map(|p| p.name.as_str()), Some("username"));
        assert_eq!(set.getter.statement(), r#"return preference.getString("UserName", "")"#);
    }

    #[test]
    fn plans_are_ordered() {
        let set = AccessorPlanner::new("p").plan(&key(
            "k",
            SemanticType::Boolean,
            DefaultValue::Boolean(false)
        ));
        let kinds: Vec<_> = set.plans().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [
                AccessorKind::Getter,
                AccessorKind::Setter,
                AccessorKind::Contains,
                AccessorKind::Remove
            ]
        );
    }
}
