// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation errors raised while building schemas.
//!
//! Every builder in this crate returns [`Result`]. The first failure aborts
//! construction of the unit being built and is propagated unchanged; no
//! partially built schema is ever exposed.
//!
//! # Error Kinds
//!
//! | Variant | Raised by | Cause |
//! |---------|-----------|-------|
//! | `UnsupportedType` | key resolution | Declared type outside the six semantic types |
//! | `InvalidDefaultValue` | key resolution | Default text does not coerce to the key type |
//! | `MissingName` | entity builder | Resolved storage name is empty |
//! | `DuplicateKey` | entity builder | Two fields resolve to the same key name |
//! | `ReservedName` | entity builder | Member name shadows a generated accessor |
//! | `InvalidAccessorSignature` | entity builder | Custom accessor has a bad shape |
//! | `UnknownKeyReference` | entity builder | Custom accessor names a missing key |
//! | `UnresolvedInjection` | injector builder | Injected type is not in the component |
//! | `DuplicateStorageName` | processor | Two entities share a storage name |
//! | `MissingInjectionTarget` | processor | Component names an unknown target |

use thiserror::Error;

use crate::types::SemanticType;

/// Result alias used by every schema builder.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Validation failure surfaced to the developer running generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Field type is not one of the supported semantic types.
    #[error("field '{field}' in '{class}' has unsupported type '{type_name}'")]
    UnsupportedType {
        /// Owning class.
        class:     String,
        /// Field identifier.
        field:     String,
        /// Declared type descriptor.
        type_name: String
    },

    /// Default value text cannot be coerced to the key type.
    #[error("default value '{raw}' of key '{key}' in '{class}' is not a valid {type_name}")]
    InvalidDefaultValue {
        /// Owning class.
        class:     String,
        /// Resolved key name.
        key:       String,
        /// Canonical semantic type name.
        type_name: String,
        /// Raw default text.
        raw:       String
    },

    /// Storage name resolved to an empty string.
    #[error("preference entity '{class}' must specify a non-empty name")]
    MissingName {
        /// Owning class.
        class: String
    },

    /// Two key fields share the same name.
    #[error("'{key}' key is already used in '{class}' by '{owner}' of type {owner_type}")]
    DuplicateKey {
        /// Owning class.
        class:      String,
        /// Duplicated key name.
        key:        String,
        /// Field that claimed the key first.
        owner:      String,
        /// Type of the field that claimed the key first.
        owner_type: SemanticType
    },

    /// A member name collides with a generated accessor.
    #[error("cannot use member name '{member}' in '{class}', it collides with key '{key}'")]
    ReservedName {
        /// Owning class.
        class:  String,
        /// Offending member name.
        member: String,
        /// Key the member collides with.
        key:    String
    },

    /// Custom accessor has the wrong arity, types or prefix.
    #[error("custom accessor '{function}' in '{class}' is invalid: {reason}")]
    InvalidAccessorSignature {
        /// Owning class.
        class:    String,
        /// Function name.
        function: String,
        /// Human readable cause.
        reason:   String
    },

    /// Custom accessor references a key that does not exist.
    #[error("custom accessor '{function}' in '{class}' references unknown key '{key}'")]
    UnknownKeyReference {
        /// Owning class.
        class:    String,
        /// Function name.
        function: String,
        /// Referenced key name.
        key:      String
    },

    /// Injected field type is not part of the component.
    #[error("'{type_name}' type can not be injected into '{field}' of '{target}' by component '{component}'")]
    UnresolvedInjection {
        /// Owning component class.
        component: String,
        /// Injection target class.
        target:    String,
        /// Injected field.
        field:     String,
        /// Declared field type.
        type_name: String
    },

    /// Two entities resolve to the same storage name.
    #[error("preference name '{name}' is declared by both '{first}' and '{second}'")]
    DuplicateStorageName {
        /// Shared storage name.
        name:   String,
        /// First declaring class.
        first:  String,
        /// Second declaring class.
        second: String
    },

    /// Component names an injection target that was not supplied.
    #[error("component '{component}' injects into '{target}', which was not declared")]
    MissingInjectionTarget {
        /// Owning component class.
        component: String,
        /// Missing target type name.
        target:    String
    }
}
