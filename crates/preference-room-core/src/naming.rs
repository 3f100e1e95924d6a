// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation names and generated-class naming conventions.
//!
//! Generated classes are named by prefixing a fixed marker:
//!
//! | Source | Generated class |
//! |--------|-----------------|
//! | entity with storage name `UserProfile` | `Preference_UserProfile` |
//! | component `AppComponent` | `PreferenceComponent_AppComponent` |
//! | injection target `MainActivity` | `Injector_MainActivity` |
//!
//! Injected fields are declared with the generated storage class type, so
//! the injector recovers the entity name with [`strip_storage_prefix`].

use crate::types::simple_type_name;

/// Marks a class as a preference entity. Attribute: `name`.
pub const PREFERENCE_ENTITY: &str = "PreferenceEntity";

/// Overrides the key name of a field. Attribute: `name`.
pub const KEY_NAME: &str = "KeyName";

/// Marks a function as a custom accessor. Attribute: `keyname`.
pub const PREFERENCE_FUNCTION: &str = "PreferenceFunction";

/// Marks a class as a component. Any attribute carries entity names.
pub const PREFERENCE_COMPONENT: &str = "PreferenceComponent";

/// Marks a field of an injection target.
pub const INJECT_PREFERENCE: &str = "InjectPreference";

/// Prefix of generated storage classes.
pub const STORAGE_PREFIX: &str = "Preference_";

/// Prefix of generated component classes.
pub const COMPONENT_PREFIX: &str = "PreferenceComponent_";

/// Prefix of generated injector classes.
pub const INJECTOR_PREFIX: &str = "Injector_";

/// Variable holding the injection target inside generated injectors.
pub const INJECT_OBJECT: &str = "injectObject";

/// Accessor prefixes reserved for generated methods.
pub const ACCESSOR_PREFIXES: [&str; 4] = ["put", "get", "contains", "remove"];

/// Generated storage class for a storage name.
#[must_use]
pub fn storage_class_name(storage_name: &str) -> String {
    format!("{STORAGE_PREFIX}{storage_name}")
}

/// Generated component class for a component class name.
#[must_use]
pub fn component_class_name(component: &str) -> String {
    format!("{COMPONENT_PREFIX}{component}")
}

/// Generated injector class for an injection target.
#[must_use]
pub fn injector_class_name(target: &str) -> String {
    format!("{INJECTOR_PREFIX}{target}")
}

/// Recover the entity name from a generated storage class type.
///
/// The descriptor is reduced to its simple name first. Returns `None` when
/// the simple name does not start with [`STORAGE_PREFIX`] or nothing follows
/// the prefix.
///
/// ```rust
/// use preference_room_core::naming::strip_storage_prefix;
///
/// assert_eq!(strip_storage_prefix("Preference_UserProfile"), Some("UserProfile"));
/// assert_eq!(strip_storage_prefix("com.app.Preference_Settings"), Some("Settings"));
/// assert_eq!(strip_storage_prefix("UserProfile"), None);
/// ```
#[must_use]
pub fn strip_storage_prefix(type_name: &str) -> Option<&str> {
    simple_type_name(type_name)
        .strip_prefix(STORAGE_PREFIX)
        .filter(|rest| !rest.is_empty())
}
