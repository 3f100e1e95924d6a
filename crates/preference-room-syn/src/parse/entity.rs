// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | UpperCamel of the struct name | Storage name |
//!
//! ```rust,ignore
//! #[preference_entity]                      // storage name "UserProfile"
//! pub struct UserProfile { /* ... */ }
//!
//! #[preference_entity(name = "Device")]     // storage name "Device"
//! pub struct DeviceSettings { /* ... */ }
//! ```

use darling::FromMeta;
use preference_room_core::{declaration::Annotation, naming::PREFERENCE_ENTITY};
use syn::{Attribute, Meta};

/// Options of `#[preference_entity(...)]`.
#[derive(Debug, Default, FromMeta)]
struct EntityAttrs {
    /// Explicit storage name.
    #[darling(default)]
    name: Option<String>
}

/// Whether the attributes mark an entity.
pub fn is_entity(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("preference_entity"))
}

/// Build the `PreferenceEntity` annotation from struct attributes.
///
/// The bare form `#[preference_entity]` carries no options.
///
/// # Errors
///
/// Returns an error for unknown or malformed options.
pub fn entity_annotation(attrs: &[Attribute]) -> darling::Result<Option<Annotation>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("preference_entity")) else {
        return Ok(None);
    };

    let options = match &attr.meta {
        Meta::Path(_) => EntityAttrs::default(),
        meta => EntityAttrs::from_meta(meta)?
    };

    let mut annotation = Annotation::new(PREFERENCE_ENTITY);
    if let Some(name) = options.name {
        annotation = annotation.with("name", name);
    }
    Ok(Some(annotation))
}
