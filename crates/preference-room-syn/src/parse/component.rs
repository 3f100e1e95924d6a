// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Component attribute parsing.
//!
//! Components are traits (or structs) tagged with
//! `#[preference_component(...)]`. Every option becomes one raw annotation
//! value, so the core can split and merge them:
//!
//! ```rust,ignore
//! #[preference_component(entities(UserProfile, Settings))]
//! #[preference_component(entities = "Settings,Device")]
//! pub trait AppComponent {
//!     fn inject(&self, target: &mut MainActivity);
//! }
//! ```
//!
//! A list form `entities(A, B)` is joined to `"A,B"`; a string form is kept
//! verbatim.

use preference_room_core::{declaration::Annotation, naming::PREFERENCE_COMPONENT};
use syn::{Attribute, LitStr, Token};

/// Whether the attributes mark a component.
pub fn is_component(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| attr.path().is_ident("preference_component"))
}

/// Merge every `#[preference_component(...)]` into one annotation.
///
/// # Errors
///
/// Returns an error when an option is neither `name = "..."` nor
/// `name(Path, ...)`.
pub fn component_annotation(attrs: &[Attribute]) -> syn::Result<Annotation> {
    let mut annotation = Annotation::new(PREFERENCE_COMPONENT);
    for attr in attrs
        .iter()
        .filter(|attr| attr.path().is_ident("preference_component"))
    {
        attr.parse_nested_meta(|meta| {
            let attribute = path_name(&meta.path);
            if meta.input.peek(Token![=]) {
                let value: LitStr = meta.value()?.parse()?;
                annotation.values.push((attribute, value.value()));
            } else {
                let mut names = Vec::new();
                meta.parse_nested_meta(|entity| {
                    names.push(path_name(&entity.path));
                    Ok(())
                })?;
                annotation.values.push((attribute, names.join(",")));
            }
            Ok(())
        })?;
    }
    Ok(annotation)
}

fn path_name(path: &syn::Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}
