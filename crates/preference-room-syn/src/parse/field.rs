// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Field attributes use manual parsing, like other marker-style
//! attributes:
//!
//! ```rust,ignore
//! #[preference(key = "Nickname", default = "skydoves")]
//! nickname: String,
//!
//! #[preference(default = -1)]
//! visits: i32,
//!
//! #[inject_preference]
//! profile: Preference_UserProfile,
//! ```
//!
//! | Attribute | Annotation | Effect |
//! |-----------|------------|--------|
//! | `preference(key = ...)` | `KeyName(name)` | Overrides the key name |
//! | `preference(default = ...)` | initializer | Declared default value |
//! | `inject_preference` | `InjectPreference` | Marks an injected field |

use preference_room_core::{
    declaration::{Annotation, LiteralKind, Member, Modifier},
    naming::{INJECT_PREFERENCE, KEY_NAME}
};
use syn::{Attribute, Expr, Field, LitStr, Visibility};

use super::{literal::literal_value, ty::type_name};

/// Parsed `#[preference(...)]` options.
#[derive(Debug, Default)]
struct KeyOptions {
    key:     Option<String>,
    default: Option<(String, LiteralKind)>
}

impl KeyOptions {
    fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut options = Self::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                options.key = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("default") {
                let expr: Expr = meta.value()?.parse()?;
                options.default = Some(literal_value(&expr)?);
                Ok(())
            } else {
                Err(meta.error("expected `key` or `default`"))
            }
        })?;
        Ok(options)
    }
}

/// Whether a field carries `#[inject_preference]`.
pub fn is_injected(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("inject_preference"))
}

/// Convert a named struct field into a field member.
///
/// # Errors
///
/// Returns an error for unnamed fields and malformed `#[preference]`
/// attributes.
pub fn field_member(field: &Field) -> darling::Result<Member> {
    let ident = field.ident.as_ref().ok_or_else(|| {
        darling::Error::custom("preference fields must be named").with_span(field)
    })?;

    let mut member = Member::field(ident.to_string(), type_name(&field.ty));
    if matches!(field.vis, Visibility::Public(_)) {
        member = member.public();
    } else {
        member = member.with_modifier(Modifier::Private);
    }

    for attr in &field.attrs {
        if attr.path().is_ident("preference") {
            let options = KeyOptions::from_attr(attr)?;
            if let Some(key) = options.key {
                member = member.annotated(Annotation::new(KEY_NAME).with("name", key));
            }
            if let Some((default, kind)) = options.default {
                member = member.initialized_as(default, kind);
            }
        } else if attr.path().is_ident("inject_preference") {
            member = member.annotated(Annotation::new(INJECT_PREFERENCE));
        }
    }

    Ok(member)
}

#[cfg(test)]
mod tests {
    use syn::ItemStruct;

    use super::*;

    fn fields(item: ItemStruct) -> Vec<darling::Result<Member>> {
        item.fields.iter().map(field_member).collect()
    }

    #[test]
    fn key_and_default() {
        let item: ItemStruct = syn::parse_quote! {
            struct UserProfile {
                #[preference(key = "Nickname", default = "skydoves")]
                pub nickname: String,
                #[preference(default = -1)]
                visits: i32,
                rate: f32,
            }
        };
        let members: Vec<_> = fields(item).into_iter().map(Result::unwrap).collect();

        assert_eq!(members[0].name, "nickname");
        assert_eq!(members[0].type_name, "String");
        assert!(members[0].is_public());
        assert_eq!(
            members[0].annotation(KEY_NAME).and_then(|a| a.get("name")),
            Some("Nickname")
        );
        assert_eq!(members[0].initializer.as_deref(), Some("skydoves"));

        assert_eq!(members[0].initializer_kind, Some(LiteralKind::Text));
        assert_eq!(members[1].initializer.as_deref(), Some("-1"));
        assert_eq!(members[1].initializer_kind, Some(LiteralKind::Number));
        assert!(!members[1].is_public());
        assert!(members[1].annotation(KEY_NAME).is_none());

        assert_eq!(members[2].initializer, None);
    }

    #[test]
    fn inject_marker() {
        let item: ItemStruct = syn::parse_quote! {
            struct MainActivity {
                #[inject_preference]
                profile: Preference_UserProfile,
                title: String,
            }
        };
        assert!(is_injected(item.fields.iter().next().unwrap()));
        let members: Vec<_> = fields(item).into_iter().map(Result::unwrap).collect();
        assert!(members[0].annotation(INJECT_PREFERENCE).is_some());
        assert!(members[1].annotation(INJECT_PREFERENCE).is_none());
    }

    #[test]
    fn unknown_option_is_rejected() {
        let item: ItemStruct = syn::parse_quote! {
            struct UserProfile {
                #[preference(rename = "x")]
                nickname: String,
            }
        };
        assert!(fields(item).remove(0).is_err());
    }

    #[test]
    fn non_literal_default_is_rejected() {
        let item: ItemStruct = syn::parse_quote! {
            struct UserProfile {
                #[preference(default = some_call())]
                nickname: String,
            }
        };
        assert!(fields(item).remove(0).is_err());
    }

    #[test]
    fn tuple_fields_are_rejected() {
        let item: ItemStruct = syn::parse_quote! {
            struct Tuple(String);
        };
        assert!(fields(item).remove(0).is_err());
    }
}
