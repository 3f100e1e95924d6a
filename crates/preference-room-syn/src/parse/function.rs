// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method members and custom accessor attributes.
//!
//! Methods come from inherent `impl` blocks of entities and targets, and
//! from the items of component traits. A custom accessor is tagged with
//! `#[preference_function(key = "...")]`, parsed with darling:
//!
//! ```rust,ignore
//! impl UserProfile {
//!     #[preference_function(key = "Nickname")]
//!     pub fn put_nickname_function(nickname: String) -> String {
//!         format!("{nickname}!")
//!     }
//! }
//! ```

use darling::FromMeta;
use preference_room_core::{
    declaration::{Annotation, Member, Modifier},
    naming::PREFERENCE_FUNCTION
};
use quote::ToTokens;
use syn::{Attribute, FnArg, Pat, Signature};

use super::ty::{return_type_name, type_name};

/// Options of `#[preference_function(...)]`.
#[derive(Debug, FromMeta)]
struct FunctionAttrs {
    /// Key whose accessor the function overrides.
    key: String
}

/// Convert a function signature into a method member.
///
/// `public` reflects the item visibility; trait items are always public.
/// Functions without a receiver are marked [`Modifier::Static`].
///
/// # Errors
///
/// Returns an error for malformed `#[preference_function]` attributes.
pub fn method_member(sig: &Signature, attrs: &[Attribute], public: bool) -> darling::Result<Member> {
    let mut member = Member::method(sig.ident.to_string(), return_type_name(&sig.output));
    member = if public {
        member.public()
    } else {
        member.with_modifier(Modifier::Private)
    };

    let mut has_receiver = false;
    for input in &sig.inputs {
        match input {
            FnArg::Receiver(_) => has_receiver = true,
            FnArg::Typed(typed) => {
                let name = match &*typed.pat {
                    Pat::Ident(ident) => ident.ident.to_string(),
                    other => other.to_token_stream().to_string()
                };
                member = member.param(name, type_name(&typed.ty));
            }
        }
    }
    if !has_receiver {
        member = member.with_modifier(Modifier::Static);
    }

    let mut errors = darling::Error::accumulator();
    for attr in attrs
        .iter()
        .filter(|attr| attr.path().is_ident("preference_function"))
    {
        if let Some(options) = errors.handle(FunctionAttrs::from_meta(&attr.meta)) {
            member = member.annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", options.key));
        }
    }
    errors.finish_with(member)
}
