// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type descriptor rendering.

use quote::ToTokens;
use syn::{ReturnType, Type};

/// Render a type as a compact descriptor string.
///
/// References are peeled (`&mut MainActivity` -> `MainActivity`) except for
/// `&str`, which stays a string type. Token spacing is removed so paths read
/// `crate::prefs::Preference_User`.
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Reference(reference) => {
            if is_str(&reference.elem) {
                "&str".to_string()
            } else {
                type_name(&reference.elem)
            }
        }
        Type::Paren(inner) => type_name(&inner.elem),
        Type::Group(inner) => type_name(&inner.elem),
        other => compact(other.to_token_stream().to_string())
    }
}

/// Render a return type; the unit return is `()`.
pub fn return_type_name(output: &ReturnType) -> String {
    match output {
        ReturnType::Default => "()".to_string(),
        ReturnType::Type(_, ty) => type_name(ty)
    }
}

fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("str"))
}

fn compact(tokens: String) -> String {
    tokens.chars().filter(|c| !c.is_whitespace()).collect()
}
