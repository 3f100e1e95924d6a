// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Literal default values.
//!
//! | Syntax | Raw text | Kind |
//! |--------|----------|------|
//! | `default = "skydoves"` | `skydoves` | `Text` |
//! | `default = 42` / `default = 42i64` | `42` | `Number` |
//! | `default = -1.5` | `-1.5` | `Number` |
//! | `default = true` | `true` | `Boolean` |
//!
//! Coercion to the key type happens in the core; this only extracts text
//! and remembers whether it was quoted.

use preference_room_core::declaration::LiteralKind;
use syn::{Expr, Lit, UnOp};

/// Raw text and kind of a literal default expression.
///
/// # Errors
///
/// Returns an error spanned at `expr` when it is not a string, numeric or
/// boolean literal, optionally negated.
pub fn literal_value(expr: &Expr) -> syn::Result<(String, LiteralKind)> {
    match expr {
        Expr::Lit(lit) => lit_value(&lit.lit).ok_or_else(|| unsupported(expr)),
        Expr::Group(group) => literal_value(&group.expr),
        Expr::Paren(paren) => literal_value(&paren.expr),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match &*unary.expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Int(int) => Ok((format!("-{}", int.base10_digits()), LiteralKind::Number)),
                Lit::Float(float) => Ok((format!("-{}", float.base10_digits()), LiteralKind::Number)),
                _ => Err(unsupported(expr))
            },
            _ => Err(unsupported(expr))
        },
        _ => Err(unsupported(expr))
    }
}

fn lit_value(lit: &Lit) -> Option<(String, LiteralKind)> {
    match lit {
        Lit::Str(s) => Some((s.value(), LiteralKind::Text)),
        Lit::Int(int) => Some((int.base10_digits().to_string(), LiteralKind::Number)),
        Lit::Float(float) => Some((float.base10_digits().to_string(), LiteralKind::Number)),
        Lit::Bool(b) => Some((b.value.to_string(), LiteralKind::Boolean)),
        _ => None
    }
}

fn unsupported(expr: &Expr) -> syn::Error {
    syn::Error::new_spanned(expr, "default must be a string, number or boolean literal")
}
