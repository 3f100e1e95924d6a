// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust source declaration provider for preference-room.
//!
//! Reads Rust source with preference attributes and produces the
//! [`ClassDeclaration`](preference_room_core::ClassDeclaration)s that the
//! core builders consume.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[preference_entity(name = "Profile")]     // name optional
//! pub struct UserProfile {
//!     #[preference(key = "Nickname", default = "skydoves")]
//!     nickname: String,
//!     #[preference(default = 3)]
//!     visits: i32,
//!     login: bool,
//! }
//!
//! impl UserProfile {
//!     #[preference_function(key = "Nickname")]
//!     pub fn put_nickname_function(nickname: String) -> String {
//!         nickname.trim().to_string()
//!     }
//! }
//!
//! #[preference_component(entities(UserProfile))]
//! pub trait AppComponent {
//!     fn inject(&self, target: &mut MainActivity);
//! }
//!
//! pub struct MainActivity {
//!     #[inject_preference]
//!     profile: Preference_UserProfile,
//! }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use preference_room_core::Processor;
//!
//! let source = r#"
//!     #[preference_entity]
//!     pub struct Settings {
//!         #[preference(default = true)]
//!         dark_mode: bool,
//!     }
//! "#;
//!
//! let found = preference_room_syn::parse_str(source, Some("app"))?;
//! let plan = found.process(&Processor::default()).expect("valid schema");
//! let settings = plan.entity("Settings").expect("entity");
//! assert_eq!(
//!     settings.accessors[0].getter.statement(),
//!     r#"return preference.getBoolean("dark_mode", true)"#
//! );
//! # Ok::<(), darling::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod parse;
mod source;

use proc_macro2::TokenStream;
pub use source::SourceDeclarations;

/// Parse Rust source text.
///
/// `package` is the package of top-level items; inline modules extend it
/// with `::name`.
///
/// # Errors
///
/// Returns every syntax and attribute error found in the file.
pub fn parse_str(source: &str, package: Option<&str>) -> darling::Result<SourceDeclarations> {
    let file = syn::parse_file(source)?;
    from_file(&file, package)
}

/// Parse a token stream holding the items of one file.
///
/// # Errors
///
/// Returns every syntax and attribute error found in the tokens.
pub fn parse_tokens(tokens: TokenStream, package: Option<&str>) -> darling::Result<SourceDeclarations> {
    let file: syn::File = syn::parse2(tokens)?;
    from_file(&file, package)
}

/// Collect declarations from an already parsed file.
///
/// # Errors
///
/// Returns every attribute error found in the file.
pub fn from_file(file: &syn::File, package: Option<&str>) -> darling::Result<SourceDeclarations> {
    let mut walker = source::Walker::new();
    walker.walk(&file.items, package);
    let found = walker.finish()?;
    tracing::debug!(
        entities = found.entities.len(),
        components = found.components.len(),
        targets = found.targets.len(),
        "collected source declarations"
    );
    Ok(found)
}
