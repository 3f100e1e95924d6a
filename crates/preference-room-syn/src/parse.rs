// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute and item parsing.
//!
//! Converts syn items into core declarations. Options with a key/value
//! shape use [`darling`]; marker-style and list-style attributes are parsed
//! manually.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity.rs     - #[preference_entity(...)]     → PreferenceEntity
//! ├── component.rs  - #[preference_component(...)]  → PreferenceComponent
//! ├── field.rs      - #[preference(...)], #[inject_preference] → field members
//! ├── function.rs   - #[preference_function(...)]   → method members
//! ├── literal.rs    - default value expressions     → raw literal text
//! └── ty.rs         - syn types                     → type names
//! ```

mod component;
mod entity;
mod field;
mod function;
mod literal;
mod ty;

pub use component::{component_annotation, is_component};
pub use entity::{entity_annotation, is_entity};
pub use field::{field_member, is_injected};
pub use function::method_member;
pub use literal::literal_value;
pub use ty::{return_type_name, type_name};
