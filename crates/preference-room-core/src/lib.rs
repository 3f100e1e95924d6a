// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema extraction and validation core for preference-room.
//!
//! Reads annotated class declarations describing key/value preference
//! storage, validates them, and produces immutable schemas and accessor
//! plans that a code writer can template without further decisions.
//!
//! # Overview
//!
//! - [`declaration`]: read-only declaration capability the builders consume
//! - [`types`]: semantic types and type-name normalization
//! - [`key`]: key field resolution and default literals
//! - [`entity`]: entity schema builder
//! - [`component`]: component schema builder
//! - [`injector`]: injection plans against a component
//! - [`planner`]: getter/setter/contains/remove method plans
//! - [`processor`]: batch orchestration of one generation pass
//!
//! # Usage
//!
//! ```rust
//! use preference_room_core::{
//!     declaration::{Annotation, ClassDeclaration, Member},
//!     entity::EntitySchema,
//!     naming::PREFERENCE_ENTITY,
//!     planner::AccessorPlanner
//! };
//!
//! let decl = ClassDeclaration::new("UserProfile")
//!     .annotated(Annotation::new(PREFERENCE_ENTITY))
//!     .member(Member::field("Nickname", "String").initialized("skydoves"));
//!
//! let schema = EntitySchema::build(&decl)?;
//! let accessors = AccessorPlanner::new("preference").plan_entity(&schema);
//! assert_eq!(
//!     accessors[0].getter.statement(),
//!     r#"return preference.getString("Nickname", "skydoves")"#
//! );
//! # Ok::<(), preference_room_core::SchemaError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod component;
pub mod declaration;
pub mod entity;
pub mod error;
pub mod injector;
pub mod key;
pub mod naming;
pub mod planner;
pub mod processor;
pub mod types;

pub use component::ComponentSchema;
pub use declaration::{ClassDeclaration, Declaration};
pub use entity::EntitySchema;
pub use error::{Result, SchemaError};
pub use injector::InjectionPlan;
pub use key::KeyField;
pub use planner::AccessorPlanner;
pub use processor::{GenerationPlan, Processor, ProcessorConfig};
pub use types::SemanticType;
