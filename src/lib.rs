// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # preference-room
//!
//! Schema extraction and validation for generated key/value preference
//! accessors.
//!
//! Declarations describe preference *entities* (groups of typed keys),
//! *components* (groups of entities) and injection *targets*. One
//! [`Processor`] pass validates them and yields a [`GenerationPlan`] that a
//! code writer renders without making further decisions.
//!
//! # Quick Navigation
//!
//! - **Declarations**: [`declaration`] for hand-built input, [`source`] for
//!   Rust source with preference attributes
//! - **Schemas**: [`EntitySchema`], [`ComponentSchema`], [`InjectionPlan`]
//! - **Accessors**: [`planner`]
//! - **Errors**: [`SchemaError`]
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `syn` | yes | Rust source provider, re-exported as [`source`] |
//! | `serde` | no | Serialize schemas and plans, load [`ProcessorConfig`] |

pub use preference_room_core::*;
#[cfg(feature = "syn")]
#[cfg_attr(docsrs, doc(cfg(feature = "syn")))]
pub use preference_room_syn as source;
