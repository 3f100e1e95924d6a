// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Injection plans.
//!
//! An injection target declares fields of generated storage class types and
//! tags them with `InjectPreference`. The generated injector assigns each of
//! them from the owning component singleton:
//!
//! ```text
//! class MainActivity {
//!     @InjectPreference Preference_UserProfile profile;
//! }
//!
//! // Injector_MainActivity
//! injectObject.profile = PreferenceComponent_AppComponent.getInstance().UserProfile();
//! ```
//!
//! Fields are processed in declaration order and the first field whose
//! entity is not composed into the component aborts the whole injector.

use crate::{
    component::ComponentSchema,
    declaration::Declaration,
    error::{Result, SchemaError},
    naming::{INJECT_OBJECT, INJECT_PREFERENCE, injector_class_name, strip_storage_prefix}
};

/// One injected field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InjectionBinding {
    /// Target field identifier.
    pub field_name:    String,
    /// Declared field type (the generated storage class).
    pub declared_type: String,
    /// Entity storage name, also the component accessor method name.
    pub entity_name:   String
}

/// Resolved injector for one target class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InjectionPlan {
    /// Target package, `None` for the unnamed package.
    pub target_package:  Option<String>,
    /// Target class name.
    pub target_class:    String,
    /// Generated class of the owning component.
    pub component_class: String,
    /// Bindings in field declaration order.
    pub bindings:        Vec<InjectionBinding>
}

impl InjectionPlan {
    /// Resolve every `InjectPreference` field of `target` against
    /// `component`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnresolvedInjection`] for the first field whose type
    /// is not a generated storage class of an entity in the component.
    pub fn build<D: Declaration>(component: &ComponentSchema, target: &D) -> Result<Self> {
        let mut bindings = Vec::new();
        for field in target
            .fields()
            .filter(|f| f.annotation(INJECT_PREFERENCE).is_some())
        {
            let entity = strip_storage_prefix(&field.type_name)
                .filter(|name| component.contains_entity(name))
                .ok_or_else(|| SchemaError::UnresolvedInjection {
                    component: component.source_class_name.clone(),
                    target:    target.simple_name().to_string(),
                    field:     field.name.clone(),
                    type_name: field.type_name.clone()
                })?;
            bindings.push(InjectionBinding {
                field_name:    field.name.clone(),
                declared_type: field.type_name.clone(),
                entity_name:   entity.to_string()
            });
        }

        tracing::debug!(
            target_class = target.simple_name(),
            component = %component.source_class_name,
            bindings = bindings.len(),
            "built injection plan"
        );

        Ok(Self {
            target_package: target.package_name().map(str::to_string),
            target_class: target.simple_name().to_string(),
            component_class: component.generated_class_name(),
            bindings
        })
    }

    /// Name of the generated injector class.
    #[must_use]
    pub fn injector_class_name(&self) -> String {
        injector_class_name(&self.target_class)
    }

    /// Assignment statement for one binding.
    #[must_use]
    pub fn statement(&self, binding: &InjectionBinding) -> String {
        format!(
            "{INJECT_OBJECT}.{} = {}.getInstance().{}()",
            binding.field_name, self.component_class, binding.entity_name
        )
    }

    /// Assignment statements for all bindings, in order.
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        self.bindings.iter().map(|b| self.statement(b)).collect()
    }
}
