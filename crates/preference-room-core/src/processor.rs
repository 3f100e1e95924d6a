// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Batch orchestration.
//!
//! [`Processor::process`] runs one generation pass over a pre-enumerated
//! set of declarations:
//!
//! ```text
//! entities ──► EntitySchema::build ──► AccessorPlanner::plan_entity ─┐
//! components ─► ComponentSchema::build ─┐                            │
//!                                       ├─► InjectionPlan::build ────┼─► GenerationPlan
//! targets ──────────────────────────────┘                            │
//! ```
//!
//! The pass stops at the first error. Builders share no state, so a failing
//! unit never leaves anything half-built behind.

use std::collections::BTreeMap;

use crate::{
    component::ComponentSchema,
    declaration::Declaration,
    entity::EntitySchema,
    error::{Result, SchemaError},
    injector::InjectionPlan,
    planner::{AccessorPlanner, AccessorSet},
    types::simple_type_name
};

/// Default identifier of the storage handle inside generated classes.
pub const DEFAULT_STORAGE_HANDLE: &str = "preference";

/// Options for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessorConfig {
    /// Storage handle identifier used in accessor statements.
    pub storage_handle: String
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            storage_handle: DEFAULT_STORAGE_HANDLE.to_string()
        }
    }
}

/// Entity schema together with its accessor plans.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityPlan {
    /// Validated schema.
    pub schema:    EntitySchema,
    /// Accessors per key, in key order.
    pub accessors: Vec<AccessorSet>
}

/// Everything a code writer needs for one pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationPlan {
    /// Entities in input order.
    pub entities:   Vec<EntityPlan>,
    /// Components in input order.
    pub components: Vec<ComponentSchema>,
    /// Injectors, grouped by component in input order.
    pub injectors:  Vec<InjectionPlan>
}

impl GenerationPlan {
    /// Entity plan by storage name.
    #[must_use]
    pub fn entity(&self, storage_name: &str) -> Option<&EntityPlan> {
        self.entities
            .iter()
            .find(|e| e.schema.storage_name == storage_name)
    }
}

/// Runs generation passes.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: ProcessorConfig
}

impl Processor {
    /// Processor with the given options.
    #[must_use]
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config
        }
    }

    /// Active options.
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Build every schema and plan of one pass.
    ///
    /// Injection targets are looked up by simple name among `targets` for
    /// each inject target a component declares.
    ///
    /// # Errors
    ///
    /// The first error of any builder, plus
    /// [`SchemaError::DuplicateStorageName`] when two entities share a
    /// storage name and [`SchemaError::MissingInjectionTarget`] when a
    /// component injects into an undeclared target.
    pub fn process<E, C, T>(&self, entities: &[E], components: &[C], targets: &[T]) -> Result<GenerationPlan>
    where
        E: Declaration,
        C: Declaration,
        T: Declaration
    {
        let planner = AccessorPlanner::new(self.config.storage_handle.clone());

        let mut owners: BTreeMap<String, String> = BTreeMap::new();
        let mut entity_plans = Vec::with_capacity(entities.len());
        for decl in entities {
            let schema = EntitySchema::build(decl)?;
            if let Some(first) = owners.get(&schema.storage_name) {
                return Err(SchemaError::DuplicateStorageName {
                    name:   schema.storage_name.clone(),
                    first:  first.clone(),
                    second: schema.source_class_name.clone()
                });
            }
            owners.insert(schema.storage_name.clone(), schema.source_class_name.clone());
            let accessors = planner.plan_entity(&schema);
            entity_plans.push(EntityPlan {
                schema,
                accessors
            });
        }

        let mut component_schemas = Vec::with_capacity(components.len());
        let mut injectors = Vec::new();
        for decl in components {
            let component = ComponentSchema::build(decl)?;
            for name in component
                .entity_names
                .iter()
                .filter(|name| !owners.contains_key(*name))
            {
                tracing::warn!(
                    component = %component.source_class_name,
                    entity = %name,
                    "component references an entity that was not processed"
                );
            }

            for target_type in &component.inject_targets {
                let simple = simple_type_name(target_type);
                let target = targets
                    .iter()
                    .find(|t| t.simple_name() == simple)
                    .ok_or_else(|| SchemaError::MissingInjectionTarget {
                        component: component.source_class_name.clone(),
                        target:    target_type.clone()
                    })?;
                injectors.push(InjectionPlan::build(&component, target)?);
            }
            component_schemas.push(component);
        }

        tracing::debug!(
            entities = entity_plans.len(),
            components = component_schemas.len(),
            injectors = injectors.len(),
            "generation pass complete"
        );

        Ok(GenerationPlan {
            entities: entity_plans,
            components: component_schemas,
            injectors
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        declaration::{Annotation, ClassDeclaration, Member},
        naming::{INJECT_PREFERENCE, PREFERENCE_COMPONENT, PREFERENCE_ENTITY, PREFERENCE_FUNCTION}
    };

    fn profile() -> ClassDeclaration {
        ClassDeclaration::new("UserProfile")
            .annotated(Annotation::new(PREFERENCE_ENTITY))
            .member(Member::field("Nickname", "String").initialized("skydoves"))
            .member(
                Member::method("putNicknameFunction", "String")
                    .public()
                    .param("nickname", "String")
                    .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", "Nickname"))
            )
    }

    fn component(entities: &str, target: &str) -> ClassDeclaration {
        ClassDeclaration::new("AppComponent")
            .annotated(Annotation::new(PREFERENCE_COMPONENT).with("entities", entities))
            .member(Member::method("inject", "void").param("target", target))
    }

    fn activity() -> ClassDeclaration {
        ClassDeclaration::new("MainActivity")
            .member(Member::field("profile", "Preference_UserProfile").annotated(Annotation::new(INJECT_PREFERENCE)))
    }

    #[test]
    fn full_pass() {
        let plan = Processor::default()
            .process(&[profile()], &[component("UserProfile", "MainActivity")], &[activity()])
            .unwrap();

        let entity = plan.entity("UserProfile").unwrap();
        assert_eq!(entity.accessors.len(), 1);
        assert_eq!(
            entity.accessors[0].setter.statement(),
            r#"preference.edit().putString("Nickname", putNicknameFunction(nickname)).apply()"#
        );
        assert_eq!(
            entity.accessors[0].getter.statement(),
            r#"return preference.getString("Nickname", "skydoves")"#
        );

        assert_eq!(plan.components.len(), 1);
        assert_eq!(plan.injectors.len(), 1);
        assert_eq!(plan.injectors[0].bindings[0].entity_name, "UserProfile");
    }

    #[test]
    fn custom_storage_handle() {
        let processor = Processor::new(ProcessorConfig {
            storage_handle: "store".into()
        });
        let plan = processor
            .process::<_, ClassDeclaration, ClassDeclaration>(&[profile()], &[], &[])
            .unwrap();
        assert_eq!(
            plan.entities[0].accessors[0].contains.statement(),
            r#"return store.contains("Nickname")"#
        );
    }

    #[test]
    fn duplicate_storage_names_fail() {
        let other = ClassDeclaration::new("LegacyProfile")
            .annotated(Annotation::new(PREFERENCE_ENTITY).with("name", "UserProfile"));
        let err = Processor::default()
            .process::<_, ClassDeclaration, ClassDeclaration>(&[profile(), other], &[], &[])
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateStorageName {
                name:   "UserProfile".into(),
                first:  "UserProfile".into(),
                second: "LegacyProfile".into()
            }
        );
    }

    #[test]
    fn missing_injection_target_fails() {
        let err = Processor::default()
            .process::<_, _, ClassDeclaration>(&[profile()], &[component("UserProfile", "SettingsActivity")], &[])
            .unwrap_err();
        assert!(matches!(err, SchemaError::MissingInjectionTarget { target, .. } if target == "SettingsActivity"));
    }

    #[test]
    fn injection_outside_component_aborts_pass() {
        let err = Processor::default()
            .process(&[profile()], &[component("Settings", "MainActivity")], &[activity()])
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnresolvedInjection { .. }));
    }

    #[test]
    fn qualified_target_type_matches_simple_name() {
        let plan = Processor::default()
            .process(
                &[profile()],
                &[component("UserProfile", "com.example.MainActivity")],
                &[activity()]
            )
            .unwrap();
        assert_eq!(plan.injectors[0].target_class, "MainActivity");
    }

    #[test]
    fn default_config_uses_preference_handle() {
        assert_eq!(ProcessorConfig::default().storage_handle, DEFAULT_STORAGE_HANDLE);
    }
}
