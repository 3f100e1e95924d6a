// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Preference component schema.
//!
//! A component groups entities behind one generated access point. Entity
//! names come from the `PreferenceComponent` annotation values, each a
//! comma-separated list:
//!
//! ```text
//! @PreferenceComponent(entities = "UserProfile,Settings")
//! interface AppComponent {
//!     void inject(MainActivity target);
//! }
//! ```
//!
//! Names are not checked against known entities here. Components may be
//! processed before their entities; unknown names surface later, when an
//! injector asks for them.

use std::collections::BTreeSet;

use crate::{
    declaration::{Declaration, Modifier},
    error::Result,
    naming::{PREFERENCE_COMPONENT, component_class_name}
};

/// Validated preference component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentSchema {
    /// Enclosing package, `None` for the unnamed package.
    pub package_name:      Option<String>,
    /// Declaring class name.
    pub source_class_name: String,
    /// Referenced entity storage names. Ordering carries no meaning.
    pub entity_names:      BTreeSet<String>,
    /// Types of the single-parameter instance methods, in declaration order.
    pub inject_targets:    Vec<String>
}

impl ComponentSchema {
    /// Build a component schema.
    ///
    /// Every value of the `PreferenceComponent` annotation is split on
    /// commas, trimmed and merged into one set. Empty pieces are dropped.
    ///
    /// # Errors
    ///
    /// Currently infallible; the signature matches the other builders so
    /// callers propagate uniformly.
    pub fn build<D: Declaration>(decl: &D) -> Result<Self> {
        let entity_names: BTreeSet<String> = decl
            .annotation(PREFERENCE_COMPONENT)
            .into_iter()
            .flat_map(|a| a.values.iter())
            .flat_map(|(_, value)| value.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let mut inject_targets: Vec<String> = Vec::new();
        for member in decl
            .members()
            .iter()
            .filter(|m| !m.is_field() && !m.modifiers.contains(&Modifier::Static))
        {
            if let [parameter] = member.parameters.as_slice()
                && !inject_targets.contains(&parameter.type_name)
            {
                inject_targets.push(parameter.type_name.clone());
            }
        }

        tracing::debug!(
            class = decl.simple_name(),
            entities = entity_names.len(),
            targets = inject_targets.len(),
            "built preference component"
        );

        Ok(Self {
            package_name: decl.package_name().map(str::to_string),
            source_class_name: decl.simple_name().to_string(),
            entity_names,
            inject_targets
        })
    }

    /// Whether the component composes the entity.
    #[must_use]
    pub fn contains_entity(&self, storage_name: &str) -> bool {
        self.entity_names.contains(storage_name)
    }

    /// Name of the generated component class.
    #[must_use]
    pub fn generated_class_name(&self) -> String {
        component_class_name(&self.source_class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Annotation, ClassDeclaration, Member};

    fn component(values: &[&str]) -> ClassDeclaration {
        let annotation = values
            .iter()
            .fold(Annotation::new(PREFERENCE_COMPONENT), |a, v| a.with("entities", *v));
        ClassDeclaration::new("AppComponent").annotated(annotation)
    }

    #[test]
    fn merges_and_deduplicates_values() {
        let schema = ComponentSchema::build(&component(&["A,B", "B,C"])).unwrap();
        assert_eq!(schema.entity_names.len(), 3);
        for name in ["A", "B", "C"] {
            assert!(schema.contains_entity(name), "{name}");
        }
    }

    #[test]
    fn trims_and_drops_empty_pieces() {
        let schema = ComponentSchema::build(&component(&[" UserProfile , Settings,", ","])).unwrap();
        assert_eq!(schema.entity_names.len(), 2);
        assert!(schema.contains_entity("UserProfile"));
        assert!(schema.contains_entity("Settings"));
    }

    #[test]
    fn ignores_other_annotations() {
        let decl = component(&["A"]).annotated(Annotation::new("Deprecated").with("since", "B"));
        let schema = ComponentSchema::build(&decl).unwrap();
        assert!(schema.contains_entity("A"));
        assert!(!schema.contains_entity("B"));
    }

    #[test]
    fn unknown_entity_names_are_accepted() {
        let schema = ComponentSchema::build(&component(&["NotYetProcessed"])).unwrap();
        assert!(schema.contains_entity("NotYetProcessed"));
    }

    #[test]
    fn collects_inject_targets() {
        let decl = component(&["A"])
            .in_package("com.example")
            .member(Member::method("inject", "void").param("target", "MainActivity"))
            .member(Member::method("inject", "void").param("target", "SettingsActivity"))
            .member(Member::method("inject", "void").param("again", "MainActivity"))
            .member(Member::method("noop", "void"));
        let schema = ComponentSchema::build(&decl).unwrap();
        assert_eq!(schema.inject_targets, ["MainActivity", "SettingsActivity"]);
        assert_eq!(schema.generated_class_name(), "PreferenceComponent_AppComponent");
        assert_eq!(schema.package_name.as_deref(), Some("com.example"));
    }

    #[test]
    fn static_methods_are_not_inject_targets() {
        let decl = component(&["A"])
            .member(
                Member::method("new", "Self")
                    .public()
                    .with_modifier(Modifier::Static)
                    .param("level", "i32")
            )
            .member(Member::method("inject", "()").param("target", "MainActivity"));
        let schema = ComponentSchema::build(&decl).unwrap();
        assert_eq!(schema.inject_targets, ["MainActivity"]);
    }
}
