// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Item walker that sorts a source file into declarations.
//!
//! # Classification
//!
//! | Item | Condition | Result |
//! |------|-----------|--------|
//! | `struct` | `#[preference_entity]` | entity |
//! | `trait` / `struct` | `#[preference_component(...)]` | component |
//! | `struct` | any `#[inject_preference]` field | injection target |
//! | `impl Type` | inherent, same module | methods of `Type` |
//! | `mod name { ... }` | inline | walked with `package::name` |
//!
//! Trait impls and out-of-line modules are not walked.

use std::collections::BTreeMap;

use darling::error::Accumulator;
use preference_room_core::{
    GenerationPlan, Processor,
    declaration::{ClassDeclaration, Member}
};
use syn::{Fields, ImplItem, Item, ItemImpl, ItemStruct, ItemTrait, TraitItem, Type, Visibility};

use crate::parse::{
    component_annotation, entity_annotation, field_member, is_component, is_entity, is_injected,
    method_member
};

/// Declarations found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDeclarations {
    /// Structs tagged `#[preference_entity]`.
    pub entities:   Vec<ClassDeclaration>,
    /// Items tagged `#[preference_component]`.
    pub components: Vec<ClassDeclaration>,
    /// Structs with `#[inject_preference]` fields.
    pub targets:    Vec<ClassDeclaration>
}

impl SourceDeclarations {
    /// Whether nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.components.is_empty() && self.targets.is_empty()
    }

    /// Run a generation pass over the collected declarations.
    ///
    /// # Errors
    ///
    /// Any [`preference_room_core::SchemaError`] raised by the pass.
    pub fn process(&self, processor: &Processor) -> preference_room_core::Result<GenerationPlan> {
        processor.process(&self.entities, &self.components, &self.targets)
    }

    /// Append another file's declarations.
    pub fn extend(&mut self, other: SourceDeclarations) {
        self.entities.extend(other.entities);
        self.components.extend(other.components);
        self.targets.extend(other.targets);
    }
}

pub(crate) struct Walker {
    errors: Accumulator,
    found:  SourceDeclarations
}

impl Walker {
    pub(crate) fn new() -> Self {
        Self {
            errors: darling::Error::accumulator(),
            found:  SourceDeclarations::default()
        }
    }

    pub(crate) fn finish(self) -> darling::Result<SourceDeclarations> {
        self.errors.finish_with(self.found)
    }

    pub(crate) fn walk(&mut self, items: &[Item], package: Option<&str>) {
        let methods = self.inherent_methods(items);

        for item in items {
            match item {
                Item::Struct(item) => self.visit_struct(item, package, &methods),
                Item::Trait(item) => self.visit_trait(item, package),
                Item::Mod(module) => {
                    if let Some((_, content)) = &module.content {
                        let name = module.ident.to_string();
                        let nested = match package {
                            Some(base) if !base.is_empty() => format!("{base}::{name}"),
                            _ => name
                        };
                        self.walk(content, Some(&nested));
                    }
                }
                _ => {}
            }
        }
    }

    fn inherent_methods(&mut self, items: &[Item]) -> BTreeMap<String, Vec<Member>> {
        let mut methods: BTreeMap<String, Vec<Member>> = BTreeMap::new();
        for item in items {
            let Item::Impl(block) = item else {
                continue;
            };
            let Some(owner) = inherent_owner(block) else {
                continue;
            };
            for impl_item in &block.items {
                if let ImplItem::Fn(function) = impl_item {
                    let public = matches!(function.vis, Visibility::Public(_));
                    if let Some(member) = self
                        .errors
                        .handle(method_member(&function.sig, &function.attrs, public))
                    {
                        methods.entry(owner.clone()).or_default().push(member);
                    }
                }
            }
        }
        methods
    }

    fn visit_struct(&mut self, item: &ItemStruct, package: Option<&str>, methods: &BTreeMap<String, Vec<Member>>) {
        let entity = is_entity(&item.attrs);
        let component = is_component(&item.attrs);
        let target = item.fields.iter().any(is_injected);
        if !entity && !component && !target {
            return;
        }

        let name = item.ident.to_string();
        if entity && matches!(item.fields, Fields::Unnamed(_)) {
            self.errors.push(
                darling::Error::custom("preference entities must use named fields").with_span(&item.ident)
            );
            return;
        }

        let mut decl = class(&name, package);
        for field in &item.fields {
            if let Some(member) = self.errors.handle(field_member(field)) {
                decl.members.push(member);
            }
        }
        if let Some(owned) = methods.get(&name) {
            decl.members.extend(owned.iter().cloned());
        }

        if entity && let Some(Some(annotation)) = self.errors.handle(entity_annotation(&item.attrs)) {
            let mut entity_decl = decl.clone();
            entity_decl.annotations.push(annotation);
            tracing::debug!(class = %name, package = ?package, "found preference entity");
            self.found.entities.push(entity_decl);
        }
        if component
            && let Some(annotation) = self
                .errors
                .handle(component_annotation(&item.attrs).map_err(darling::Error::from))
        {
            let mut component_decl = decl.clone();
            component_decl.annotations.push(annotation);
            tracing::debug!(class = %name, package = ?package, "found preference component");
            self.found.components.push(component_decl);
        }
        if target {
            tracing::debug!(class = %name, package = ?package, "found injection target");
            self.found.targets.push(decl);
        }
    }

    fn visit_trait(&mut self, item: &ItemTrait, package: Option<&str>) {
        if !is_component(&item.attrs) {
            return;
        }
        let Some(annotation) = self
            .errors
            .handle(component_annotation(&item.attrs).map_err(darling::Error::from))
        else {
            return;
        };

        let name = item.ident.to_string();
        let mut decl = class(&name, package);
        decl.annotations.push(annotation);
        for trait_item in &item.items {
            if let TraitItem::Fn(function) = trait_item
                && let Some(member) = self
                    .errors
                    .handle(method_member(&function.sig, &function.attrs, true))
            {
                decl.members.push(member);
            }
        }
        tracing::debug!(class = %name, package = ?package, "found preference component");
        self.found.components.push(decl);
    }
}

fn class(name: &str, package: Option<&str>) -> ClassDeclaration {
    let decl = ClassDeclaration::new(name);
    match package {
        Some(package) if !package.is_empty() => decl.in_package(package),
        _ => decl
    }
}

/// Self type name of an inherent impl block.
fn inherent_owner(block: &ItemImpl) -> Option<String> {
    if block.trait_.is_some() {
        return None;
    }
    match &*block.self_ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None
    }
}
