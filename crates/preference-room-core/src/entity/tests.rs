// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for entity schema construction.
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Naming | explicit, derived and empty storage names |
//! | Keys | order, lookup, duplicates |
//! | Reserved names | every accessor prefix, bare names |
//! | Overrides | routing, arity, types, prefix, unknown keys, visibility, replacement |
//! | Serde | serialized shape with the `serde` feature |

use super::*;
use crate::{
    declaration::{Annotation, ClassDeclaration},
    key::DefaultValue,
    naming::KEY_NAME,
    types::SemanticType
};

fn entity(name: &str) -> ClassDeclaration {
    ClassDeclaration::new(name)
        .in_package("com.example")
        .annotated(Annotation::new(PREFERENCE_ENTITY))
}

fn profile() -> ClassDeclaration {
    entity("UserProfile")
        .member(Member::field("Nickname", "String").initialized("skydoves"))
        .member(Member::field("Visits", "int"))
        .member(Member::field("Rate", "float").initialized("1.5"))
}

fn function(name: &str, key: &str, ty: &str) -> Member {
    Member::method(name, ty)
        .public()
        .param("value", ty)
        .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", key))
}

#[test]
fn derives_storage_name_from_class() {
    let schema = EntitySchema::build(&entity("userSettings")).unwrap();
    assert_eq!(schema.storage_name, "UserSettings");
    assert_eq!(schema.source_class_name, "userSettings");
    assert_eq!(schema.generated_class_name(), "Preference_UserSettings");
    assert_eq!(schema.package_name.as_deref(), Some("com.example"));
}

#[test]
fn explicit_storage_name_wins() {
    let decl = ClassDeclaration::new("UserProfile")
        .annotated(Annotation::new(PREFERENCE_ENTITY).with("name", "Profile"));
    let schema = EntitySchema::build(&decl).unwrap();
    assert_eq!(schema.storage_name, "Profile");
    assert_eq!(schema.package_name, None);
}

#[test]
fn empty_explicit_name_falls_back_to_class() {
    let decl = ClassDeclaration::new("Settings")
        .annotated(Annotation::new(PREFERENCE_ENTITY).with("name", ""));
    assert_eq!(EntitySchema::build(&decl).unwrap().storage_name, "Settings");
}

#[test]
fn blank_storage_name_fails() {
    let decl = ClassDeclaration::new("Settings")
        .annotated(Annotation::new(PREFERENCE_ENTITY).with("name", "   "));
    assert_eq!(
        EntitySchema::build(&decl).unwrap_err(),
        SchemaError::MissingName {
            class: "Settings".into()
        }
    );
    assert!(matches!(
        EntitySchema::build(&ClassDeclaration::new("")),
        Err(SchemaError::MissingName { .. })
    ));
}

#[test]
fn key_fields_keep_declaration_order() {
    let schema = EntitySchema::build(&profile()).unwrap();
    let keys: Vec<_> = schema.key_names().collect();
    assert_eq!(keys, ["Nickname", "Visits", "Rate"]);

    let rate = schema.key_field("Rate").unwrap();
    assert_eq!(rate.semantic_type, SemanticType::Float);
    assert_eq!(rate.default_value, DefaultValue::Float(1.5));
    assert!(schema.key_field("rate").is_none());
}

#[test]
fn duplicate_key_names_fail() {
    let decl = profile().member(
        Member::field("alias", "String").annotated(Annotation::new(KEY_NAME).with("name", "Nickname"))
    );
    assert_eq!(
        EntitySchema::build(&decl).unwrap_err(),
        SchemaError::DuplicateKey {
            class:      "UserProfile".into(),
            key:        "Nickname".into(),
            owner:      "Nickname".into(),
            owner_type: SemanticType::String
        }
    );
}

#[test]
fn key_names_are_case_sensitive() {
    let decl = entity("Flags")
        .member(Member::field("dark", "boolean"))
        .member(Member::field("Dark", "boolean"));
    assert_eq!(EntitySchema::build(&decl).unwrap().key_fields.len(), 2);
}

#[test]
fn unsupported_field_type_aborts_entity() {
    let decl = profile().member(Member::field("tags", "java.util.Set<String>"));
    assert!(matches!(
        EntitySchema::build(&decl),
        Err(SchemaError::UnsupportedType { field, .. }) if field == "tags"
    ));
}

#[test]
fn prefixed_members_colliding_with_keys_fail() {
    for name in ["putNickname", "getNickname", "containsNickname", "removeNickname"] {
        let decl = profile().member(Member::method(name, "void").public());
        assert_eq!(
            EntitySchema::build(&decl).unwrap_err(),
            SchemaError::ReservedName {
                class:  "UserProfile".into(),
                member: name.into(),
                key:    "Nickname".into()
            },
            "{name}"
        );
    }
}

#[test]
fn fields_count_as_members_for_collisions() {
    let decl = profile().member(Member::field("getVisits", "int"));
    assert!(matches!(
        EntitySchema::build(&decl),
        Err(SchemaError::ReservedName { member, .. }) if member == "getVisits"
    ));
}

#[test]
fn unprefixed_and_bare_prefix_names_are_allowed() {
    let decl = profile()
        .member(Member::method("get", "void").public())
        .member(Member::method("Nicknames", "void"))
        .member(Member::method("setNickname", "void"));
    assert!(EntitySchema::build(&decl).is_ok());
}

#[test]
fn custom_accessors_are_routed_by_prefix() {
    let decl = profile()
        .member(function("putNicknameFunction", "Nickname", "String"))
        .member(function("getVisitsFunction", "Visits", "int"));
    let schema = EntitySchema::build(&decl).unwrap();

    let setter = schema.setter_override("Nickname").unwrap();
    assert_eq!(setter.name, "putNicknameFunction");
    assert_eq!(setter.parameter_name, "value");
    assert_eq!(setter.value_type, SemanticType::String);
    assert!(schema.getter_override("Nickname").is_none());

    let getter = schema.getter_override("Visits").unwrap();
    assert_eq!(getter.name, "getVisitsFunction");
    assert!(schema.setter_override("Visits").is_none());
}

#[test]
fn custom_accessor_with_wrong_prefix_fails() {
    let decl = profile().member(function("setNicknameFunction", "Nickname", "String"));
    assert!(matches!(
        EntitySchema::build(&decl),
        Err(SchemaError::InvalidAccessorSignature { function, .. }) if function == "setNicknameFunction"
    ));
}

#[test]
fn custom_accessor_arity_is_checked() {
    let none = Member::method("putVisitsFunction", "int")
        .public()
        .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", "Visits"));
    let two = none.clone().param("a", "int").param("b", "int");
    for member in [none, two] {
        let decl = profile().member(member);
        assert!(matches!(
            EntitySchema::build(&decl),
            Err(SchemaError::InvalidAccessorSignature { .. })
        ));
    }
}

#[test]
fn custom_accessor_types_must_match_key() {
    let wrong_param = Member::method("putVisitsFunction", "int")
        .public()
        .param("visits", "String")
        .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", "Visits"));
    let wrong_return = Member::method("putVisitsFunction", "long")
        .public()
        .param("visits", "int")
        .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", "Visits"));
    for member in [wrong_param, wrong_return] {
        let err = EntitySchema::build(&profile().member(member)).unwrap_err();
        let SchemaError::InvalidAccessorSignature { reason, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert!(reason.contains("int"), "{reason}");
    }
}

#[test]
fn custom_accessor_accepts_equivalent_type_spelling() {
    let decl = profile().member(function("getVisitsFunction", "Visits", "java.lang.Integer"));
    assert!(EntitySchema::build(&decl).is_ok());
}

#[test]
fn custom_accessor_for_unknown_key_fails() {
    let decl = profile().member(function("putAgeFunction", "Age", "int"));
    assert_eq!(
        EntitySchema::build(&decl).unwrap_err(),
        SchemaError::UnknownKeyReference {
            class:    "UserProfile".into(),
            function: "putAgeFunction".into(),
            key:      "Age".into()
        }
    );
}

#[test]
fn non_public_custom_accessor_is_ignored() {
    let member = Member::method("putVisitsFunction", "boolean")
        .annotated(Annotation::new(PREFERENCE_FUNCTION).with("keyname", "Visits"));
    let schema = EntitySchema::build(&profile().member(member)).unwrap();
    assert!(schema.setter_overrides.is_empty());
}

#[test]
fn last_override_for_same_key_wins() {
    let decl = profile()
        .member(function("putNicknameA", "Nickname", "String"))
        .member(function("putNicknameB", "Nickname", "String"));
    let schema = EntitySchema::build(&decl).unwrap();
    assert_eq!(schema.setter_override("Nickname").unwrap().name, "putNicknameB");
    assert_eq!(schema.setter_overrides.len(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn serialized_schema_omits_key_index() {
    let schema = EntitySchema::build(&profile()).unwrap();
    let json = serde_json::to_value(&schema).unwrap();
    assert!(json.get("key_index").is_none());
    assert_eq!(json["storage_name"], "UserProfile");
    assert_eq!(json["key_fields"][0]["key_name"], "Nickname");
    assert_eq!(json["key_fields"][0]["semantic_type"], "String");
    assert_eq!(json["key_fields"][0]["default_value"]["String"], "skydoves");
}
