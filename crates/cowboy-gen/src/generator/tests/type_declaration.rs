use std::{collections::BTreeSet, sync::Arc};

use crate::{
  config::CodegenConfig,
  generator::{schema::SchemaNode, tests::support::default_config, type_declaration::TypeDeclarator},
};

fn declare(node: &SchemaNode) -> String {
  TypeDeclarator::new(default_config()).type_declaration(node)
}

#[test]
fn test_primitives() {
  let cases = [
    ("string", "string"),
    ("integer", "integer"),
    ("long", "long"),
    ("float", "float"),
    ("double", "float"),
    ("boolean", "boolean"),
    ("ByteArray", "string"),
    ("number", "number"),
  ];
  for (schema, expected) in cases {
    assert_eq!(declare(&SchemaNode::primitive(schema)), expected, "primitive {schema}");
  }
}

#[test]
fn test_unknown_primitive_falls_back_to_schema_name() {
  assert_eq!(declare(&SchemaNode::primitive("uuid")), "uuid");
  assert_eq!(declare(&SchemaNode::primitive("object")), "object");
}

#[test]
fn test_array_of_string() {
  assert_eq!(declare(&SchemaNode::array_of(SchemaNode::primitive("string"))), "[string]");
}

#[test]
fn test_map_uses_wildcard_key_without_trailing_space() {
  assert_eq!(
    declare(&SchemaNode::map_of(SchemaNode::primitive("integer"))),
    "#{ '_' => integer}"
  );
}

#[test]
fn test_reference_becomes_model_constructor() {
  assert_eq!(declare(&SchemaNode::reference("PhoneNumber")), "phone_number_model()");
  assert_eq!(declare(&SchemaNode::reference("#/components/schemas/Pet")), "pet_model()");
  assert_eq!(
    declare(&SchemaNode::array_of(SchemaNode::reference("Pet"))),
    "[pet_model()]"
  );
}

#[test]
fn test_reserved_reference_degrades_instead_of_failing() {
  assert_eq!(declare(&SchemaNode::reference("End")), "end_model()");
}

#[test]
fn test_inline_object_keeps_field_order() {
  let node = SchemaNode::object([
    ("zeta", SchemaNode::primitive("long")),
    ("created-at", SchemaNode::primitive("string")),
    ("tags", SchemaNode::array_of(SchemaNode::primitive("string"))),
  ]);
  assert_eq!(declare(&node), "#{ zeta => long, created_at => string, tags => [string] }");
}

#[test]
fn test_empty_inline_object() {
  assert_eq!(declare(&SchemaNode::object(Vec::<(String, SchemaNode)>::new())), "#{}");
}

#[test]
fn test_nested_inline_objects() {
  let node = SchemaNode::object([(
    "owner",
    SchemaNode::object([
      ("name", SchemaNode::primitive("string")),
      ("pets", SchemaNode::map_of(SchemaNode::reference("Pet"))),
    ]),
  )]);
  assert_eq!(
    declare(&node),
    "#{ owner => #{ name => string, pets => #{ '_' => pet_model()} } }"
  );
}

#[test]
fn test_vendor_override_wins_over_shape() {
  let shaped = SchemaNode::array_of(SchemaNode::primitive("string")).overridden_by("[binary()]");
  assert_eq!(declare(&shaped), "[binary()]");

  let object = SchemaNode::object([("a", SchemaNode::primitive("string"))]).overridden_by("term()");
  assert_eq!(declare(&object), "term()");

  assert_eq!(declare(&SchemaNode::vendor_override("atom()")), "atom()");
}

#[test]
fn test_deep_nesting_terminates() {
  let mut node = SchemaNode::primitive("string");
  for depth in 0..10 {
    node = if depth % 2 == 0 {
      SchemaNode::array_of(node)
    } else {
      SchemaNode::map_of(node)
    };
  }
  let declared = declare(&node);
  assert!(declared.starts_with("#{ '_' => ["));
  assert_eq!(declared.matches('[').count(), 5);
  assert_eq!(declared.matches("'_'").count(), 5);
  assert!(declared.contains("string"));
}

#[test]
fn test_custom_type_mapping_and_suffix() {
  let mut config = CodegenConfig::builder()
    .model_suffix("()")
    .reserved_words(BTreeSet::new())
    .build();
  config.type_mapping.insert("string".to_string(), "binary()".to_string());
  let declarator = TypeDeclarator::new(Arc::new(config));

  assert_eq!(
    declarator.type_declaration(&SchemaNode::array_of(SchemaNode::primitive("string"))),
    "[binary()]"
  );
  assert_eq!(declarator.type_declaration(&SchemaNode::reference("Pet")), "pet()");
}
