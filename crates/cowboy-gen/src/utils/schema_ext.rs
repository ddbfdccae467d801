use oas3::spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet};

use crate::{generator::schema::SchemaNode, utils::refs::ref_target_name};

/// Fallback primitive name for schemas that carry no usable type information.
const UNTYPED: &str = "object";

/// Conversion of parsed oas3 schemas into [`SchemaNode`] trees.
pub trait ToSchemaNode {
  /// Builds the node for this schema. `vendor_key` names the extension (with or
  /// without its `x-` prefix) whose string value overrides the inferred type.
  fn to_schema_node(&self, vendor_key: &str) -> SchemaNode;
}

impl ToSchemaNode for ObjectOrReference<ObjectSchema> {
  fn to_schema_node(&self, vendor_key: &str) -> SchemaNode {
    match self {
      ObjectOrReference::Ref { ref_path, .. } => SchemaNode::reference(ref_target_name(ref_path)),
      ObjectOrReference::Object(schema) => schema.to_schema_node(vendor_key),
    }
  }
}

impl ToSchemaNode for ObjectSchema {
  fn to_schema_node(&self, vendor_key: &str) -> SchemaNode {
    let node = structural_node(self, vendor_key);
    match self.vendor_type(vendor_key) {
      Some(literal) => node.overridden_by(literal),
      None => node,
    }
  }
}

/// Extension methods for `ObjectSchema` used by the adapters.
pub trait SchemaExt {
  /// Returns the single declared type, or the non-null type of a nullable pair.
  fn primary_type(&self) -> Option<SchemaType>;

  /// Returns true if the schema is an array type.
  fn is_array(&self) -> bool;

  /// Returns the string value of the vendor type extension, if present.
  fn vendor_type(&self, vendor_key: &str) -> Option<&str>;
}

impl SchemaExt for ObjectSchema {
  fn primary_type(&self) -> Option<SchemaType> {
    match self.schema_type.as_ref()? {
      SchemaTypeSet::Single(schema_type) => Some(*schema_type),
      SchemaTypeSet::Multiple(types) => types.iter().copied().find(|t| *t != SchemaType::Null),
    }
  }

  fn is_array(&self) -> bool {
    self.primary_type() == Some(SchemaType::Array)
  }

  fn vendor_type(&self, vendor_key: &str) -> Option<&str> {
    let bare = vendor_key.strip_prefix("x-").unwrap_or(vendor_key);
    self
      .extensions
      .get(bare)
      .or_else(|| self.extensions.get(&format!("x-{bare}")))
      .and_then(serde_json::Value::as_str)
  }
}

fn structural_node(schema: &ObjectSchema, vendor_key: &str) -> SchemaNode {
  let format = schema.format.as_deref();
  match schema.primary_type() {
    Some(SchemaType::Array) => {
      let element = match schema.items.as_deref() {
        Some(Schema::Object(items)) => items.to_schema_node(vendor_key),
        Some(Schema::Boolean(_)) | None => SchemaNode::primitive(UNTYPED),
      };
      SchemaNode::array_of(element)
    }
    Some(SchemaType::Object) | None => object_node(schema, vendor_key),
    Some(SchemaType::Integer) => SchemaNode::primitive(if format == Some("int64") { "long" } else { "integer" }),
    Some(SchemaType::Number) => SchemaNode::primitive(match format {
      Some("float") => "float",
      Some("double") => "double",
      _ => "number",
    }),
    Some(SchemaType::String) => SchemaNode::primitive(match format {
      Some("byte" | "binary") => "ByteArray",
      _ => "string",
    }),
    Some(SchemaType::Boolean) => SchemaNode::primitive("boolean"),
    Some(SchemaType::Null) => SchemaNode::primitive("null"),
  }
}

fn object_node(schema: &ObjectSchema, vendor_key: &str) -> SchemaNode {
  if !schema.properties.is_empty() {
    return SchemaNode::object(
      schema
        .properties
        .iter()
        .map(|(name, property)| (name.clone(), property.to_schema_node(vendor_key))),
    );
  }

  match schema.additional_properties.as_ref() {
    Some(Schema::Object(value)) => SchemaNode::map_of(value.to_schema_node(vendor_key)),
    Some(Schema::Boolean(allowed)) if allowed.0 => SchemaNode::map_of(SchemaNode::primitive(UNTYPED)),
    _ => SchemaNode::primitive(UNTYPED),
  }
}
