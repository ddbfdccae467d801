use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One property or parameter type, as far as type synthesis cares.
///
/// Nodes are trees: `ArrayOf`, `MapOf` and `ObjectInline` may nest to any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
  /// A scalar such as `string`, `integer`, `long`, `double` or `ByteArray`.
  Primitive { name: String },
  /// A named model defined elsewhere; never inlined.
  Reference { target: String },
  /// An anonymous object with its own ordered sub-properties.
  ObjectInline { fields: IndexMap<String, SchemaNode> },
  ArrayOf { element: Box<SchemaNode> },
  /// A string-keyed map with a homogeneous value type.
  MapOf { value: Box<SchemaNode> },
  /// Literal target type text supplied by the schema author.
  ///
  /// `shape` keeps the structural node the literal replaces. Synthesis never looks at it.
  VendorOverride {
    literal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<Box<SchemaNode>>,
  },
}

impl SchemaNode {
  pub fn primitive(name: impl Into<String>) -> Self {
    Self::Primitive { name: name.into() }
  }

  pub fn reference(target: impl Into<String>) -> Self {
    Self::Reference { target: target.into() }
  }

  #[must_use]
  pub fn array_of(element: SchemaNode) -> Self {
    Self::ArrayOf {
      element: Box::new(element),
    }
  }

  #[must_use]
  pub fn map_of(value: SchemaNode) -> Self {
    Self::MapOf { value: Box::new(value) }
  }

  pub fn object<K, I>(fields: I) -> Self
  where
    K: Into<String>,
    I: IntoIterator<Item = (K, SchemaNode)>,
  {
    Self::ObjectInline {
      fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    }
  }

  pub fn vendor_override(literal: impl Into<String>) -> Self {
    Self::VendorOverride {
      literal: literal.into(),
      shape: None,
    }
  }

  /// Wraps this node in an override literal, keeping it as the overridden shape.
  #[must_use]
  pub fn overridden_by(self, literal: impl Into<String>) -> Self {
    Self::VendorOverride {
      literal: literal.into(),
      shape: Some(Box::new(self)),
    }
  }
}
