use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
  config::CodegenConfig,
  generator::schema::SchemaNode,
  naming::{NormalizationMode, Normalizer, underscore},
};

/// Builds Erlang type text for schema nodes.
///
/// # Example
///
/// ```text
/// ArrayOf(Primitive("string"))                => "[string]"
/// MapOf(Reference("Pet"))                     => "#{ '_' => pet_model()}"
/// ObjectInline { id: long, tags: [string] }   => "#{ id => long, tags => [string] }"
/// ```
#[derive(Debug, Clone)]
pub struct TypeDeclarator {
  normalizer: Normalizer,
}

impl TypeDeclarator {
  #[must_use]
  pub fn new(config: Arc<CodegenConfig>) -> Self {
    Self {
      normalizer: Normalizer::new(config),
    }
  }

  #[must_use]
  pub fn from_normalizer(normalizer: Normalizer) -> Self {
    Self { normalizer }
  }

  fn config(&self) -> &CodegenConfig {
    self.normalizer.config()
  }

  /// Returns the type declaration for `node`. Never fails.
  #[must_use]
  pub fn type_declaration(&self, node: &SchemaNode) -> String {
    match node {
      SchemaNode::VendorOverride { literal, .. } => literal.clone(),
      SchemaNode::ObjectInline { fields } => {
        if fields.is_empty() {
          return "#{}".to_string();
        }
        let body = fields
          .iter()
          .map(|(name, field)| format!("{} => {}", self.normalizer.var_name(name), self.type_declaration(field)))
          .join(", ");
        format!("#{{ {body} }}")
      }
      SchemaNode::Reference { target } => self.model_reference(target),
      SchemaNode::ArrayOf { element } => format!("[{}]", self.type_declaration(element)),
      SchemaNode::MapOf { value } => format!("#{{ '_' => {}}}", self.type_declaration(value)),
      SchemaNode::Primitive { name } => self.primitive(name),
    }
  }

  fn model_reference(&self, target: &str) -> String {
    let name = target.rsplit('/').next().unwrap_or(target);
    let model = match self.normalizer.normalize(name, NormalizationMode::ModelName) {
      Ok(model) => model,
      Err(err) => {
        warn!("{err}; emitting it unchecked");
        underscore(name)
      }
    };
    format!("{model}{}", self.config().model_suffix)
  }

  fn primitive(&self, name: &str) -> String {
    if let Some(mapped) = self.config().map_primitive(name) {
      return mapped.to_string();
    }
    debug!(primitive = name, "no type mapping, using schema type name");
    name.to_string()
  }
}
