//! Rendering context handed to the template engine.
//!
//! Every struct here serializes to the key/value shape the Cowboy templates read.

use serde::Serialize;

use crate::generator::{
  metrics::GenerationStats,
  parameters::{CollectionFormat, ParameterDescriptor, ParameterLocation},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamContext {
  /// Name as declared in the document.
  pub base_name: String,
  pub param_name: String,
  pub location: ParameterLocation,
  pub required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub collection_format: Option<CollectionFormat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data_type: Option<String>,
}

impl ParamContext {
  #[must_use]
  pub fn new(descriptor: &ParameterDescriptor, param_name: String) -> Self {
    Self {
      base_name: descriptor.name.clone(),
      param_name,
      location: descriptor.location,
      required: descriptor.required,
      collection_format: descriptor.collection_format,
      data_type: descriptor.data_type.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationContext {
  pub operation_id: String,
  pub http_method: String,
  /// Path exactly as written in the document.
  pub raw_path: String,
  /// Cowboy route, e.g. `/pets/:petId`.
  pub path: String,
  pub example_path: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  pub all_params: Vec<ParamContext>,
  pub path_params: Vec<ParamContext>,
  pub query_params: Vec<ParamContext>,
  pub header_params: Vec<ParamContext>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body_param: Option<ParamContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiContext {
  /// Group key the operations were collected under (first tag or `default`).
  pub tag: String,
  pub classname: String,
  pub filename: String,
  pub operations: Vec<OperationContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyContext {
  pub base_name: String,
  pub name: String,
  pub data_type: String,
  pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelContext {
  pub schema_name: String,
  pub classname: String,
  pub filename: String,
  pub data_type: String,
  pub properties: Vec<PropertyContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GenerationOutput {
  pub title: String,
  pub version: String,
  pub apis: Vec<ApiContext>,
  pub models: Vec<ModelContext>,
  /// The whole input document re-serialized as YAML, for templates that embed it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub swagger_yaml: Option<String>,
  pub stats: GenerationStats,
}

impl GenerationOutput {
  /// Serializes the whole context for the rendering engine.
  ///
  /// # Errors
  ///
  /// Fails only if serialization itself fails, which plain data structs never do.
  pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(self)
  }
}
