use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where a parameter lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  #[default]
  Path,
  Query,
  Header,
  Cookie,
  Body,
}

/// Encoding of a multi-valued query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
  Csv,
  Ssv,
  Tsv,
  Pipes,
  Multi,
}

/// A declared operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct ParameterDescriptor {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub location: ParameterLocation,
  #[builder(default)]
  pub required: bool,
  pub collection_format: Option<CollectionFormat>,
  /// Synthesized type declaration, when the schema was available.
  #[builder(into)]
  pub data_type: Option<String>,
}

impl ParameterDescriptor {
  pub fn path(name: impl Into<String>) -> Self {
    Self::builder().name(name).location(ParameterLocation::Path).required(true).build()
  }

  pub fn query(name: impl Into<String>, required: bool) -> Self {
    Self::builder().name(name).location(ParameterLocation::Query).required(required).build()
  }

  #[must_use]
  pub fn with_collection_format(mut self, format: CollectionFormat) -> Self {
    self.collection_format = Some(format);
    self
  }

  #[must_use]
  pub fn is_path(&self) -> bool {
    self.location == ParameterLocation::Path
  }

  #[must_use]
  pub fn is_query(&self) -> bool {
    self.location == ParameterLocation::Query
  }
}
