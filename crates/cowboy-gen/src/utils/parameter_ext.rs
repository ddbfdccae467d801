use oas3::{
  Spec,
  spec::{ObjectOrReference, ObjectSchema, Parameter, ParameterIn, ParameterStyle, RequestBody},
};

use crate::{
  generator::{
    parameters::{CollectionFormat, ParameterDescriptor, ParameterLocation},
    schema::SchemaNode,
    type_declaration::TypeDeclarator,
  },
  utils::schema_ext::{SchemaExt, ToSchemaNode},
};

/// Name given to the descriptor synthesized for a request body.
pub const BODY_PARAM_NAME: &str = "body";

impl From<ParameterIn> for ParameterLocation {
  fn from(value: ParameterIn) -> Self {
    match value {
      ParameterIn::Path => Self::Path,
      ParameterIn::Query => Self::Query,
      ParameterIn::Header => Self::Header,
      ParameterIn::Cookie => Self::Cookie,
    }
  }
}

/// Maps the OpenAPI 3 `style`/`explode` pair of an array parameter onto a collection format.
///
/// Non-array parameters have no collection format.
pub fn collection_format(param: &Parameter, schema: Option<&ObjectSchema>) -> Option<CollectionFormat> {
  if !schema.is_some_and(SchemaExt::is_array) {
    return None;
  }

  let style = param.style.unwrap_or(match param.location {
    ParameterIn::Query | ParameterIn::Cookie => ParameterStyle::Form,
    ParameterIn::Path | ParameterIn::Header => ParameterStyle::Simple,
  });
  let explode = param.explode.unwrap_or(matches!(style, ParameterStyle::Form));

  match style {
    ParameterStyle::Form if explode => Some(CollectionFormat::Multi),
    ParameterStyle::Form | ParameterStyle::Simple => Some(CollectionFormat::Csv),
    ParameterStyle::PipeDelimited => Some(CollectionFormat::Pipes),
    ParameterStyle::SpaceDelimited => Some(CollectionFormat::Ssv),
    _ => None,
  }
}

/// Builds descriptors from parsed oas3 operation inputs.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder<'a> {
  spec: &'a Spec,
  declarator: &'a TypeDeclarator,
  vendor_key: &'a str,
}

impl<'a> DescriptorBuilder<'a> {
  #[must_use]
  pub fn new(spec: &'a Spec, declarator: &'a TypeDeclarator, vendor_key: &'a str) -> Self {
    Self {
      spec,
      declarator,
      vendor_key,
    }
  }

  /// Converts a resolved parameter. Parameters without a schema get no data type.
  #[must_use]
  pub fn parameter(&self, param: &Parameter) -> ParameterDescriptor {
    let resolved = param.schema.as_ref().and_then(|schema| schema.resolve(self.spec).ok());
    let data_type = param.schema.as_ref().map(|schema| self.declare(schema));
    let location = ParameterLocation::from(param.location);

    ParameterDescriptor {
      name: param.name.clone(),
      location,
      // Path parameters are always required, whatever the document says.
      required: location == ParameterLocation::Path || param.required.unwrap_or(false),
      collection_format: collection_format(param, resolved.as_ref()),
      data_type,
    }
  }

  /// Converts a request body into a `body` descriptor typed by its first media type schema.
  #[must_use]
  pub fn request_body(&self, body: &RequestBody) -> ParameterDescriptor {
    let data_type = body
      .content
      .values()
      .find_map(|media| media.schema.as_ref())
      .map(|schema| self.declare(schema));

    ParameterDescriptor {
      name: BODY_PARAM_NAME.to_string(),
      location: ParameterLocation::Body,
      required: body.required.unwrap_or(false),
      collection_format: None,
      data_type,
    }
  }

  pub fn schema_node(&self, schema: &ObjectOrReference<ObjectSchema>) -> SchemaNode {
    schema.to_schema_node(self.vendor_key)
  }

  fn declare(&self, schema: &ObjectOrReference<ObjectSchema>) -> String {
    self.declarator.type_declaration(&self.schema_node(schema))
  }
}
