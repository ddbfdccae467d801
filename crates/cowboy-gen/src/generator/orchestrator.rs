//! Drives the translation components over an already parsed OpenAPI document.
//!
//! The orchestrator does not load documents and does not decide which files get
//! written. It walks every operation and component schema, runs the name, type,
//! route and example-path translations, and collects the results into a
//! [`GenerationOutput`] for the rendering engine.
//!
//! ## Usage
//!
//! ```no_run
//! use cowboy_gen::{CodegenConfig, Orchestrator};
//!
//! # fn example(spec: oas3::Spec) -> serde_json::Result<()> {
//! let orchestrator = Orchestrator::new(CodegenConfig::default());
//! let output = orchestrator.build(&spec);
//!
//! for warning in &output.stats.warnings {
//!   eprintln!("warning: {warning}");
//! }
//! let context = output.to_value()?;
//! # let _ = context;
//! # Ok(())
//! # }
//! ```

use std::{
  collections::{BTreeMap, HashSet},
  sync::Arc,
};

use oas3::{
  Spec,
  spec::{ObjectOrReference, ObjectSchema, Operation, Parameter},
};
use tracing::{debug, warn};

use crate::{
  config::CodegenConfig,
  error::{CodegenError, Result},
  generator::{
    context::{ApiContext, GenerationOutput, ModelContext, OperationContext, ParamContext, PropertyContext},
    example_path::compose_example_path,
    metrics::{GenerationStats, GenerationWarning},
    parameters::{ParameterDescriptor, ParameterLocation},
    route::{PathTemplate, RouteTranslator},
    type_declaration::TypeDeclarator,
  },
  naming::{NormalizationMode, Normalizer},
  utils::{DescriptorBuilder, ToSchemaNode},
};

/// Group key for operations whose first tag is missing or empty.
pub const DEFAULT_TAG: &str = "default";

/// Builds the rendering context for a whole document.
#[derive(Debug, Clone)]
pub struct Orchestrator {
  config: Arc<CodegenConfig>,
  normalizer: Normalizer,
  declarator: TypeDeclarator,
  routes: RouteTranslator,
}

impl Orchestrator {
  #[must_use]
  pub fn new(config: CodegenConfig) -> Self {
    Self::with_shared_config(Arc::new(config))
  }

  #[must_use]
  pub fn with_shared_config(config: Arc<CodegenConfig>) -> Self {
    let normalizer = Normalizer::new(Arc::clone(&config));
    Self {
      declarator: TypeDeclarator::from_normalizer(normalizer.clone()),
      routes: RouteTranslator::new(Arc::clone(&config)),
      normalizer,
      config,
    }
  }

  /// Translates every operation and component schema of `spec`.
  ///
  /// Items whose names are reserved words are skipped and reported in
  /// [`GenerationStats::warnings`]; everything else is always produced.
  #[must_use]
  pub fn build(&self, spec: &Spec) -> GenerationOutput {
    let mut stats = GenerationStats::default();
    let apis = self.build_apis(spec, &mut stats);
    let models = self.build_models(spec, &mut stats);
    let swagger_yaml = oas3::to_yaml(spec)
      .inspect_err(|err| warn!("cannot serialize document as YAML: {err}"))
      .ok();

    debug!(
      operations = stats.operations_converted,
      models = stats.models_converted,
      warnings = stats.warnings.len(),
      "built generation context"
    );

    GenerationOutput {
      title: spec.info.title.clone(),
      version: spec.info.version.clone(),
      apis,
      models,
      swagger_yaml,
      stats,
    }
  }

  fn build_apis(&self, spec: &Spec, stats: &mut GenerationStats) -> Vec<ApiContext> {
    let mut groups: BTreeMap<String, Vec<OperationContext>> = BTreeMap::new();

    for (path, method, operation) in spec.operations() {
      let tag = match operation.tags.first() {
        Some(tag) if !tag.is_empty() => tag.clone(),
        _ => DEFAULT_TAG.to_string(),
      };
      let mut warnings = vec![];

      match self.operation(spec, &path, method.as_str(), operation, &mut warnings) {
        Ok(context) => {
          stats.record_operation();
          stats.record_warnings(warnings);
          groups.entry(tag).or_default().push(context);
        }
        Err(err) => {
          warn!("skipping {method} {path}: {err}");
          stats.record_warning(GenerationWarning::OperationSkipped {
            method: method.to_string(),
            path: path.clone(),
            error: err.to_string(),
          });
        }
      }
    }

    stats.record_api_groups(groups.len());
    groups
      .into_iter()
      .map(|(tag, mut operations)| {
        operations.sort_by(|a, b| a.operation_id.cmp(&b.operation_id));
        ApiContext {
          classname: self.normalizer.api_name(&tag),
          filename: self.normalizer.api_filename(&tag),
          tag,
          operations,
        }
      })
      .collect()
  }

  /// Builds the context for one operation.
  ///
  /// # Errors
  ///
  /// Fails when the operation id is a reserved word.
  pub fn operation(
    &self,
    spec: &Spec,
    path: &str,
    method: &str,
    operation: &Operation,
    warnings: &mut Vec<GenerationWarning>,
  ) -> Result<OperationContext> {
    let raw_id = operation
      .operation_id
      .clone()
      .unwrap_or_else(|| synthesize_operation_id(method, path));
    let operation_id = self.normalizer.normalize(&raw_id, NormalizationMode::OperationId)?;

    let builder = DescriptorBuilder::new(spec, &self.declarator, &self.config.vendor_type_extension);
    let params = Self::collect_parameters(spec, path, operation, &operation_id, warnings);
    let mut descriptors: Vec<ParameterDescriptor> = params
      .iter()
      .map(|param| builder.parameter(param))
      .collect();

    if let Some(body) = operation.request_body.as_ref().and_then(|b| b.resolve(spec).ok()) {
      descriptors.push(builder.request_body(&body));
    }

    let path_params: Vec<ParameterDescriptor> = descriptors.iter().filter(|d| d.is_path()).cloned().collect();
    let declared: HashSet<&str> = path_params.iter().map(|p| p.name.as_str()).collect();
    for capture in PathTemplate::parse(path).captures() {
      if !declared.contains(capture) {
        warnings.push(GenerationWarning::UndeclaredCapture {
          operation_id: operation_id.clone(),
          capture: capture.to_string(),
        });
      }
    }

    let route = self.routes.translate_route(path, &path_params);
    let example_path = compose_example_path(path, &descriptors);

    let params: Vec<ParamContext> = descriptors
      .iter()
      .map(|d| ParamContext::new(d, self.normalizer.var_name(&d.name)))
      .collect();
    let by_location = |location: ParameterLocation| -> Vec<ParamContext> {
      params.iter().filter(|p| p.location == location).cloned().collect()
    };

    Ok(OperationContext {
      path_params: by_location(ParameterLocation::Path),
      query_params: by_location(ParameterLocation::Query),
      header_params: by_location(ParameterLocation::Header),
      body_param: by_location(ParameterLocation::Body).into_iter().next(),
      operation_id,
      http_method: method.to_uppercase(),
      raw_path: path.to_string(),
      path: route,
      example_path,
      summary: operation.summary.clone(),
      all_params: params,
    })
  }

  /// Path-level parameters first, overridden by operation-level ones with the same name and location.
  fn collect_parameters(
    spec: &Spec,
    path: &str,
    operation: &Operation,
    operation_id: &str,
    warnings: &mut Vec<GenerationWarning>,
  ) -> Vec<Parameter> {
    let mut resolve = |param_ref: &ObjectOrReference<Parameter>| match param_ref.resolve(spec) {
      Ok(param) => Some(param),
      Err(_) => {
        let reference = match param_ref {
          ObjectOrReference::Ref { ref_path, .. } => ref_path.clone(),
          ObjectOrReference::Object(param) => param.name.clone(),
        };
        warnings.push(GenerationWarning::UnresolvedParameter {
          operation_id: operation_id.to_string(),
          reference,
        });
        None
      }
    };

    let mut params = vec![];
    if let Some(path_item) = spec.paths.as_ref().and_then(|p| p.get(path)) {
      params.extend(path_item.parameters.iter().filter_map(&mut resolve));
    }

    for param in operation.parameters.iter().filter_map(&mut resolve) {
      params.retain(|existing: &Parameter| !(existing.location == param.location && existing.name == param.name));
      params.push(param);
    }

    params
  }

  fn build_models(&self, spec: &Spec, stats: &mut GenerationStats) -> Vec<ModelContext> {
    let Some(components) = spec.components.as_ref() else {
      return vec![];
    };

    let mut models = vec![];
    for (name, schema_ref) in &components.schemas {
      match self.model(spec, name, schema_ref) {
        Ok(model) => {
          stats.record_model();
          models.push(model);
        }
        Err(err) => {
          warn!("skipping model {name}: {err}");
          stats.record_warning(GenerationWarning::ModelSkipped {
            model: name.clone(),
            error: err.to_string(),
          });
        }
      }
    }
    models
  }

  /// Builds the context for one component schema.
  ///
  /// # Errors
  ///
  /// Fails when the schema name is a reserved word or the schema reference cannot be resolved.
  pub fn model(&self, spec: &Spec, name: &str, schema_ref: &ObjectOrReference<ObjectSchema>) -> Result<ModelContext> {
    let classname = self.normalizer.normalize(name, NormalizationMode::ModelName)?;
    let filename = self.normalizer.normalize(name, NormalizationMode::ModelFilename)?;
    let schema = schema_ref
      .resolve(spec)
      .map_err(|err| CodegenError::schema(format!("cannot resolve schema '{name}': {err}")))?;

    let vendor_key = self.config.vendor_type_extension.as_str();
    let properties = schema
      .properties
      .iter()
      .map(|(prop_name, prop)| PropertyContext {
        base_name: prop_name.clone(),
        name: self.normalizer.var_name(prop_name),
        data_type: self.declarator.type_declaration(&prop.to_schema_node(vendor_key)),
        required: schema.required.contains(prop_name),
      })
      .collect();

    Ok(ModelContext {
      schema_name: name.to_string(),
      classname,
      filename,
      data_type: self.declarator.type_declaration(&schema.to_schema_node(vendor_key)),
      properties,
    })
  }
}

/// Derives an operation id from method and path when the document has none.
///
/// ```text
/// GET /pets/{petId}/photos => get_pets_by_petId_photos
/// ```
pub(crate) fn synthesize_operation_id(method: &str, path: &str) -> String {
  let path_parts: Vec<String> = path
    .split('/')
    .filter(|s| !s.is_empty())
    .map(|s| match s.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
      Some(name) => format!("by_{name}"),
      None => s.to_string(),
    })
    .collect();

  let method_lower = method.to_lowercase();
  if path_parts.is_empty() {
    method_lower
  } else {
    format!("{}_{}", method_lower, path_parts.join("_"))
  }
}
