use std::sync::Arc;

use oas3::Spec;
use serde_json::{Value, json};

use crate::config::CodegenConfig;

pub(crate) fn default_config() -> Arc<CodegenConfig> {
  Arc::new(CodegenConfig::default())
}

/// Wraps `paths` and `schemas` in a minimal OpenAPI 3 document.
pub(crate) fn create_test_spec(paths: Value, schemas: Value) -> Spec {
  let spec_json = json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": paths,
    "components": { "schemas": schemas }
  });

  serde_json::from_value(spec_json).unwrap()
}
