use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GenerationStats {
  pub operations_converted: usize,
  pub operations_skipped: usize,
  pub models_converted: usize,
  pub models_skipped: usize,
  pub api_groups: usize,
  #[serde(serialize_with = "serialize_warnings")]
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_operation(&mut self) {
    self.operations_converted += 1;
  }

  pub fn record_model(&mut self) {
    self.models_converted += 1;
  }

  pub fn record_api_groups(&mut self, count: usize) {
    self.api_groups += count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    match warning {
      GenerationWarning::OperationSkipped { .. } => self.operations_skipped += 1,
      GenerationWarning::ModelSkipped { .. } => self.models_skipped += 1,
      GenerationWarning::UnresolvedParameter { .. } | GenerationWarning::UndeclaredCapture { .. } => {}
    }
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    for warning in warnings {
      self.record_warning(warning);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped operation '{method} {path}': {error}")]
  OperationSkipped { method: String, path: String, error: String },
  #[strum(to_string = "Skipped model '{model}': {error}")]
  ModelSkipped { model: String, error: String },
  #[strum(to_string = "[{operation_id}] could not resolve parameter reference '{reference}'")]
  UnresolvedParameter { operation_id: String, reference: String },
  #[strum(to_string = "[{operation_id}] path capture '{capture}' has no declared path parameter")]
  UndeclaredCapture { operation_id: String, capture: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::OperationSkipped { .. } | Self::ModelSkipped { .. })
  }
}

fn serialize_warnings<S>(warnings: &[GenerationWarning], serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.collect_seq(warnings.iter().map(ToString::to_string))
}
