use thiserror::Error;

use crate::naming::NormalizationMode;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
  /// The raw name collides with a reserved word and the mode does not allow escaping.
  #[error("'{name}' (reserved word) cannot be used as {}", .mode.role())]
  ReservedWord { name: String, mode: NormalizationMode },

  #[error("schema error: {0}")]
  Schema(String),
}

impl CodegenError {
  pub fn schema<S: Into<String>>(msg: S) -> Self {
    Self::Schema(msg.into())
  }

  /// Raw name carried by a reserved-word failure.
  #[must_use]
  pub fn reserved_name(&self) -> Option<&str> {
    match self {
      Self::ReservedWord { name, .. } => Some(name),
      Self::Schema(_) => None,
    }
  }
}
