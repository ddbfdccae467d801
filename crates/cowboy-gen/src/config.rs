//! Static configuration shared by every translation component.
//!
//! A [`CodegenConfig`] is built once per generation run and handed to each
//! component behind an [`Arc`](std::sync::Arc). Nothing in this crate mutates it
//! after construction.
//!
//! ```
//! use cowboy_gen::config::CodegenConfig;
//!
//! let config = CodegenConfig::builder()
//!   .reserved_words(["return".to_string()].into())
//!   .build();
//! assert!(config.is_reserved("Return"));
//! assert_eq!(config.map_primitive("double"), Some("float"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Erlang keywords that cannot appear as bare atoms or function names.
pub const ERLANG_RESERVED_WORDS: &[&str] = &[
  "after", "and", "andalso", "band", "begin", "bnot", "bor", "bsl", "bsr", "bxor", "case", "catch", "cond", "div",
  "end", "fun", "if", "let", "not", "of", "or", "orelse", "receive", "rem", "try", "when", "xor",
];

/// Primitive schema type names and the Erlang type text they translate to.
pub const DEFAULT_TYPE_MAPPING: &[(&str, &str)] = &[
  ("string", "string"),
  ("ByteArray", "string"),
  ("binary", "string"),
  ("boolean", "boolean"),
  ("double", "float"),
  ("float", "float"),
  ("integer", "integer"),
  ("long", "long"),
  ("map", "map"),
  ("number", "number"),
];

pub const DEFAULT_VENDOR_TYPE_EXTENSION: &str = "erlang-datatype";
pub const DEFAULT_ESCAPE_PREFIX: &str = "_";
pub const DEFAULT_CAPTURE_SIGIL: &str = ":";
pub const DEFAULT_MODEL_SUFFIX: &str = "_model()";
pub const DEFAULT_API_SUFFIX: &str = "Api";
pub const DEFAULT_API_NAME: &str = "DefaultApi";
pub const DEFAULT_API_FILENAME_SUFFIX: &str = "_api";

/// Immutable settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct CodegenConfig {
  /// Words rejected as model names and operation ids. Matched case-insensitively.
  #[builder(default = default_reserved_words())]
  pub reserved_words: BTreeSet<String>,
  #[builder(default = default_type_mapping())]
  pub type_mapping: BTreeMap<String, String>,
  /// Extension key (without the `x-` prefix) holding a literal type override.
  #[builder(default = DEFAULT_VENDOR_TYPE_EXTENSION.to_string(), into)]
  pub vendor_type_extension: String,
  #[builder(default = DEFAULT_ESCAPE_PREFIX.to_string(), into)]
  pub escape_prefix: String,
  #[builder(default = DEFAULT_CAPTURE_SIGIL.to_string(), into)]
  pub capture_sigil: String,
  #[builder(default = DEFAULT_MODEL_SUFFIX.to_string(), into)]
  pub model_suffix: String,
  #[builder(default = DEFAULT_API_SUFFIX.to_string(), into)]
  pub api_suffix: String,
  #[builder(default = DEFAULT_API_NAME.to_string(), into)]
  pub default_api_name: String,
  #[builder(default = DEFAULT_API_FILENAME_SUFFIX.to_string(), into)]
  pub api_filename_suffix: String,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl CodegenConfig {
  #[must_use]
  pub fn is_reserved(&self, word: &str) -> bool {
    self.reserved_words.iter().any(|reserved| reserved.eq_ignore_ascii_case(word))
  }

  /// Looks up the target type text for a primitive schema type name.
  #[must_use]
  pub fn map_primitive(&self, name: &str) -> Option<&str> {
    self.type_mapping.get(name).map(String::as_str)
  }
}

fn default_reserved_words() -> BTreeSet<String> {
  ERLANG_RESERVED_WORDS.iter().map(ToString::to_string).collect()
}

fn default_type_mapping() -> BTreeMap<String, String> {
  DEFAULT_TYPE_MAPPING
    .iter()
    .map(|(schema, target)| ((*schema).to_string(), (*target).to_string()))
    .collect()
}
