use std::sync::{Arc, LazyLock};

use any_ascii::any_ascii;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
  config::CodegenConfig,
  error::{CodegenError, Result},
};

// Compile static regexes only once for canonicalization.
static ACRONYM_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static CAMEL_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// The kind of identifier a raw schema name is being turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
  Variable,
  Parameter,
  ModelName,
  ModelFilename,
  ApiName,
  ApiFilename,
  OperationId,
}

impl NormalizationMode {
  /// Human readable role used in error messages.
  #[must_use]
  pub fn role(self) -> &'static str {
    match self {
      Self::Variable => "a variable name",
      Self::Parameter => "a parameter name",
      Self::ModelName | Self::ModelFilename => "a model name",
      Self::ApiName | Self::ApiFilename => "an API name",
      Self::OperationId => "a method name",
    }
  }

  /// Whether a reserved raw name is rejected instead of passed through.
  #[must_use]
  pub fn rejects_reserved(self) -> bool {
    matches!(self, Self::ModelName | Self::ModelFilename | Self::OperationId)
  }
}

/// Turns raw schema names into Erlang-safe identifiers.
#[derive(Debug, Clone)]
pub struct Normalizer {
  config: Arc<CodegenConfig>,
}

impl Normalizer {
  #[must_use]
  pub fn new(config: Arc<CodegenConfig>) -> Self {
    Self { config }
  }

  #[must_use]
  pub fn config(&self) -> &CodegenConfig {
    &self.config
  }

  /// Normalizes `raw` according to `mode`.
  ///
  /// # Errors
  ///
  /// Returns [`CodegenError::ReservedWord`] when `raw` is a reserved word and the
  /// mode is one of model name, model filename or operation id.
  pub fn normalize(&self, raw: &str, mode: NormalizationMode) -> Result<String> {
    if mode.rejects_reserved() && self.is_reserved(raw) {
      return Err(CodegenError::ReservedWord {
        name: raw.to_string(),
        mode,
      });
    }

    Ok(match mode {
      NormalizationMode::Variable | NormalizationMode::Parameter => to_var_name(raw),
      NormalizationMode::ModelName | NormalizationMode::ModelFilename | NormalizationMode::OperationId => {
        underscore(raw)
      }
      NormalizationMode::ApiName => self.api_name(raw),
      NormalizationMode::ApiFilename => self.api_filename(raw),
    })
  }

  /// Variable mode never fails, so callers that only need it skip the `Result`.
  #[must_use]
  pub fn var_name(&self, raw: &str) -> String {
    to_var_name(raw)
  }

  #[must_use]
  pub fn is_reserved(&self, name: &str) -> bool {
    self.config.is_reserved(name)
  }

  /// Prefixes the escape sentinel unconditionally.
  #[must_use]
  pub fn escape_reserved_word(&self, name: &str) -> String {
    format!("{}{name}", self.config.escape_prefix)
  }

  #[must_use]
  pub fn escape_if_reserved(&self, name: &str) -> String {
    if self.is_reserved(name) {
      self.escape_reserved_word(name)
    } else {
      name.to_string()
    }
  }

  /// API group class name; empty input yields the default group name.
  #[must_use]
  pub fn api_name(&self, raw: &str) -> String {
    if raw.is_empty() {
      return self.config.default_api_name.clone();
    }
    format!("{}{}", camelize(raw), self.config.api_suffix)
  }

  #[must_use]
  pub fn api_filename(&self, raw: &str) -> String {
    format!("{}{}", underscore(&raw.replace('-', "_")), self.config.api_filename_suffix)
  }
}

/// Converts a raw property or parameter name into a variable name.
///
/// Hyphens become underscores and all-uppercase names are lowercased:
/// `created-at` becomes `created_at`, `CREATED_AT` becomes `created_at`.
/// Anything else is left as is, so applying it twice changes nothing.
#[must_use]
pub fn to_var_name(name: &str) -> String {
  let name = name.replace('-', "_");
  if name.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
    name.to_lowercase()
  } else {
    name
  }
}

/// Splits a name at word and case boundaries and joins the lowercased words with `_`.
///
/// # Example
///
/// ```text
/// "PhoneNumber"      => "phone_number"
/// "HTTPResponseCode" => "http_response_code"
/// "pet-store.v2"     => "pet_store_v2"
/// ```
#[must_use]
pub fn underscore(word: &str) -> String {
  let word = word.replace('$', "").replace('.', "_");
  let word = ACRONYM_BOUNDARY_RE.replace_all(&word, "${1}_${2}");
  let word = CAMEL_BOUNDARY_RE.replace_all(&word, "${1}_${2}");
  word.replace(['-', ' '], "_").to_lowercase()
}

/// Capitalizes the first letter of every word and drops everything that is not alphanumeric.
///
/// Letters inside a word keep their case, so existing acronyms survive.
///
/// # Example
///
/// ```text
/// "phone_number" => "PhoneNumber"
/// "pet-store"    => "PetStore"
/// "HTTPServer"   => "HTTPServer"
/// ```
#[must_use]
pub fn camelize(word: &str) -> String {
  any_ascii(word).chars().capitalize_word_starts().collect()
}

/// An extension trait for char iterators that upper-cases word starts.
pub trait CapitalizeWordStartsExt: Iterator<Item = char> {
  fn capitalize_word_starts(self) -> CapitalizeWordStarts<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordStartsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_word_starts(self) -> CapitalizeWordStarts<Self>
  where
    Self: Sized,
  {
    CapitalizeWordStarts {
      iter: self,
      at_word_start: true,
    }
  }
}

/// Yields only alphanumeric characters; any other character ends the current word.
pub struct CapitalizeWordStarts<I>
where
  I: Iterator<Item = char>,
{
  iter: I,
  at_word_start: bool,
}

impl<I> Iterator for CapitalizeWordStarts<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let c = self.iter.next()?;
      if !c.is_ascii_alphanumeric() {
        self.at_word_start = true;
        continue;
      }

      let out = if self.at_word_start { c.to_ascii_uppercase() } else { c };
      self.at_word_start = false;
      return Some(out);
    }
  }
}
