use std::{collections::HashMap, sync::Arc};

use itertools::Itertools;
use tracing::debug;

use crate::{config::CodegenConfig, generator::parameters::ParameterDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
  Literal(String),
  Capture(String),
}

impl PathSegment {
  /// A segment is a capture only when the whole segment is wrapped in braces.
  #[must_use]
  pub fn parse(segment: &str) -> Self {
    match segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
      Some(name) => Self::Capture(name.to_string()),
      None => Self::Literal(segment.to_string()),
    }
  }

  #[must_use]
  pub fn capture_name(&self) -> Option<&str> {
    match self {
      Self::Capture(name) => Some(name),
      Self::Literal(_) => None,
    }
  }

  fn to_cowboy_segment(&self, sigil: &str) -> String {
    match self {
      Self::Literal(lit) => lit.clone(),
      Self::Capture(name) => format!("{sigil}{name}"),
    }
  }
}

/// A slash separated path template, with empty segments kept in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathTemplate(pub Vec<PathSegment>);

impl PathTemplate {
  /// Parses a raw path, dropping at most one leading slash.
  #[must_use]
  pub fn parse(path: &str) -> Self {
    let path = path.strip_prefix('/').unwrap_or(path);
    Self(path.split('/').map(PathSegment::parse).collect())
  }

  pub fn captures(&self) -> impl Iterator<Item = &str> {
    self.0.iter().filter_map(PathSegment::capture_name)
  }

  #[must_use]
  pub fn to_cowboy_route(&self, sigil: &str) -> String {
    format!("/{}", self.0.iter().map(|segment| segment.to_cowboy_segment(sigil)).join("/"))
  }
}

/// Converts brace-style path templates into Cowboy route strings.
///
/// ```text
/// /a/b/{c}/e/{d}  =>  /a/b/:c/e/:d
/// ```
#[derive(Debug, Clone)]
pub struct RouteTranslator {
  config: Arc<CodegenConfig>,
}

impl RouteTranslator {
  #[must_use]
  pub fn new(config: Arc<CodegenConfig>) -> Self {
    Self { config }
  }

  /// Translates `path` into a route. Capture names are emitted raw, without escaping.
  #[must_use]
  pub fn translate_route(&self, path: &str, path_params: &[ParameterDescriptor]) -> String {
    let capture_types: HashMap<&str, Option<&str>> = path_params
      .iter()
      .map(|param| (param.name.as_str(), param.data_type.as_deref()))
      .collect();

    let template = PathTemplate::parse(path);
    for capture in template.captures() {
      match capture_types.get(capture) {
        Some(data_type) => debug!(capture, ?data_type, "route capture"),
        None => debug!(capture, path, "route capture has no declared path parameter"),
      }
    }

    template.to_cowboy_route(&self.config.capture_sigil)
  }
}
