//! Translation core of an OpenAPI to Erlang Cowboy server generator.
//!
//! Four pure components sit between an already parsed OpenAPI document and the
//! template engine that writes the generated files:
//!
//! - [`naming::Normalizer`] turns raw schema names into Erlang-safe identifiers.
//! - [`generator::type_declaration::TypeDeclarator`] renders schema nodes as Erlang type text.
//! - [`generator::route::RouteTranslator`] rewrites `/pets/{id}` templates as Cowboy routes (`/pets/:id`).
//! - [`generator::example_path::compose_example_path`] writes documentation paths with query placeholders.
//!
//! [`Orchestrator`] runs all of them over an `oas3::Spec` and collects a serializable context.

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod utils;

pub use crate::{
  config::CodegenConfig,
  error::{CodegenError, Result},
  generator::{
    context::GenerationOutput,
    example_path::compose_example_path,
    orchestrator::Orchestrator,
    parameters::{CollectionFormat, ParameterDescriptor, ParameterLocation},
    route::RouteTranslator,
    schema::SchemaNode,
    type_declaration::TypeDeclarator,
  },
  naming::{NormalizationMode, Normalizer},
};
