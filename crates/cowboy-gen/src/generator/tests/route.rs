use std::sync::Arc;

use proptest::prelude::*;

use crate::{
  config::CodegenConfig,
  generator::{
    parameters::ParameterDescriptor,
    route::{PathSegment, PathTemplate, RouteTranslator},
    tests::support::default_config,
  },
};

fn translate(path: &str) -> String {
  RouteTranslator::new(default_config()).translate_route(path, &[])
}

#[test]
fn test_captures_become_bindings() {
  let params = [ParameterDescriptor::path("c"), ParameterDescriptor::path("d")];
  let translator = RouteTranslator::new(default_config());
  assert_eq!(translator.translate_route("/a/b/{c}/e/{d}", &params), "/a/b/:c/e/:d");
  assert_eq!(translate("/pets/{petId}"), "/pets/:petId");
}

#[test]
fn test_missing_leading_slash_is_added() {
  assert_eq!(translate("pets/{id}"), "/pets/:id");
}

#[test]
fn test_root_and_empty_segments_survive() {
  assert_eq!(translate("/"), "/");
  assert_eq!(translate(""), "/");
  assert_eq!(translate("/a//{b}"), "/a//:b");
  assert_eq!(translate("/pets/"), "/pets/");
}

#[test]
fn test_capture_names_are_not_escaped() {
  assert_eq!(translate("/jobs/{end}"), "/jobs/:end");
  assert_eq!(translate("/users/{user-id}"), "/users/:user-id");
}

#[test]
fn test_partial_braces_stay_literal() {
  assert_eq!(translate("/files/{name}.json"), "/files/{name}.json");
  assert_eq!(
    PathSegment::parse("v{version}"),
    PathSegment::Literal("v{version}".to_string())
  );
}

#[test]
fn test_template_captures_in_order() {
  let template = PathTemplate::parse("/stores/{storeId}/pets/{petId}");
  assert_eq!(template.captures().collect::<Vec<_>>(), vec!["storeId", "petId"]);
  assert_eq!(template.0.len(), 4);
}

#[test]
fn test_custom_capture_sigil() {
  let config = CodegenConfig::builder().capture_sigil("*").build();
  let translator = RouteTranslator::new(Arc::new(config));
  assert_eq!(translator.translate_route("/files/{path}", &[]), "/files/*path");
}

proptest! {
  #[test]
  fn prop_segment_count_is_preserved(segments in prop::collection::vec("[a-z]{0,6}|\\{[a-zA-Z]{1,6}\\}", 1..8)) {
    let path = format!("/{}", segments.join("/"));
    let route = translate(&path);

    prop_assert!(route.starts_with('/'));
    prop_assert_eq!(route.matches('/').count(), path.matches('/').count());
    prop_assert!(!route.contains('{'), "brace left in {}", route);
  }
}
