use oas3::spec::Ref;

/// Extracts the referenced component name from a `$ref` path.
///
/// Internal references (`#/components/schemas/Pet`) are parsed properly. Anything
/// else degrades to the text after the last `/`, which is what the type synthesizer
/// would pick anyway.
pub fn ref_target_name(ref_path: &str) -> String {
  if ref_path.starts_with("#/components")
    && let Ok(component) = ref_path.parse::<Ref>()
  {
    return component.name;
  }
  ref_path.rsplit('/').next().unwrap_or(ref_path).to_string()
}
