use crate::generator::parameters::{CollectionFormat, ParameterDescriptor};

/// Appends query parameter placeholders to `base_path` for documentation.
///
/// Only query parameters contribute. Optional ones are bracketed and the
/// collection format decides how the placeholder value is written.
///
/// # Example
///
/// ```text
/// /pets + [limit (optional)]                     => /pets?[limit=:limit]
/// /pets + [tags (required, csv), page (optional)] => /pets?tags=:tags1,,[page=:page]
/// /pets + [id (required, multi)]                 => /pets?id=:id1&id=id2
/// ```
#[must_use]
pub fn compose_example_path(base_path: &str, parameters: &[ParameterDescriptor]) -> String {
  let mut path = String::from(base_path);

  for (index, param) in parameters.iter().filter(|p| p.is_query()).enumerate() {
    path.push(if index == 0 { '?' } else { ',' });
    if !param.required {
      path.push('[');
    }

    let name = &param.name;
    path.push_str(name);
    path.push_str("=:");
    match param.collection_format {
      Some(CollectionFormat::Csv) => path.push_str(&format!("{name}1,")),
      Some(CollectionFormat::Pipes) => path.push_str(&format!("{name}1|")),
      Some(CollectionFormat::Tsv) => path.push_str(&format!("{name}1\t")),
      Some(CollectionFormat::Multi) => path.push_str(&format!("{name}1&{name}={name}2")),
      Some(CollectionFormat::Ssv) | None => path.push_str(name),
    }

    if !param.required {
      path.push(']');
    }
  }

  path
}
