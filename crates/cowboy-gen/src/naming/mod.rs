pub mod identifiers;


pub use identifiers::{NormalizationMode, Normalizer, camelize, to_var_name, underscore};
