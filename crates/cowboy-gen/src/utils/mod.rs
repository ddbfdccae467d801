pub mod parameter_ext;
pub mod refs;
pub mod schema_ext;

pub use parameter_ext::{DescriptorBuilder, collection_format};
pub use refs::ref_target_name;
pub use schema_ext::{SchemaExt, ToSchemaNode};
