pub mod context;
pub mod example_path;
pub mod metrics;
pub mod orchestrator;
pub mod parameters;
pub mod route;
pub mod schema;
pub mod type_declaration;

#[cfg(test)]
mod tests;
