mod route;
mod support;
mod type_declaration;
