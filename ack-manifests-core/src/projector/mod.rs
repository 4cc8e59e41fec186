pub mod project;
pub mod registry;
pub mod validate;
