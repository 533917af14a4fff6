//! Item authoring data: template schema and registry

pub mod registry;
pub mod schema;

pub use registry::TemplateRegistry;
pub use schema::{ItemTemplate, ShapeSpec, TemplateFile};
