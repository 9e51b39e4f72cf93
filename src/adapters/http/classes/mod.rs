//! HTTP adapter for class endpoints: the public catalog and class management.

mod dto;
mod handlers;
mod routes;

pub use dto::{ClassCatalogResponse, ClassRequest, ClassResponse, ClassRosterResponse};
pub use handlers::{create_class, get_class_roster, list_classes, update_class};
pub use routes::class_routes;
