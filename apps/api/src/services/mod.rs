// Application services
// Orchestrate domain rules over the repository ports

pub mod errors;
pub mod teapot_crud_service;

pub use errors::{TeapotError, TeapotResult};
pub use teapot_crud_service::TeapotCrudService;
