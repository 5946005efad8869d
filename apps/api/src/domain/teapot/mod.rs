// Teapot domain module
// Contains the teapot entity, its capacity value object, the transport
// mapping used for partial updates, and the validator/mapper pair

#![allow(clippy::module_inception)]

pub mod mapper;
pub mod mapping;
pub mod teapot;
pub mod validator;
pub mod value_objects;

// Re-export main types for convenience
pub use mapping::TeapotMapping;
pub use teapot::Teapot;
pub use validator::ValidationErrors;
pub use value_objects::Capacity;
