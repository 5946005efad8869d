// Request extractors that run before handlers

pub mod validation;

pub use validation::{NewTeapot, TeapotPatch};
