// Repository ports implemented by the infrastructure layer

pub mod teapot_repository;

pub use teapot_repository::TeapotRepository;
