// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_teapot_repository;
pub mod postgres_teapot_repository;

pub use in_memory_teapot_repository::InMemoryTeapotRepository;
pub use postgres_teapot_repository::PostgresTeapotRepository;
