// Infrastructure layer module
// Contains the teapot store adapters (in-memory and PostgreSQL)
// Follows Hexagonal Architecture

pub mod repositories;
