//! Application layer: wiring of domain services and use cases

pub mod registry;

pub use registry::UseCaseRegistry;
