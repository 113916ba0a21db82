pub mod config_generator;
pub mod content_directory;
pub mod site_repository;
mod staging;

pub use config_generator::ConfigGenerator;
pub use content_directory::ContentDirectoryService;
pub use site_repository::SiteRepository;
