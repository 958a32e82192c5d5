pub mod config_service;
pub mod in_memory_profile_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_profile_repository::InMemoryProfileRepository;
pub use crate::paths::SmartRxPaths;
