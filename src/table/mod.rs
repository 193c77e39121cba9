pub mod cleaner;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod query;
pub mod reshape;
