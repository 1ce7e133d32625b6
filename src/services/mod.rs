//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod catalog_service;
pub mod reader_service;

// Re-export for convenience
pub use catalog_service::CatalogService;
pub use reader_service::ReaderService;
