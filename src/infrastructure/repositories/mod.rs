//! Repository implementations using SeaORM

pub mod manuscript_repository;

pub use manuscript_repository::SeaOrmManuscriptRepository;
