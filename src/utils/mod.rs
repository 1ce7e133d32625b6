pub mod filename;

pub use filename::secure_filename;
