pub mod manuscript;

pub use manuscript::Manuscript;
