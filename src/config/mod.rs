pub mod options;
pub use options::IterationOptions;
