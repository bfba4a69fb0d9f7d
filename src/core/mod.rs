//! Core numeric traits shared by every engine.

pub mod traits;

pub use traits::{Index, Label, Priority, Weight};
