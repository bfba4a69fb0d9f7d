//! Shared helpers: round bookkeeping and labeling validators.

pub mod coloring;
pub mod convergence;

pub use coloring::{
    build_color_classes, count_colors, is_independent_set, is_maximal_independent_set, is_valid_coloring,
    min_separation_ok,
};
pub use convergence::{RoundLimit, RoundStats};
