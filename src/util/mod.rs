//! Contains utility structures for tests and comparisons

mod reference_data;

pub use reference_data::*;
