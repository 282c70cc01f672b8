//! Discovery layer: turns CLI paths into the list of dataset files to classify.

pub mod walker;

pub use walker::{DatasetWalker, WalkConfig};
