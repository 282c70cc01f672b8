//! Input layer: the dataset handed to the classifier.

mod source;

pub use source::DatasetSource;
