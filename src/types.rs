//! Data types shared by the pipeline stages.

pub mod core;

pub use self::core::{ClassifiedLine, Role, TextItem};
