pub mod config;

pub use config::{GradientDocument, Orientation, OutputConfig, PointConfig};
