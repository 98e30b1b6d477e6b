pub mod artifact;
pub mod palette;

pub use artifact::{assemble, Artifact, ArtifactFile};
pub use palette::extract_palette;
