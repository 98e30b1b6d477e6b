pub mod png_strip;

pub use png_strip::{decode_pixels, render_strip};
