//! Gradient Blaster
//!
//! Builds color gradients for Amiga, Atari, Neo Geo and Amstrad CPC
//! hardware and writes them out as copper lists, data tables, binary
//! blobs or PNG strips. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
