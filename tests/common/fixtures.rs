//! Test fixtures: gradient documents and helpers to place them on disk.

use std::path::PathBuf;
use tempfile::TempDir;

/// Black to white on a plain 4-bit target
pub const OCS_GRAY: &str = r##"
target: amigaOcs
steps: 16
blendMode: linear
points:
  - { pos: 0.0, color: "#000000" }
  - { pos: 1.0, color: "#ffffff" }
output:
  format: copperList
"##;

/// Sunset on the interlaced target
pub const LACE_SUNSET: &str = r##"
target: amigaOcsLace
steps: 32
blendMode: oklab
ditherMode: goldenRatio
ditherAmount: 40
points:
  - { pos: 0.0, color: "#1a0b3d" }
  - { pos: 0.6, color: "#d94f30" }
  - { pos: 1.0, hsv: [0.14, 0.6, 1.0] }
output:
  format: tableAsm
  rowSize: 4
"##;

/// The same gradient as JSON for the STe
pub const STE_JSON: &str = r##"{
  "target": "atariSte",
  "steps": 8,
  "ditherMode": "whiteNoise",
  "ditherAmount": 50,
  "seed": 7,
  "points": [
    { "pos": 0.0, "color": "#00f" },
    { "pos": 1.0, "color": "#f0f" }
  ],
  "output": { "format": "tableBin" }
}"##;

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_document(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Should write document");
    (dir, path)
}
