//! Encoders from a finished gradient to hardware-ready artifacts.
//!
//! - **Hex items** ([`hex`]): register values for one color
//! - **Tables** ([`encode_table`]): assembler, C or BASIC data statements
//! - **Copper lists** ([`encode_copper_list`]): Amiga per-scanline programs
//! - **Binary** ([`encode_binary`]): raw big-endian register words

mod binary;
mod copper;
pub mod hex;
mod table;

pub use binary::encode_binary;
pub use copper::{
    copper_instructions, encode_copper_list, CopperInstruction, CopperOptions, CopperSyntax,
};
pub use hex::{
    decode_hex3, decode_hex6, encode_hex3, encode_hex6, encode_hex_falcon, encode_hex_falcon24,
    encode_hex_falcon_true, encode_hex_neo_geo, encode_hex_pair_aga, encode_hex_ste, hex_to_rgb,
};
pub use table::{encode_hex_list, encode_table, format_table, TableOptions, TableSyntax};
