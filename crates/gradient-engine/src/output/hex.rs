//! Hex encodings of hardware color registers.
//!
//! Encoders that take a `level` expect channel values already reduced to
//! the register's bit depth (see [`reduce_bits`](crate::reduce_bits));
//! encoders that take an [`Rgb8`] work on full 8-bit colors.

use crate::bits::{restore_bits, Bits};
use crate::color::{Rgb, Rgb8};
use crate::palette::ParseColorError;

/// One hex digit per channel: `[15, 8, 0]` becomes `"f80"`.
///
/// # Example
///
/// ```
/// use gradient_engine::output::encode_hex3;
/// assert_eq!(encode_hex3([15, 8, 0]), "f80");
/// ```
pub fn encode_hex3(level: [u8; 3]) -> String {
    level.iter().map(|v| format!("{:x}", v)).collect()
}

/// Two hex digits per channel.
pub fn encode_hex6(color: Rgb8) -> String {
    color.iter().map(|v| format!("{:02x}", v)).collect()
}

/// Atari STe nibble: the level's LSB moves to the nibble's MSB, so 4-bit
/// levels stay backwards compatible with 3-bit ST hardware.
///
/// # Example
///
/// ```
/// use gradient_engine::output::encode_hex_ste;
/// assert_eq!(encode_hex_ste([1, 15, 8]), "8f4");
/// ```
pub fn encode_hex_ste(level: [u8; 3]) -> String {
    level
        .iter()
        .map(|&n| format!("{:x}", (n >> 1) | ((n & 1) << 3)))
        .collect()
}

/// Atari Falcon palette long word `RRGG00BB`, with 6-bit levels shifted
/// into the top of each byte.
pub fn encode_hex_falcon(level: [u8; 3]) -> String {
    let [r, g, b] = level.map(|v| format!("{:02x}", u32::from(v) << 2));
    format!("{r}{g}00{b}")
}

/// Atari Falcon 24-bit palette long word `RRGG00BB`.
pub fn encode_hex_falcon24(color: Rgb8) -> String {
    let [r, g, b] = color;
    format!("{r:02x}{g:02x}00{b:02x}")
}

/// Falcon truecolor pixel word, 5/6/5 levels packed as `RRRRRGGGGGGBBBBB`.
///
/// # Example
///
/// ```
/// use gradient_engine::output::encode_hex_falcon_true;
/// assert_eq!(encode_hex_falcon_true([31, 63, 31]), "ffff");
/// assert_eq!(encode_hex_falcon_true([1, 0, 0]), "0800");
/// ```
pub fn encode_hex_falcon_true(level: [u8; 3]) -> String {
    let [r, g, b] = level.map(u32::from);
    format!("{:04x}", (r << 11) | (g << 5) | b)
}

/// Amiga AGA register pair: high nibbles first, then low nibbles.
///
/// # Example
///
/// ```
/// use gradient_engine::output::encode_hex_pair_aga;
/// assert_eq!(encode_hex_pair_aga([0x12, 0x34, 0x56]), ["135".to_string(), "246".to_string()]);
/// ```
pub fn encode_hex_pair_aga(color: Rgb8) -> [String; 2] {
    let [r, g, b] = color;
    [
        format!("{:x}{:x}{:x}", r >> 4, g >> 4, b >> 4),
        format!("{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf),
    ]
}

/// Neo Geo palette word from 6-bit levels.
///
/// Each channel keeps its top five bits; the sixth bit is shared by all
/// three channels as an inverted "dark" bit (bit 15). It is set when at
/// most one channel wants its low bit set.
///
/// Layout: `D R0 G0 B0 R4..R1 G4..G1 B4..B1`.
pub fn encode_hex_neo_geo(level: [u8; 3]) -> String {
    let lit = level.iter().filter(|&&v| v & 1 == 1).count();
    let dark = u16::from(lit <= 1);
    let [r, g, b] = level.map(|v| u16::from(v >> 1));
    let word = (dark << 15)
        | ((r & 1) << 14)
        | ((g & 1) << 13)
        | ((b & 1) << 12)
        | ((r >> 1) << 8)
        | ((g >> 1) << 4)
        | (b >> 1);
    format!("{:04x}", word)
}

fn channel(hex: &str, range: std::ops::Range<usize>) -> Result<u8, ParseColorError> {
    let digits = hex
        .get(range)
        .ok_or(ParseColorError::InvalidLength(hex.chars().count()))?;
    Ok(u8::from_str_radix(digits, 16)?)
}

/// Decode a 3-digit hex item to per-channel levels.
pub fn decode_hex3(hex: &str) -> Result<[u8; 3], ParseColorError> {
    if hex.len() != 3 {
        return Err(ParseColorError::InvalidLength(hex.chars().count()));
    }
    Ok([channel(hex, 0..1)?, channel(hex, 1..2)?, channel(hex, 2..3)?])
}

/// Decode a 6-digit hex item to a byte triple.
pub fn decode_hex6(hex: &str) -> Result<Rgb8, ParseColorError> {
    if hex.len() != 6 {
        return Err(ParseColorError::InvalidLength(hex.chars().count()));
    }
    Ok([channel(hex, 0..2)?, channel(hex, 2..4)?, channel(hex, 4..6)?])
}

/// Decode a hex item back to a color.
///
/// 3-digit items are levels at `depth` and get restored; anything else is
/// read as 6-digit `RRGGBB`.
///
/// # Example
///
/// ```
/// use gradient_engine::{output::hex_to_rgb, Bits};
///
/// let c = hex_to_rgb("f80", Bits::Uniform(4)).unwrap();
/// assert_eq!(c.to_bytes(), [255, 137, 0]);
/// let c = hex_to_rgb("ff8800", Bits::Uniform(4)).unwrap();
/// assert_eq!(c.to_bytes(), [255, 136, 0]);
/// ```
pub fn hex_to_rgb(hex: &str, depth: Bits) -> Result<Rgb, ParseColorError> {
    if hex.len() == 3 {
        Ok(restore_bits(decode_hex3(hex)?, depth))
    } else {
        Ok(Rgb::from_bytes(decode_hex6(hex)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex3_and_hex6() {
        assert_eq!(encode_hex3([0, 0, 0]), "000");
        assert_eq!(encode_hex3([10, 11, 12]), "abc");
        assert_eq!(encode_hex6([0, 1, 255]), "0001ff");
    }

    #[test]
    fn test_ste_rotation_round_trips_through_decode() {
        for n in 0..16u8 {
            let encoded = encode_hex_ste([n, n, n]);
            let nibble = decode_hex3(&encoded).unwrap()[0];
            // Rotate back: MSB returns to LSB
            assert_eq!(((nibble << 1) & 0xf) | (nibble >> 3), n);
        }
    }

    #[test]
    fn test_falcon_layouts() {
        assert_eq!(encode_hex_falcon([63, 32, 1]), "fc800004");
        assert_eq!(encode_hex_falcon24([0x12, 0x34, 0x56]), "12340056");
        assert_eq!(encode_hex_falcon_true([0, 0, 31]), "001f");
        assert_eq!(encode_hex_falcon_true([0, 63, 0]), "07e0");
    }

    #[test]
    fn test_aga_pair_of_white_and_black() {
        assert_eq!(encode_hex_pair_aga([255, 255, 255]), ["fff".to_string(), "fff".to_string()]);
        assert_eq!(encode_hex_pair_aga([0, 0, 0]), ["000".to_string(), "000".to_string()]);
    }

    #[test]
    fn test_neo_geo_word() {
        // All low bits set: dark bit clear, every channel at full intensity
        assert_eq!(encode_hex_neo_geo([63, 63, 63]), "7fff");
        // No low bits: dark bit set
        assert_eq!(encode_hex_neo_geo([0, 0, 0]), "8000");
        // 6-bit 33 -> 5-bit 16 -> MSBs 8, LSB 0
        assert_eq!(encode_hex_neo_geo([33, 0, 0]), "8800");
        // Two of three low bits set outvote the third
        assert_eq!(encode_hex_neo_geo([1, 1, 0]), "0000");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_hex3("12"),
            Err(ParseColorError::InvalidLength(2))
        ));
        assert!(matches!(
            decode_hex6("12345g"),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert_eq!(decode_hex6("0a0B0c").unwrap(), [10, 11, 12]);
    }
}
