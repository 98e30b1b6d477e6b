//! Raw big-endian register values.

use crate::color::Rgb8;
use crate::error::EncodeError;
use crate::target::{OutputFormat, Target};

/// Encode `gradient` as the bytes the hardware registers take.
///
/// Every encoded item becomes big-endian bytes; items with an odd number
/// of hex digits are left-padded with zero, so a 12-bit `f80` is stored as
/// the word `0f 80`.
///
/// # Example
///
/// ```
/// use gradient_engine::{encode_binary, TargetId};
///
/// let bytes = encode_binary(&[[255, 128, 0]], TargetId::AmigaOcs.profile()).unwrap();
/// assert_eq!(bytes, vec![0x0f, 0x80]);
/// ```
pub fn encode_binary(gradient: &[Rgb8], target: &Target) -> Result<Vec<u8>, EncodeError> {
    target.check_format(OutputFormat::TableBin)?;

    let mut bytes = Vec::with_capacity(gradient.len() * 2);
    for item in target.encode_all(gradient) {
        let item = if item.len() % 2 == 1 {
            format!("0{item}")
        } else {
            item
        };
        bytes.extend(hex::decode(item)?);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetId;
    use pretty_assertions::assert_eq;

    const ORANGE: Rgb8 = [255, 128, 0];

    #[test]
    fn test_word_targets() {
        let ste = encode_binary(&[ORANGE], TargetId::AtariSte.profile()).unwrap();
        assert_eq!(ste, vec![0x0f, 0x40]);
        let truecolor = encode_binary(&[ORANGE], TargetId::AtariFalconTrue.profile()).unwrap();
        assert_eq!(truecolor, vec![0xfc, 0x00]);
    }

    #[test]
    fn test_aga_pairs_take_two_words() {
        let bytes = encode_binary(&[ORANGE, [0, 0, 0]], TargetId::AmigaAga.profile()).unwrap();
        assert_eq!(bytes, vec![0x0f, 0x80, 0x0f, 0x00, 0, 0, 0, 0]);
    }

    #[test]
    fn test_long_targets() {
        let falcon = encode_binary(&[ORANGE], TargetId::AtariFalcon.profile()).unwrap();
        assert_eq!(falcon, vec![0xfc, 0x80, 0x00, 0x00]);
        let falcon24 = encode_binary(&[ORANGE], TargetId::AtariFalcon24.profile()).unwrap();
        assert_eq!(falcon24, vec![0xff, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_palette_index_is_one_byte() {
        let bytes = encode_binary(&[ORANGE, [0, 0, 0]], TargetId::AmstradCpc.profile()).unwrap();
        assert_eq!(bytes, vec![0x0f, 0x00]);
    }

    #[test]
    fn test_length_per_color() {
        let gradient = vec![[10, 20, 30]; 7];
        for id in TargetId::ALL {
            let target = id.profile();
            let bytes = encode_binary(&gradient, target).unwrap();
            let per_color: usize = target.encode_one(gradient[0]).iter().map(|i| (i.len() + 1) / 2).sum();
            assert_eq!(bytes.len(), 7 * per_color, "{id}");
        }
    }
}
