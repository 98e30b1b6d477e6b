//! Built-in target profiles.

use std::sync::OnceLock;

use super::{CopperMode, Encoding, OutputFormat, Target, TargetId};
use crate::bits::Bits;
use crate::color::Rgb8;
use crate::palette::Palette;

use OutputFormat::*;

const AMIGA_OUTPUTS: &[OutputFormat] = &[
    CopperList, CopperListC, TableAsm, TableC, TableAmos, TableBin, HexList, ImagePng,
];

const ATARI_OUTPUTS: &[OutputFormat] = &[TableAsm, TableC, TableStos, TableBin, HexList, ImagePng];

const PLAIN_OUTPUTS: &[OutputFormat] = &[TableAsm, TableC, TableBin, HexList, ImagePng];

/// Amstrad CPC hardware palette in firmware order.
///
/// Firmware colour `n = 9 * G + 3 * R + B`, each channel at one of three
/// levels (off, half, full).
const CPC_PALETTE: [Rgb8; 27] = cpc_palette();

const fn cpc_palette() -> [Rgb8; 27] {
    const LEVELS: [u8; 3] = [0, 128, 255];
    let mut out = [[0u8; 3]; 27];
    let mut n = 0;
    while n < 27 {
        out[n] = [LEVELS[(n / 3) % 3], LEVELS[n / 9], LEVELS[n % 3]];
        n += 1;
    }
    out
}

static TARGETS: [Target; 10] = [
    Target {
        id: TargetId::AmigaOcs,
        label: "Amiga OCS/ECS",
        depth: Bits::Uniform(4),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::Hex3(Bits::Uniform(4)),
        copper: CopperMode::Ocs,
        outputs: AMIGA_OUTPUTS,
    },
    Target {
        id: TargetId::AmigaOcsLace,
        label: "Amiga OCS/ECS interlace",
        depth: Bits::Uniform(5),
        interlaced: true,
        palette: None,
        palette_row_size: None,
        // Each field holds 4-bit values
        encoding: Encoding::Hex3(Bits::Uniform(4)),
        copper: CopperMode::Ocs,
        outputs: AMIGA_OUTPUTS,
    },
    Target {
        id: TargetId::AmigaAga,
        label: "Amiga AGA",
        depth: Bits::Uniform(8),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::AgaPair,
        copper: CopperMode::Aga,
        outputs: AMIGA_OUTPUTS,
    },
    Target {
        id: TargetId::AtariSt,
        label: "Atari ST",
        depth: Bits::Uniform(3),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::Hex3(Bits::Uniform(3)),
        copper: CopperMode::None,
        outputs: ATARI_OUTPUTS,
    },
    Target {
        id: TargetId::AtariSte,
        label: "Atari STe/TT",
        depth: Bits::Uniform(4),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::Ste,
        copper: CopperMode::None,
        outputs: ATARI_OUTPUTS,
    },
    Target {
        id: TargetId::AtariFalcon,
        label: "Atari Falcon",
        depth: Bits::Uniform(6),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::Falcon,
        copper: CopperMode::None,
        outputs: ATARI_OUTPUTS,
    },
    Target {
        id: TargetId::AtariFalcon24,
        label: "Atari Falcon 24bit",
        depth: Bits::Uniform(8),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::Falcon24,
        copper: CopperMode::None,
        outputs: ATARI_OUTPUTS,
    },
    Target {
        id: TargetId::AtariFalconTrue,
        label: "Atari Falcon Truecolor",
        depth: Bits::PerChannel([5, 6, 5]),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::FalconTrue,
        copper: CopperMode::None,
        outputs: ATARI_OUTPUTS,
    },
    Target {
        id: TargetId::NeoGeo,
        label: "Neo Geo",
        depth: Bits::Uniform(6),
        interlaced: false,
        palette: None,
        palette_row_size: None,
        encoding: Encoding::NeoGeo,
        copper: CopperMode::None,
        outputs: PLAIN_OUTPUTS,
    },
    Target {
        id: TargetId::AmstradCpc,
        label: "Amstrad CPC",
        depth: Bits::Uniform(2),
        interlaced: false,
        palette: Some(&CPC_PALETTE),
        palette_row_size: Some(9),
        encoding: Encoding::PaletteIndex,
        copper: CopperMode::None,
        outputs: PLAIN_OUTPUTS,
    },
];

pub(super) fn profile(id: TargetId) -> &'static Target {
    match TARGETS.iter().find(|t| t.id == id) {
        Some(target) => target,
        None => &TARGETS[0],
    }
}

/// Oklab matcher for a target's fixed palette, built on first use.
pub(super) fn palette_matcher(id: TargetId) -> Option<&'static Palette> {
    static CPC_MATCHER: OnceLock<Option<Palette>> = OnceLock::new();

    match id {
        TargetId::AmstradCpc => CPC_MATCHER
            .get_or_init(|| Palette::new(&CPC_PALETTE).ok())
            .as_ref(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_covers_every_id() {
        for (i, id) in TargetId::ALL.into_iter().enumerate() {
            assert_eq!(TARGETS[i].id, id);
        }
    }

    #[test]
    fn test_depths_are_valid() {
        for target in &TARGETS {
            assert!(target.depth.validate().is_ok(), "{}", target.id);
            assert!(!target.outputs.is_empty());
        }
    }

    #[test]
    fn test_cpc_palette_firmware_order() {
        assert_eq!(CPC_PALETTE[0], [0, 0, 0]);
        assert_eq!(CPC_PALETTE[1], [0, 0, 128]);
        assert_eq!(CPC_PALETTE[3], [128, 0, 0]);
        assert_eq!(CPC_PALETTE[6], [255, 0, 0]);
        assert_eq!(CPC_PALETTE[18], [0, 255, 0]);
        assert_eq!(CPC_PALETTE[26], [255, 255, 255]);
    }

    #[test]
    fn test_every_palette_target_has_a_matcher() {
        for target in &TARGETS {
            let matcher = palette_matcher(target.id);
            assert_eq!(matcher.map(Palette::colors), target.palette, "{}", target.id);
        }
        let first = palette_matcher(TargetId::AmstradCpc).unwrap();
        let again = palette_matcher(TargetId::AmstradCpc).unwrap();
        assert!(std::ptr::eq(first, again));
    }
}
