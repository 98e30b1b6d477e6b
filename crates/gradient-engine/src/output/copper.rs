//! Amiga copper lists.
//!
//! The copper is a coprocessor that waits for a raster position and then
//! writes a hardware register. A gradient becomes one wait per scanline
//! followed by a color register write, skipping lines whose color did not
//! change.

use tracing::debug;

use crate::bits::{reduce_bits, Bits};
use crate::color::{Rgb, Rgb8};
use crate::error::EncodeError;
use crate::target::{CopperMode, OutputFormat, Target};

/// First color register, COLOR00.
const COLOR_BASE: u16 = 0x180;
/// BPLCON3, selects which nibbles AGA color writes go to.
const BPLCON3: u16 = 0x106;
const BPLCON3_LOCT: u16 = 0x200;
/// The vertical beam counter is 8 bits wide; past this line a wait for
/// the end of line 255 is needed before lower lines can be matched.
const PAL_WRAP_LINE: u64 = 0xff;

/// Copper list source syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopperSyntax {
    /// `dc.w $xxxx,$yyyy`
    Asm,
    /// `0xxxxx,0xyyyy,` inside an `unsigned short` array
    C,
}

impl CopperSyntax {
    pub fn for_format(format: OutputFormat) -> Option<Self> {
        match format {
            OutputFormat::CopperList => Some(CopperSyntax::Asm),
            OutputFormat::CopperListC => Some(CopperSyntax::C),
            _ => None,
        }
    }

    pub fn comment_prefix(self) -> &'static str {
        match self {
            CopperSyntax::Asm => "; ",
            CopperSyntax::C => "// ",
        }
    }
}

/// Copper list options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopperOptions {
    /// Scanline of the first gradient entry
    pub start_line: u32,
    /// Label or variable name; empty for none
    pub label: String,
    /// Color register to write, 0 for COLOR00
    pub color_index: u8,
    /// Emit a wait before the first write too
    pub wait_start: bool,
    /// Terminate the list with an impossible wait
    pub end_list: bool,
    pub syntax: CopperSyntax,
}

impl Default for CopperOptions {
    fn default() -> Self {
        Self {
            start_line: 0x2b,
            label: "Gradient".to_string(),
            color_index: 0,
            wait_start: true,
            end_list: true,
            syntax: CopperSyntax::Asm,
        }
    }
}

/// One copper list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopperInstruction {
    /// Wait for the start of a scanline (low 8 bits used)
    Wait { line: u64 },
    /// Write `value` to the register at `register`
    Move { register: u16, value: u16 },
    /// Wait for the end of line 255
    PalFix,
    /// End of list
    End,
}

impl CopperInstruction {
    fn render(self, syntax: CopperSyntax) -> String {
        let (prefix, number, postfix, comment) = match syntax {
            CopperSyntax::Asm => ("dc.w ", "$", "", ";"),
            CopperSyntax::C => ("", "0x", ",", "//"),
        };
        match self {
            CopperInstruction::Wait { line } => {
                format!("\t{prefix}{number}{:x}07,{number}fffe{postfix}", line & 0xff)
            }
            CopperInstruction::Move { register, value } => {
                format!("\t{prefix}{number}{register:x},{number}{value:03x}{postfix}")
            }
            CopperInstruction::PalFix => {
                format!("\t{prefix}{number}ffdf,{number}fffe{postfix} {comment} PAL fix")
            }
            CopperInstruction::End => {
                format!("\t{prefix}{number}ffff,{number}fffe {comment} End copper list")
            }
        }
    }
}

fn pack_nibbles([r, g, b]: [u8; 3]) -> u16 {
    (u16::from(r & 0xf) << 8) | (u16::from(g & 0xf) << 4) | u16::from(b & 0xf)
}

/// Register writes for one color.
fn color_writes(color: Rgb8, mode: CopperMode, register: u16) -> Vec<CopperInstruction> {
    match mode {
        CopperMode::None => Vec::new(),
        CopperMode::Ocs => {
            let level = reduce_bits(Rgb::from_bytes(color), Bits::Uniform(4));
            vec![CopperInstruction::Move {
                register,
                value: pack_nibbles(level),
            }]
        }
        CopperMode::Aga => {
            let high = pack_nibbles(color.map(|c| c >> 4));
            let low = pack_nibbles(color.map(|c| c & 0xf));
            vec![
                CopperInstruction::Move { register, value: high },
                CopperInstruction::Move {
                    register: BPLCON3,
                    value: BPLCON3_LOCT,
                },
                CopperInstruction::Move { register, value: low },
                CopperInstruction::Move {
                    register: BPLCON3,
                    value: 0,
                },
            ]
        }
    }
}

/// Build the copper program for `gradient`, one entry per scanline.
///
/// # Errors
///
/// [`EncodeError::UnsupportedFormat`] for targets without a copper.
pub fn copper_instructions(
    gradient: &[Rgb8],
    target: &Target,
    options: &CopperOptions,
) -> Result<Vec<CopperInstruction>, EncodeError> {
    if target.copper == CopperMode::None {
        return Err(EncodeError::UnsupportedFormat {
            target: target.id,
            format: OutputFormat::CopperList,
        });
    }

    let register = COLOR_BASE + 2 * u16::from(options.color_index);
    let mut program = Vec::new();
    let mut last: Option<Vec<CopperInstruction>> = None;

    let start = u64::from(options.start_line);

    for (offset, &color) in gradient.iter().enumerate() {
        let line = start + offset as u64;
        let writes = color_writes(color, target.copper, register);
        if last.as_ref() != Some(&writes) {
            if offset > 0 || options.wait_start {
                program.push(CopperInstruction::Wait { line });
            }
            program.extend_from_slice(&writes);
            last = Some(writes);
        }
        if line == PAL_WRAP_LINE {
            program.push(CopperInstruction::PalFix);
        }
    }

    if options.end_list {
        program.push(CopperInstruction::End);
    }

    debug!(
        lines = gradient.len(),
        instructions = program.len(),
        "built copper list"
    );
    Ok(program)
}

/// Render a copper list as source text.
///
/// # Example
///
/// ```
/// use gradient_engine::{encode_copper_list, CopperOptions, OutputFormat, TargetId};
///
/// let target = TargetId::AmigaOcs.profile();
/// let gradient = [[0, 0, 0], [0, 0, 0], [255, 255, 255]];
/// let list = encode_copper_list(&gradient, target, OutputFormat::CopperList, &CopperOptions::default()).unwrap();
/// assert_eq!(
///     list,
///     "Gradient:\n\tdc.w $2b07,$fffe\n\tdc.w $180,$000\n\tdc.w $2d07,$fffe\n\tdc.w $180,$fff\n\tdc.w $ffff,$fffe ; End copper list"
/// );
/// ```
pub fn encode_copper_list(
    gradient: &[Rgb8],
    target: &Target,
    format: OutputFormat,
    options: &CopperOptions,
) -> Result<String, EncodeError> {
    target.check_format(format)?;
    let syntax = CopperSyntax::for_format(format).ok_or(EncodeError::UnsupportedFormat {
        target: target.id,
        format,
    })?;

    let mut out = String::new();
    if !options.label.is_empty() {
        match syntax {
            CopperSyntax::C => {
                out.push_str(&format!("unsigned short {}[] = {{\n", options.label));
            }
            CopperSyntax::Asm => out.push_str(&format!("{}:\n", options.label)),
        }
    }

    let lines: Vec<String> = copper_instructions(gradient, target, options)?
        .into_iter()
        .map(|instruction| instruction.render(syntax))
        .collect();
    out.push_str(&lines.join("\n"));

    if syntax == CopperSyntax::C {
        out.push_str("\n};");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetId;
    use pretty_assertions::assert_eq;

    fn count_moves(program: &[CopperInstruction]) -> usize {
        program
            .iter()
            .filter(|i| matches!(i, CopperInstruction::Move { .. }))
            .count()
    }

    #[test]
    fn test_every_change_costs_fixed_instructions() {
        // 16 distinct 4-bit grays
        let gradient: Vec<Rgb8> = (0..16u8).map(|v| [v * 17; 3]).collect();
        let options = CopperOptions {
            end_list: false,
            ..CopperOptions::default()
        };

        let ocs = copper_instructions(&gradient, TargetId::AmigaOcs.profile(), &options).unwrap();
        assert_eq!(ocs.len(), 2 * gradient.len());

        let aga = copper_instructions(&gradient, TargetId::AmigaAga.profile(), &options).unwrap();
        assert_eq!(aga.len(), 5 * gradient.len());
    }

    #[test]
    fn test_constant_gradient_writes_once() {
        let gradient = vec![[100, 50, 25]; 200];
        let options = CopperOptions::default();
        let ocs = copper_instructions(&gradient, TargetId::AmigaOcs.profile(), &options).unwrap();
        assert_eq!(count_moves(&ocs), 1);
        let aga = copper_instructions(&gradient, TargetId::AmigaAga.profile(), &options).unwrap();
        // High and low color writes plus two bank toggles, once
        assert_eq!(count_moves(&aga), 4);
    }

    #[test]
    fn test_first_wait_suppressed() {
        let options = CopperOptions {
            wait_start: false,
            end_list: false,
            ..CopperOptions::default()
        };
        let program =
            copper_instructions(&[[0, 0, 0], [255, 255, 255]], TargetId::AmigaOcs.profile(), &options)
                .unwrap();
        assert_eq!(
            program,
            vec![
                CopperInstruction::Move { register: 0x180, value: 0x000 },
                CopperInstruction::Wait { line: 0x2c },
                CopperInstruction::Move { register: 0x180, value: 0xfff },
            ]
        );
    }

    #[test]
    fn test_pal_fix_after_line_255() {
        let options = CopperOptions {
            start_line: 0xfe,
            end_list: false,
            label: String::new(),
            ..CopperOptions::default()
        };
        let gradient = [[0, 0, 0], [17, 17, 17], [34, 34, 34]];
        let list = encode_copper_list(
            &gradient,
            TargetId::AmigaOcs.profile(),
            OutputFormat::CopperList,
            &options,
        )
        .unwrap();
        assert_eq!(
            list,
            "\tdc.w $fe07,$fffe\n\tdc.w $180,$000\n\tdc.w $ff07,$fffe\n\tdc.w $180,$111\n\tdc.w $ffdf,$fffe ; PAL fix\n\tdc.w $007,$fffe\n\tdc.w $180,$222"
        );
    }

    #[test]
    fn test_start_line_at_counter_limit() {
        let options = CopperOptions {
            start_line: u32::MAX,
            ..CopperOptions::default()
        };
        let program =
            copper_instructions(&[[0, 0, 0], [255, 255, 255]], TargetId::AmigaOcs.profile(), &options)
                .unwrap();
        assert_eq!(
            program,
            vec![
                CopperInstruction::Wait { line: 0xffff_ffff },
                CopperInstruction::Move { register: 0x180, value: 0x000 },
                CopperInstruction::Wait { line: 0x1_0000_0000 },
                CopperInstruction::Move { register: 0x180, value: 0xfff },
                CopperInstruction::End,
            ]
        );

        let list = encode_copper_list(
            &[[0, 0, 0], [255, 255, 255]],
            TargetId::AmigaOcs.profile(),
            OutputFormat::CopperList,
            &options,
        )
        .unwrap();
        assert!(list.contains("\tdc.w $ff07,$fffe\n\tdc.w $180,$000\n\tdc.w $007,$fffe"), "{list}");
    }

    #[test]
    fn test_c_syntax_and_color_index() {
        let options = CopperOptions {
            color_index: 1,
            label: "Copper".into(),
            ..CopperOptions::default()
        };
        let list = encode_copper_list(
            &[[255, 0, 0]],
            TargetId::AmigaOcsLace.profile(),
            OutputFormat::CopperListC,
            &options,
        )
        .unwrap();
        assert_eq!(
            list,
            "unsigned short Copper[] = {\n\t0x2b07,0xfffe,\n\t0x182,0xf00,\n\t0xffff,0xfffe // End copper list\n};"
        );
    }

    #[test]
    fn test_aga_bank_toggle() {
        let options = CopperOptions {
            end_list: false,
            label: String::new(),
            ..CopperOptions::default()
        };
        let list = encode_copper_list(
            &[[0x12, 0x34, 0x56]],
            TargetId::AmigaAga.profile(),
            OutputFormat::CopperList,
            &options,
        )
        .unwrap();
        assert_eq!(
            list,
            "\tdc.w $2b07,$fffe\n\tdc.w $180,$135\n\tdc.w $106,$200\n\tdc.w $180,$246\n\tdc.w $106,$000"
        );
    }

    #[test]
    fn test_no_copper_on_atari() {
        let err = copper_instructions(&[[0, 0, 0]], TargetId::AtariSte.profile(), &CopperOptions::default());
        assert!(matches!(err, Err(EncodeError::UnsupportedFormat { .. })));
    }
}
