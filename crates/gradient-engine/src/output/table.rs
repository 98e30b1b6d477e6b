//! Color tables as assembler, C or BASIC source.

use crate::color::Rgb8;
use crate::error::EncodeError;
use crate::target::{OutputFormat, Target};

/// Source syntax of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSyntax {
    /// `dc.w $xxx,...`
    Asm,
    /// `unsigned short label[n] = { 0xxxx, ... };`
    C,
    /// AMOS / STOS `Data $xxx,...`
    Basic,
}

impl TableSyntax {
    /// Syntax for a table output format, `None` for other formats.
    pub fn for_format(format: OutputFormat) -> Option<Self> {
        match format {
            OutputFormat::TableAsm => Some(TableSyntax::Asm),
            OutputFormat::TableC => Some(TableSyntax::C),
            OutputFormat::TableAmos | OutputFormat::TableStos => Some(TableSyntax::Basic),
            _ => None,
        }
    }

    /// Line comment prefix, used for artifact headers.
    pub fn comment_prefix(self) -> &'static str {
        match self {
            TableSyntax::Asm => "; ",
            TableSyntax::C => "// ",
            TableSyntax::Basic => "Rem ",
        }
    }
}

/// Table layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Values per row
    pub row_size: usize,
    /// Label or variable name; empty for none
    pub label: String,
    pub syntax: TableSyntax,
}

impl TableOptions {
    /// Defaults for `target`: its preferred row size and the label `Gradient`.
    pub fn for_target(target: &Target, syntax: TableSyntax) -> Self {
        Self {
            row_size: target.default_row_size(),
            label: "Gradient".to_string(),
            syntax,
        }
    }

    pub fn row_size(mut self, row_size: usize) -> Self {
        self.row_size = row_size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Storage width of a table item, from its hex digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemSize {
    Byte,
    Word,
    Long,
}

impl ItemSize {
    fn of(item: Option<&String>) -> Self {
        match item.map_or(0, |s| s.len()) {
            0 => ItemSize::Word,
            1..=2 => ItemSize::Byte,
            3..=4 => ItemSize::Word,
            _ => ItemSize::Long,
        }
    }

    fn asm_suffix(self) -> &'static str {
        match self {
            ItemSize::Byte => "b",
            ItemSize::Word => "w",
            ItemSize::Long => "l",
        }
    }

    fn c_type(self) -> &'static str {
        match self {
            ItemSize::Byte => "char",
            ItemSize::Word => "short",
            ItemSize::Long => "long",
        }
    }
}

/// Render already encoded items as a table.
pub fn format_table(items: &[String], options: &TableOptions) -> String {
    let size = ItemSize::of(items.first());
    let rows = items.chunks(options.row_size.max(1));

    match options.syntax {
        TableSyntax::Asm | TableSyntax::Basic => {
            let directive = match options.syntax {
                TableSyntax::Basic => "Data".to_string(),
                _ => format!("\tdc.{}", size.asm_suffix()),
            };
            let mut lines = Vec::new();
            if !options.label.is_empty() {
                lines.push(format!("{}:", options.label));
            }
            lines.extend(rows.map(|row| {
                let values: Vec<String> = row.iter().map(|v| format!("${v}")).collect();
                format!("{directive} {}", values.join(","))
            }));
            lines.join("\n")
        }
        TableSyntax::C => {
            let body: Vec<String> = rows
                .map(|row| {
                    let values: Vec<String> = row.iter().map(|v| format!("0x{v}")).collect();
                    format!("\t{}", values.join(","))
                })
                .collect();
            format!(
                "unsigned {} {}[{}] = {{\n{}\n}};",
                size.c_type(),
                options.label,
                items.len(),
                body.join(",\n")
            )
        }
    }
}

/// Encode `gradient` for `target` as a table in `format`.
///
/// # Errors
///
/// [`EncodeError::UnsupportedFormat`] if `format` is not a table format the
/// target offers.
///
/// # Example
///
/// ```
/// use gradient_engine::{encode_table, OutputFormat, TableOptions, TableSyntax, TargetId};
///
/// let target = TargetId::AmigaOcs.profile();
/// let options = TableOptions::for_target(target, TableSyntax::Asm).row_size(2);
/// let gradient = [[0, 0, 0], [128, 128, 128], [255, 255, 255]];
/// let table = encode_table(&gradient, target, OutputFormat::TableAsm, &options).unwrap();
/// assert_eq!(table, "Gradient:\n\tdc.w $000,$888\n\tdc.w $fff");
/// ```
pub fn encode_table(
    gradient: &[Rgb8],
    target: &Target,
    format: OutputFormat,
    options: &TableOptions,
) -> Result<String, EncodeError> {
    target.check_format(format)?;
    let syntax = TableSyntax::for_format(format).ok_or(EncodeError::UnsupportedFormat {
        target: target.id,
        format,
    })?;
    let options = TableOptions {
        syntax,
        ..options.clone()
    };
    Ok(format_table(&target.encode_all(gradient), &options))
}

/// One encoded item per line.
pub fn encode_hex_list(gradient: &[Rgb8], target: &Target) -> Result<String, EncodeError> {
    target.check_format(OutputFormat::HexList)?;
    Ok(target.encode_all(gradient).join("\n"))
}
