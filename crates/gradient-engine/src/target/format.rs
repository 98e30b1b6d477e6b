//! Output format identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An artifact a target can produce from a finished gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Copper list, assembler `dc.w` syntax
    CopperList,
    /// Copper list, C array syntax
    CopperListC,
    /// Color table, assembler data directives
    TableAsm,
    /// Color table, C array literal
    TableC,
    /// Color table, AMOS `Data` statements
    TableAmos,
    /// Color table, STOS `Data` statements
    TableStos,
    /// Raw register bytes
    TableBin,
    /// One encoded value per line
    HexList,
    /// Preview strip image
    ImagePng,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 9] = [
        OutputFormat::CopperList,
        OutputFormat::CopperListC,
        OutputFormat::TableAsm,
        OutputFormat::TableC,
        OutputFormat::TableAmos,
        OutputFormat::TableStos,
        OutputFormat::TableBin,
        OutputFormat::HexList,
        OutputFormat::ImagePng,
    ];

    /// Identifier used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::CopperList => "copperList",
            OutputFormat::CopperListC => "copperListC",
            OutputFormat::TableAsm => "tableAsm",
            OutputFormat::TableC => "tableC",
            OutputFormat::TableAmos => "tableAmos",
            OutputFormat::TableStos => "tableStos",
            OutputFormat::TableBin => "tableBin",
            OutputFormat::HexList => "hexList",
            OutputFormat::ImagePng => "imagePng",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::CopperList => "Copper list: asm",
            OutputFormat::CopperListC => "Copper list: C",
            OutputFormat::TableAsm => "Table: asm",
            OutputFormat::TableC => "Table: C",
            OutputFormat::TableAmos => "Table: AMOS",
            OutputFormat::TableStos => "Table: STOS",
            OutputFormat::TableBin => "Table: binary",
            OutputFormat::HexList => "Hex list",
            OutputFormat::ImagePng => "PNG Image",
        }
    }

    /// Whether the artifact is bytes rather than text.
    pub fn is_binary(self) -> bool {
        matches!(self, OutputFormat::TableBin | OutputFormat::ImagePng)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownName {
                kind: "output format",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>(), Ok(format));
        }
        assert!("copperlist".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_binary_formats() {
        assert!(OutputFormat::TableBin.is_binary());
        assert!(OutputFormat::ImagePng.is_binary());
        assert!(!OutputFormat::HexList.is_binary());
    }
}
