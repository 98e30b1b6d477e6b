//! End-to-end flow tests: document on disk to artifact on disk.

mod common;

use common::fixtures;
use gradient_blaster::models::GradientDocument;
use gradient_blaster::services::{assemble, Artifact};
use gradient_engine::OutputFormat;
use pretty_assertions::assert_eq;

#[test]
fn test_copper_list_flow() {
    let (_dir, path) = fixtures::write_document("gray.yaml", fixtures::OCS_GRAY);
    let document = GradientDocument::load(&path).unwrap();
    let blaster = document.blaster().unwrap();
    let format = document.output_format(blaster.target()).unwrap();
    assert_eq!(format, OutputFormat::CopperList);

    let gradient = blaster.build(&document.gradient_points().unwrap()).unwrap();
    let artifact = assemble(&gradient, &blaster, format, &document.output).unwrap();
    let text = artifact.text().unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "; Gradient Blaster: target=amigaOcs steps=16 blend=linear dither=off"
    );
    assert_eq!(lines[1], "Gradient:");
    assert_eq!(lines[2], "\tdc.w $2b07,$fffe");
    assert_eq!(lines[3], "\tdc.w $180,$000");
    // 16 distinct gray levels: one wait and one move each, plus the end
    assert_eq!(lines.len(), 2 + 16 * 2 + 1);
    assert_eq!(lines[lines.len() - 2], "\tdc.w $180,$fff");
    assert_eq!(lines[lines.len() - 1], "\tdc.w $ffff,$fffe ; End copper list");
    common::assert_copper_lines(text);
}

#[test]
fn test_interlaced_table_flow() {
    let (dir, path) = fixtures::write_document("sunset.yml", fixtures::LACE_SUNSET);
    let document = GradientDocument::load(&path).unwrap();
    let blaster = document.blaster().unwrap();
    let format = document.output_format(blaster.target()).unwrap();

    let gradient = blaster.build(&document.gradient_points().unwrap()).unwrap();
    assert_eq!(gradient.len(), 32);
    let artifact = assemble(&gradient, &blaster, format, &document.output).unwrap();

    let out_dir = dir.path().join("out");
    let written = artifact.write_to(&out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("gradient.s")]);

    let text = std::fs::read_to_string(&written[0]).unwrap();
    assert!(text.starts_with("; Gradient Blaster: target=amigaOcsLace"));
    assert!(text.contains("GradientOdd:\n"));
    assert!(text.contains("GradientEven:\n"));
    // 32 entries per field at 4 per row
    assert_eq!(text.matches("\tdc.w ").count(), 2 * 8);
}

#[test]
fn test_json_binary_flow_is_reproducible() {
    let (dir, path) = fixtures::write_document("ste.json", fixtures::STE_JSON);
    let document = GradientDocument::load(&path).unwrap();
    let blaster = document.blaster().unwrap();
    let format = document.output_format(blaster.target()).unwrap();
    assert_eq!(format, OutputFormat::TableBin);

    let points = document.gradient_points().unwrap();
    let first = assemble(&blaster.build(&points).unwrap(), &blaster, format, &document.output).unwrap();
    let second = assemble(&blaster.build(&points).unwrap(), &blaster, format, &document.output).unwrap();
    assert_eq!(first, second);

    let Artifact::Binary(files) = &first else {
        panic!("Expected binary artifact");
    };
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "gradient.bin");
    assert_eq!(files[0].bytes.len(), 16);
    // First entry is pure blue: level 15 rotates to f, red and green zero
    assert_eq!(&files[0].bytes[..2], &[0x00, 0x0f]);

    let written = first.write_to(dir.path()).unwrap();
    assert_eq!(std::fs::read(&written[0]).unwrap(), files[0].bytes);
}

#[test]
fn test_png_strip_flow() {
    let (dir, path) = fixtures::write_document("gray.yaml", fixtures::OCS_GRAY);
    let document = GradientDocument::load(&path).unwrap();
    let blaster = document.blaster().unwrap();
    let gradient = blaster.build(&document.gradient_points().unwrap()).unwrap();

    let artifact = assemble(&gradient, &blaster, OutputFormat::ImagePng, &document.output).unwrap();
    let written = artifact.write_to(dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("gradient.png")]);
    common::assert_png(&std::fs::read(&written[0]).unwrap());

    let pixels = gradient_blaster::rendering::decode_pixels(&std::fs::read(&written[0]).unwrap()).unwrap();
    // Vertical strip, repeat defaults to the gradient length
    assert_eq!(pixels.len(), 16 * 16);
}

#[test]
fn test_unsupported_format_is_rejected() {
    let (_dir, path) = fixtures::write_document("ste.json", fixtures::STE_JSON);
    let document = GradientDocument::load(&path).unwrap();
    let blaster = document.blaster().unwrap();
    let gradient = blaster.build(&document.gradient_points().unwrap()).unwrap();

    let result = assemble(&gradient, &blaster, OutputFormat::CopperList, &document.output);
    assert!(result.is_err());
}
