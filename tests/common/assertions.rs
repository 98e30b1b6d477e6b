//! Shared assertions.

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Assert that bytes are a PNG image
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert that every line of a copper list body is a dc.w pair
pub fn assert_copper_lines(text: &str) {
    for line in text.lines().filter(|l| l.starts_with('\t')) {
        assert!(
            line.starts_with("\tdc.w $"),
            "Unexpected copper line: {line:?}"
        );
    }
}
