use utf8_index::{utf8_chars, utf8_strlen, utf8_strlen_scalar};

#[test]
fn test_empty_string() {
    assert_eq!(utf8_strlen(b""), 0);
    assert_eq!(utf8_strlen(b"\0"), 0);
}

#[test]
fn test_ascii_and_multibyte() {
    assert_eq!(utf8_strlen(b"hello"), 5);
    assert_eq!(utf8_strlen("héllo".as_bytes()), 5);
    assert_eq!(utf8_strlen("日本語".as_bytes()), 3);
    assert_eq!(utf8_strlen("a😀b".as_bytes()), 3);
}

#[test]
fn test_stray_continuation_byte() {
    assert_eq!(utf8_strlen(b"A\x80B"), 2);
}

#[test]
fn test_invalid_lead_bytes_not_counted() {
    assert_eq!(utf8_strlen(b"\xFEa\xFFb"), 2);
}

#[test]
fn test_truncated_final_character() {
    assert_eq!(utf8_strlen(b"ab\xE2\x82"), 2);
}

#[test]
fn test_stops_at_nul() {
    assert_eq!(utf8_strlen(b"abc\0def"), 3);

    let mut long = vec![b'x'; 100];
    long[70] = 0;
    assert_eq!(utf8_strlen(&long), 70);
}

#[test]
fn test_long_text_matches_std() {
    let text = "Größenwahn — 日本語のテキスト 😀 ".repeat(50);
    assert_eq!(utf8_strlen(text.as_bytes()), text.chars().count());
}

#[test]
fn test_long_text_at_every_offset() {
    let text = "ab€dé😀fg".repeat(20);
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        let s = &bytes[start..];
        assert_eq!(utf8_strlen(s), utf8_strlen_scalar(s), "from byte {start}");
    }
}

#[test]
fn test_malformed_long_text_matches_scalar() {
    let mut bytes = Vec::new();
    for i in 0..400u32 {
        // Cycle through every non-NUL byte value, including stray
        // continuations and leads followed by ASCII
        bytes.push(((i * 37) % 255 + 1) as u8);
    }
    for start in 0..8 {
        let s = &bytes[start..];
        assert_eq!(utf8_strlen(s), utf8_strlen_scalar(s), "from byte {start}");
    }
}

#[test]
fn test_length_equals_chars_yielded() {
    let s = "x\u{80}y\u{800}z\u{10000}".repeat(9);
    assert_eq!(utf8_strlen(s.as_bytes()), utf8_chars(s.as_bytes()).count());
}
