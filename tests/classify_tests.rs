use test_case::test_case;
use utf8_index::{is_continuation, utf8_numbytes, INVALID_CHAR};

#[test_case(0x00, 1 ; "nul")]
#[test_case(b'a', 1 ; "ascii letter")]
#[test_case(0x7F, 1 ; "delete")]
#[test_case(0xC2, 2 ; "two byte lead")]
#[test_case(0xDF, 2 ; "last two byte lead")]
#[test_case(0xE0, 3 ; "three byte lead")]
#[test_case(0xEF, 3 ; "last three byte lead")]
#[test_case(0xF0, 4 ; "four byte lead")]
#[test_case(0xF7, 4 ; "last four byte lead")]
#[test_case(0xF8, 5 ; "five byte lead")]
#[test_case(0xFB, 5 ; "last five byte lead")]
#[test_case(0xFC, 6 ; "six byte lead")]
#[test_case(0xFD, 6 ; "last six byte lead")]
fn test_lead_byte_width(byte: u8, width: i32) {
    assert_eq!(utf8_numbytes(byte), width);
}

#[test_case(0x80 ; "first continuation")]
#[test_case(0xA9 ; "continuation")]
#[test_case(0xBF ; "last continuation")]
#[test_case(0xFE ; "fe")]
#[test_case(0xFF ; "ff")]
fn test_invalid_lead_byte(byte: u8) {
    assert_eq!(utf8_numbytes(byte), INVALID_CHAR);
}

#[test]
fn test_classifier_is_total() {
    let mut counts = [0usize; 7];
    for byte in 0..=u8::MAX {
        match utf8_numbytes(byte) {
            INVALID_CHAR => counts[0] += 1,
            width => counts[width as usize] += 1,
        }
    }
    // 64 continuation bytes plus 0xFE and 0xFF
    assert_eq!(counts, [66, 128, 32, 16, 8, 4, 2]);
}

#[test]
fn test_continuation_bytes() {
    assert!(is_continuation(0x80));
    assert!(is_continuation(0xBF));
    assert!(!is_continuation(b'a'));
    assert!(!is_continuation(0xC3));
    assert!(!is_continuation(0xFF));
}
