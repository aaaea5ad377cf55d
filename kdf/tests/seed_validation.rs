//! Seed validation boundary tests

use pbctx_kdf::{KdfError, Seed};

fn reason(err: KdfError) -> String {
    match err {
        KdfError::SeedInvalid { reason } => reason,
        other => panic!("expected SeedInvalid, got {other:?}"),
    }
}

#[test]
fn seven_characters_is_too_short() {
    let err = Seed::from("abcdefg").validate().expect_err("7 chars");
    assert_eq!(reason(err), "must be at least 8 characters long.");
}

#[test]
fn eight_characters_is_accepted() {
    let seed = Seed::from("abcdefgh").validate().expect("8 chars");
    assert_eq!(seed.as_str(), "abcdefgh");
}

#[test]
fn two_hundred_fifty_six_characters_is_accepted() {
    let seed = Seed::from("a".repeat(256)).validate().expect("256 chars");
    assert_eq!(seed.char_count(), 256);
}

#[test]
fn two_hundred_fifty_seven_characters_is_rejected() {
    let err = Seed::from("a".repeat(257)).validate().expect_err("257 chars");
    assert_eq!(reason(err), "must not exceed 256 characters.");
}

#[test]
fn whitespace_only_seed_is_empty_after_trimming() {
    let err = Seed::from("   \t  ").validate().expect_err("blank");
    assert_eq!(reason(err), "must not be empty after trimming.");
}

#[test]
fn length_is_measured_after_trimming() {
    // 7 significant characters padded with whitespace still rejects.
    let err = Seed::from("  abcdefg  ").validate().expect_err("7 chars");
    assert_eq!(reason(err), "must be at least 8 characters long.");
    assert!(Seed::from("  abcdefgh  ").validate().is_ok());
}

#[test]
fn embedded_control_characters_are_rejected() {
    let err = Seed::from("tenant\u{7}key").validate().expect_err("BEL");
    assert_eq!(reason(err), "contains non-printable characters.");
}

#[test]
fn numeric_seed_validates_through_decimal_rendering() {
    assert!(Seed::from(12345678_i64).validate().is_ok());
    let err = Seed::from(1234567_i64).validate().expect_err("7 digits");
    assert_eq!(reason(err), "must be at least 8 characters long.");
}

#[test]
fn byte_seed_validates_through_utf8_decoding() {
    assert!(Seed::from(b"customer-42".as_slice()).validate().is_ok());
}

#[test]
fn rejection_order_reports_the_first_failure() {
    // Shorter than 8 AND containing a control character: length wins.
    let err = Seed::from("a\u{0}b").validate().expect_err("short");
    assert_eq!(reason(err), "must be at least 8 characters long.");
}
