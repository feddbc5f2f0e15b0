mod common;

use khmer_legacy::khmer::{COENG, RO};
use khmer_legacy::{
    classify, classify_str, reorder, reorder_str, reorder_with, CharClass, ClassifyError,
    ReorderOptions, DOTTED_CIRCLE, MARK,
};

use common::chars;

#[test]
fn test_legacy_order_fixtures() {
    let cases = common::read_cases("tests/fixtures/legacy_order.txt");
    assert!(!cases.is_empty());

    for case in cases {
        let actual = reorder(&case.input);
        assert_eq!(
            case.expected, actual,
            "line {}: {:?}",
            case.line, case.input
        );
    }
}

#[test]
fn test_legacy_order_joiner_fixtures() {
    let cases = common::read_cases("tests/fixtures/legacy_order_joiners.txt");
    assert!(!cases.is_empty());

    let options = ReorderOptions::default().with_joiners(true);
    for case in cases {
        let actual = reorder_with(&case.input, &options);
        assert_eq!(
            case.expected, actual,
            "line {}: {:?}",
            case.line, case.input
        );
    }
}

#[test]
fn test_joiners_pass_through_by_default() {
    // KA AA ZWJ COENG KHA: without joiners ZWJ ends the cluster and is copied.
    assert_eq!(
        reorder_str("\u{1780}\u{17B6}\u{200D}\u{17D2}\u{1781}"),
        "\u{1780}\u{17B6}\u{200D}\u{17D2}\u{1781}"
    );
}

#[test]
fn test_deepened_vowel_below_subscript() {
    // KA COENG TA UU
    let actual = reorder(&chars("\u{1780}\u{17D2}\u{178F}\u{17BC}"));
    assert_eq!(
        actual,
        vec!['\u{1780}', COENG, '\u{178F}', MARK, '\u{17BC}']
    );
}

#[test]
fn test_deepened_vowel_below_la_and_nyo() {
    assert_eq!(
        reorder_str("\u{17A1}\u{17BB}"),
        format!("\u{17A1}{}\u{17BB}", MARK)
    );
    assert_eq!(
        reorder_str("\u{1789}\u{17BB}"),
        format!("\u{1789}{}\u{17BB}", MARK)
    );
    // Other consonants keep the normal vowel.
    assert_eq!(reorder_str("\u{1780}\u{17BB}"), "\u{1780}\u{17BB}");
}

#[test]
fn test_subscript_ro_before_base() {
    let actual = reorder(&chars("\u{1782}\u{17D2}\u{179A}"));
    assert_eq!(actual, vec![COENG, RO, '\u{1782}']);
}

#[test]
fn test_standalone_vowel_placeholder() {
    let options = ReorderOptions::default().with_placeholder(Some(DOTTED_CIRCLE));
    let reorder_dc = |s: &str| reorder_with(&chars(s), &options);

    // after
    assert_eq!(reorder_dc("\u{17B6}"), vec![DOTTED_CIRCLE, '\u{17B6}']);
    // before
    assert_eq!(reorder_dc("\u{17C1}"), vec!['\u{17C1}', DOTTED_CIRCLE]);
    // below
    assert_eq!(reorder_dc("\u{17BB}"), vec![DOTTED_CIRCLE, '\u{17BB}']);
    // split: before and above
    assert_eq!(
        reorder_dc("\u{17BE}"),
        vec!['\u{17C1}', DOTTED_CIRCLE, '\u{17B8}']
    );
    // one placeholder per cluster
    assert_eq!(
        reorder_dc("\u{17C4}\u{17C7}"),
        vec!['\u{17C1}', DOTTED_CIRCLE, '\u{17B6}', DOTTED_CIRCLE, '\u{17C7}']
    );
}

#[test]
fn test_placeholder_not_used_with_base() {
    let options = ReorderOptions::default().with_placeholder(Some(DOTTED_CIRCLE));
    let actual = reorder_with(&chars("\u{1780}\u{17B6}"), &options);
    assert_eq!(actual, vec!['\u{1780}', '\u{17B6}']);
}

#[test]
fn test_lone_coeng() {
    let options = ReorderOptions::default().with_placeholder(Some(DOTTED_CIRCLE));
    assert_eq!(reorder_with(&[COENG], &options), vec![DOTTED_CIRCLE, COENG]);
    assert_eq!(reorder(&[COENG]), vec![COENG]);
}

#[test]
fn test_trailing_coeng_kept() {
    assert_eq!(reorder_str("\u{1780}\u{17D2}"), "\u{1780}\u{17D2}");
    assert_eq!(
        reorder_str("\u{1780}\u{17B6}\u{1780}\u{17D2}"),
        "\u{1780}\u{17B6}\u{1780}\u{17D2}"
    );
}

#[test]
fn test_mixed_with_latin() {
    // KO OO followed by a Latin word
    assert_eq!(
        reorder_str("\u{1782}\u{17C4}hello"),
        "\u{17C1}\u{1782}\u{17B6}hello"
    );
    assert_eq!(
        reorder_str("hello \u{1782}\u{17C4}, world"),
        "hello \u{17C1}\u{1782}\u{17B6}, world"
    );
}

#[test]
fn test_khmer_punctuation_passes_through() {
    // KHAN and Khmer digits end clusters and are copied
    assert_eq!(
        reorder_str("\u{1782}\u{17C1}\u{17D4}\u{17E1}\u{17E2}"),
        "\u{17C1}\u{1782}\u{17D4}\u{17E1}\u{17E2}"
    );
}

#[test]
fn test_classify_str_rejects_multiple_chars() {
    assert_eq!(
        classify_str("\u{1780}\u{17B6}"),
        Err(ClassifyError::TooManyChars(2))
    );
    assert_eq!(classify_str(""), Err(ClassifyError::Empty));
    assert_eq!(classify_str("\u{17D2}").map(|info| info.class), Ok(CharClass::Coeng));
}

#[test]
fn test_classify_outside_block() {
    assert_eq!(classify('A').class, CharClass::Reserved);
    assert_eq!(classify('\u{17E0}').class, CharClass::Reserved);
}
