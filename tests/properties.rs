mod common;

use khmer_legacy::{clusters, reorder, reorder_str, reorder_with, ReorderOptions};

use common::chars;

fn samples() -> Vec<Vec<char>> {
    let mut samples: Vec<Vec<char>> = common::read_cases("tests/fixtures/legacy_order.txt")
        .into_iter()
        .map(|case| case.input)
        .collect();
    samples.extend(
        [
            "",
            "\u{1780}\u{17D2}\u{179A}\u{17BB}\u{1798}\u{17A0}\u{17CA}\u{17BB}\u{1793}",
            "\u{1780}\u{1789}\u{17D2}\u{1785}\u{17D2}\u{179A}\u{17C0}\u{179C} \u{1794}\u{17D2}\u{179A}\u{17B6}\u{1780}\u{17CB}",
            "\u{17D2}\u{17D2}\u{17D2}",
            "\u{17C9}\u{17CC}\u{17B6}\u{1780}\u{17CC}\u{17B6}\u{17C7}",
            "abc \u{1780}\u{17C1}\u{17C7} 123 \u{17E1}\u{17E2}\u{17D4}",
        ]
        .iter()
        .map(|s| chars(s)),
    );
    samples
}

#[test]
fn test_plain_text_unchanged() {
    for text in [
        "",
        "welcome",
        "The quick brown fox, 1234567890!",
        "caf\u{00E9} \u{4E2D}\u{6587} \u{0E01}\u{0E32}",
        "\u{17D4}\u{17E0}\u{17E9}\u{17F0}",
    ] {
        assert_eq!(reorder_str(text), text);
    }
}

#[test]
fn test_length_never_decreases() {
    for sample in samples() {
        let output = reorder(&sample);
        assert!(output.len() >= sample.len(), "{:?} -> {:?}", sample, output);
    }
}

#[test]
fn test_only_marks_added() {
    for sample in samples() {
        // Split vowels are written as two parts.
        let mut input: Vec<char> = sample
            .iter()
            .flat_map(|&ch| match khmer_legacy::khmer::split_vowel(ch) {
                Some((before, rest)) => vec![before, rest],
                None => vec![ch],
            })
            .collect();
        let mut output: Vec<char> = reorder(&sample)
            .into_iter()
            .filter(|&ch| ch != khmer_legacy::MARK)
            .collect();
        input.sort_unstable();
        output.sort_unstable();
        assert_eq!(input, output);
    }
}

#[test]
fn test_clusters_cover_input() {
    for sample in samples() {
        let mut expected_start = 0;
        for range in clusters(&sample) {
            assert_eq!(range.start, expected_start);
            assert!(range.end > range.start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, sample.len());
    }
}

#[test]
fn test_cluster_independence() {
    for sample in samples() {
        let whole = reorder(&sample);
        for range in clusters(&sample) {
            let (head, tail) = sample.split_at(range.end);
            let mut joined = reorder(head);
            joined.extend(reorder(tail));
            assert_eq!(whole, joined, "split {:?} at {}", sample, range.end);
        }
    }
}

#[test]
fn test_deterministic() {
    for sample in samples() {
        assert_eq!(reorder(&sample), reorder(&sample));
    }
}

#[test]
fn test_joined_cluster_independence() {
    let options = ReorderOptions::default().with_joiners(true);
    for case in common::read_cases("tests/fixtures/legacy_order_joiners.txt") {
        let sample = case.input;
        let whole = reorder_with(&sample, &options);
        for range in clusters(&sample).with_joiners(true) {
            let (head, tail) = sample.split_at(range.end);
            let mut joined = reorder_with(head, &options);
            joined.extend(reorder_with(tail, &options));
            assert_eq!(whole, joined, "split {:?} at {}", sample, range.end);
        }
    }
}
