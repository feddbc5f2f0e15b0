#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn fixture_path<P: AsRef<Path>>(path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

/// Read a test fixture from a path relative to CARGO_MANIFEST_DIR
pub fn read_fixture<P: AsRef<Path>>(path: P) -> String {
    std::fs::read_to_string(fixture_path(path)).expect("error reading file contents")
}

/// Parse space separated hex codepoints, e.g. `1780 17B6`.
pub fn parse_codepoints(s: &str) -> Vec<char> {
    s.split_whitespace()
        .map(|hex| {
            let cp = u32::from_str_radix(hex, 16).expect("invalid hex codepoint");
            char::from_u32(cp).expect("invalid codepoint")
        })
        .collect()
}

pub struct Case {
    pub line: usize,
    pub input: Vec<char>,
    pub expected: Vec<char>,
}

/// Read `input<TAB>expected` cases, skipping blank lines and `#` comments.
pub fn read_cases<P: AsRef<Path>>(path: P) -> Vec<Case> {
    read_fixture(path)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(index, line)| {
            let (input, expected) = line.split_once('\t').expect("missing tab");
            Case {
                line: index + 1,
                input: parse_codepoints(input),
                expected: parse_codepoints(expected),
            }
        })
        .collect()
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
