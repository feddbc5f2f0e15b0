//! Khmer syllable cluster segmentation.
//!
//! A cluster is the longest run of characters accepted by the syllable state machine from its
//! initial state. While scanning, each character is bucketed into a [`Slots`] record according
//! to its class, ready for reassembly into legacy order by [`reorder`](crate::reorder).

use std::ops::Range;

use log::trace;
use tinyvec::{array_vec, ArrayVec};

use crate::khmer::{self, CharClass, CharInfo, Pos, CLASS_COUNT, COENG};

/////////////////////////////////////////////////////////////////////////////
// Syllable state machine
/////////////////////////////////////////////////////////////////////////////

const STATE_COUNT: usize = 21;

const INITIAL_STATE: usize = 0;

// Reject: end the cluster without consuming the character.
const X: u8 = u8::MAX;

#[rustfmt::skip]
static STATE_TABLE: [[u8; CLASS_COUNT]; STATE_COUNT] = [
    // xx  c1  c2  c3 zwnj cs  rb  co  dv  sa  sp zwj
    [  1,  2,  2,  2,  1,  1,  1,  6,  1,  1,  1,  2], //  0 - ground state
    [  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X], //  1 - exit state (or sign after the syllable)
    [  X,  X,  X,  X,  3,  4,  5,  6, 16, 17,  1,  X], //  2 - base consonant
    [  X,  X,  X,  X,  X,  4,  X,  X, 16,  X,  X,  X], //  3 - first ZWNJ before a register shifter
    [  X,  X,  X,  X, 15,  X,  X,  6, 16, 17,  1, 14], //  4 - first register shifter
    [  X,  X,  X,  X,  X,  X,  X,  X, 20,  X,  1,  X], //  5 - robat
    [  X,  7,  8,  9,  X,  X,  X,  X,  X,  X,  X,  X], //  6 - first coeng
    [  X,  X,  X,  X, 12, 13,  X, 10, 16, 17,  1, 14], //  7 - first consonant of type 1 after coeng
    [  X,  X,  X,  X, 12, 13,  X,  X, 16, 17,  1, 14], //  8 - first consonant of type 2 after coeng
    [  X,  X,  X,  X, 12, 13,  X, 10, 16, 17,  1, 14], //  9 - first consonant of type 3 after coeng
    [  X, 11, 11, 11,  X,  X,  X,  X,  X,  X,  X,  X], // 10 - second coeng (no register shifter before)
    [  X,  X,  X,  X, 15,  X,  X,  X, 16, 17,  1, 14], // 11 - second coeng consonant, no register shifter before
    [  X,  X,  X,  X,  X, 13,  X,  X, 16,  X,  X,  X], // 12 - second ZWNJ before a register shifter
    [  X,  X,  X,  X, 15,  X,  X,  X, 16, 17,  1, 14], // 13 - second register shifter
    [  X,  X,  X,  X,  X,  X,  X,  X, 16,  X,  X,  X], // 14 - ZWJ before vowel
    [  X,  X,  X,  X,  X,  X,  X,  X, 16,  X,  X,  X], // 15 - ZWNJ before vowel
    [  X,  X,  X,  X,  X,  X,  X,  X,  X, 17,  1, 18], // 16 - dependent vowel
    [  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  1, 18], // 17 - sign above
    [  X,  X,  X,  X,  X,  X,  X, 19,  X,  X,  X,  X], // 18 - ZWJ after vowel
    [  X,  1,  X,  1,  X,  X,  X,  X,  X,  X,  X,  X], // 19 - third coeng
    [  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  1,  X], // 20 - dependent vowel after a robat
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Transition {
    Advance(usize),
    Reject,
}

fn transition(state: usize, class: CharClass) -> Transition {
    match STATE_TABLE[state][class.index()] {
        X => Transition::Reject,
        next => Transition::Advance(usize::from(next)),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Slots
/////////////////////////////////////////////////////////////////////////////

/// The contents of one slot: a character, or a coeng followed by its consonant, optionally
/// preceded by one or more marks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Token {
    marks: u8,
    chars: ArrayVec<[char; 2]>,
}

impl Token {
    pub(crate) fn new(ch: char) -> Token {
        Token {
            marks: 0,
            chars: array_vec!([char; 2] => ch),
        }
    }

    /// A subscript consonant: coeng followed by `ch`.
    pub(crate) fn subscript(ch: char) -> Token {
        Token {
            marks: 0,
            chars: array_vec!([char; 2] => COENG, ch),
        }
    }

    pub(crate) fn mark(&mut self) {
        self.marks += 1;
    }

    pub(crate) fn marked(mut self) -> Token {
        self.mark();
        self
    }

    pub(crate) fn unmark(&mut self) {
        self.marks = 0;
    }

    pub(crate) fn marks(&self) -> u8 {
        self.marks
    }

    /// True if this is exactly `ch`, without marks.
    pub(crate) fn is(&self, ch: char) -> bool {
        self.marks == 0 && self.chars.as_slice() == [ch]
    }

    /// True if this is exactly coeng + `ch`, without marks.
    pub(crate) fn is_subscript(&self, ch: char) -> bool {
        self.marks == 0 && self.chars.as_slice() == [COENG, ch]
    }

    pub(crate) fn last_char(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// The character of a one-character token, ignoring marks.
    pub(crate) fn single(&self) -> Option<char> {
        match self.chars.as_slice() {
            [ch] => Some(*ch),
            _ => None,
        }
    }

    pub(crate) fn write(&self, mark: char, out: &mut Vec<char>) {
        out.extend(std::iter::repeat(mark).take(usize::from(self.marks)));
        out.extend_from_slice(&self.chars);
    }
}

/// The components of a cluster, bucketed by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slots {
    pub(crate) base: Option<Token>,
    pub(crate) robat: Option<Token>,
    pub(crate) shifter: Option<Token>,
    pub(crate) coeng1: Option<Token>,
    pub(crate) coeng2: Option<Token>,
    pub(crate) vowel_before: Option<Token>,
    pub(crate) vowel_below: Option<Token>,
    pub(crate) vowel_above: Option<Token>,
    pub(crate) vowel_after: Option<Token>,
    pub(crate) sign_above: Option<Token>,
    pub(crate) sign_after: Option<Token>,
    /// A character that does not combine; copied through after the cluster.
    pub(crate) reserved: Option<char>,
    /// A coeng has been seen and is waiting for its consonant.
    pub(crate) coeng_pending: bool,
    /// The shifter came after the first subscript.
    pub(crate) shifter_after_coeng: bool,
}

impl Slots {
    fn collect(&mut self, ch: char, info: CharInfo) {
        match info.class {
            CharClass::Reserved => self.reserved = Some(ch),
            CharClass::SignAbove => self.sign_above = Some(Token::new(ch)),
            CharClass::SignAfter => self.sign_after = Some(Token::new(ch)),
            CharClass::Consonant | CharClass::Consonant2 | CharClass::Consonant3 => {
                if self.coeng_pending {
                    if self.coeng1.is_none() {
                        self.coeng1 = Some(Token::subscript(ch));
                    } else {
                        self.coeng2 = Some(Token::subscript(ch));
                    }
                    self.coeng_pending = false;
                } else {
                    self.base = Some(Token::new(ch));
                }
            }
            CharClass::Robat => self.robat = Some(Token::new(ch)),
            CharClass::ConsonantShifter => {
                if self.coeng1.is_some() {
                    self.shifter_after_coeng = true;
                }
                self.shifter = Some(Token::new(ch));
            }
            CharClass::DependentVowel => match khmer::split_vowel(ch) {
                Some((before, rest)) if info.is_split_vowel() => {
                    self.vowel_before = Some(Token::new(before));
                    self.set_vowel(info.pos, rest);
                }
                _ => self.set_vowel(info.pos, ch),
            },
            CharClass::Coeng => self.coeng_pending = true,
            CharClass::NonJoiner | CharClass::Joiner => {}
        }
    }

    fn set_vowel(&mut self, pos: Option<Pos>, ch: char) {
        let slot = match pos {
            Some(Pos::Before) => &mut self.vowel_before,
            Some(Pos::Below) => &mut self.vowel_below,
            Some(Pos::Above) => &mut self.vowel_above,
            Some(Pos::After) => &mut self.vowel_after,
            None => return,
        };
        *slot = Some(Token::new(ch));
    }
}

/////////////////////////////////////////////////////////////////////////////
// Scanning
/////////////////////////////////////////////////////////////////////////////

/// Scan the cluster starting at `start`, returning the index one past its end.
///
/// At least one character is always consumed when `start < cs.len()`, since every class has a
/// transition out of the initial state.
pub(crate) fn next_cluster(
    cs: &[char],
    start: usize,
    classify: impl Fn(char) -> CharInfo,
    slots: &mut Slots,
) -> usize {
    let mut state = INITIAL_STATE;
    let mut cursor = start;

    while let Some(&ch) = cs.get(cursor) {
        let info = classify(ch);
        match transition(state, info.class) {
            Transition::Reject => break,
            Transition::Advance(next) => {
                state = next;
                slots.collect(ch, info);
                cursor += 1;
            }
        }
    }

    trace!("cluster {}..{} ended in state {}", start, cursor, state);
    cursor
}

/// Iterator over the cluster boundaries of a character sequence.
///
/// Created by [`clusters`].
#[derive(Clone, Debug)]
pub struct Clusters<'a> {
    cs: &'a [char],
    cursor: usize,
    joiners: bool,
}

/// Split `cs` into the clusters used for legacy reordering.
///
/// Clusters are contiguous, non-empty and cover the whole input.
///
/// ```
/// use khmer_legacy::clusters;
///
/// let text: Vec<char> = "\u{1780}\u{17B6}\u{1794}\u{17CB}x".chars().collect();
/// let ranges: Vec<_> = clusters(&text).collect();
/// assert_eq!(ranges, vec![0..2, 2..4, 4..5]);
/// ```
pub fn clusters(cs: &[char]) -> Clusters<'_> {
    Clusters {
        cs,
        cursor: 0,
        joiners: false,
    }
}

impl<'a> Clusters<'a> {
    /// Recognise ZWNJ and ZWJ while segmenting, see [`khmer::classify_extended`].
    pub fn with_joiners(mut self, joiners: bool) -> Self {
        self.joiners = joiners;
        self
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.cursor >= self.cs.len() {
            return None;
        }
        let start = self.cursor;
        let mut slots = Slots::default();
        self.cursor = next_cluster(self.cs, start, khmer::classifier(self.joiners), &mut slots);
        Some(start..self.cursor)
    }
}
