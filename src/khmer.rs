//! Classification of Khmer characters for legacy reordering.
//!
//! Each character in the Khmer block U+1780..U+17DF has a fixed class, which drives the
//! syllable state machine in [`cluster`](crate::cluster), plus a set of property flags and an
//! optional position relative to the base consonant. Anything outside that block is
//! [`CharClass::Reserved`].

use bitflags::bitflags;

use crate::error::ClassifyError;

pub const NYO: char = '\u{1789}';
pub const DA: char = '\u{178A}';
pub const BA: char = '\u{1794}';
pub const YO: char = '\u{1799}';
pub const RO: char = '\u{179A}';
pub const SA: char = '\u{179F}';
pub const LA: char = '\u{17A1}';

pub const SRA_AA: char = '\u{17B6}';
pub const SRA_II: char = '\u{17B8}';
pub const SRA_OE: char = '\u{17BE}';
pub const SRA_YA: char = '\u{17BF}';
pub const SRA_IE: char = '\u{17C0}';
pub const SRA_E: char = '\u{17C1}';
pub const SRA_OO: char = '\u{17C4}';
pub const SRA_AU: char = '\u{17C5}';

pub const MUUSIKATOAN: char = '\u{17C9}';
pub const TRIISAP: char = '\u{17CA}';
pub const SAMYOK_SANNYA: char = '\u{17D0}';
pub const COENG: char = '\u{17D2}';

/// Mark placed in front of a character to select its alternate legacy glyph.
pub const MARK: char = '\u{17EA}';

pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

const BLOCK_START: u32 = 0x1780;

/// Character class, as used by the syllable state machine.
///
/// The discriminant is the column index into the transition table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Does not combine into a syllable: digits, punctuation, non-Khmer text.
    Reserved = 0,
    /// Consonant of type 1, or an independent vowel.
    Consonant = 1,
    /// Consonant of type 2 (only RO).
    Consonant2 = 2,
    /// Consonant of type 3.
    Consonant3 = 3,
    NonJoiner = 4,
    ConsonantShifter = 5,
    Robat = 6,
    Coeng = 7,
    DependentVowel = 8,
    SignAbove = 9,
    SignAfter = 10,
    Joiner = 11,
}

pub(crate) const CLASS_COUNT: usize = 12;

impl CharClass {
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            CharClass::Consonant | CharClass::Consonant2 | CharClass::Consonant3
        )
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct CharFlags: u8 {
        const CONSONANT     = 1 << 0;
        /// The first part of the vowel is placed in front of the syllable.
        const SPLIT_VOWEL   = 1 << 1;
        /// Needs a dotted circle when it starts a syllable.
        const DOTTED_CIRCLE = 1 << 2;
        const COENG         = 1 << 3;
        const SHIFTER       = 1 << 4;
        const ABOVE_VOWEL   = 1 << 5;
    }
}

/// Position of a mark relative to the base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pos {
    Before,
    Below,
    Above,
    After,
}

/// The classification of a single character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharInfo {
    pub class: CharClass,
    pub flags: CharFlags,
    pub pos: Option<Pos>,
}

impl CharInfo {
    const fn new(class: CharClass, flags: CharFlags, pos: Option<Pos>) -> CharInfo {
        CharInfo { class, flags, pos }
    }

    pub fn is_split_vowel(&self) -> bool {
        self.flags.contains(CharFlags::SPLIT_VOWEL)
    }
}

impl Default for CharInfo {
    fn default() -> Self {
        CC_XX
    }
}

const fn dotted(flags: CharFlags) -> CharFlags {
    flags.union(CharFlags::DOTTED_CIRCLE)
}

const CC_XX: CharInfo = CharInfo::new(CharClass::Reserved, CharFlags::empty(), None);
const CC_SA: CharInfo = CharInfo::new(
    CharClass::SignAbove,
    dotted(CharFlags::empty()),
    Some(Pos::Above),
);
const CC_SP: CharInfo = CharInfo::new(
    CharClass::SignAfter,
    dotted(CharFlags::empty()),
    Some(Pos::After),
);
const CC_C1: CharInfo = CharInfo::new(CharClass::Consonant, CharFlags::CONSONANT, None);
const CC_C2: CharInfo = CharInfo::new(CharClass::Consonant2, CharFlags::CONSONANT, None);
const CC_C3: CharInfo = CharInfo::new(CharClass::Consonant3, CharFlags::CONSONANT, None);
const CC_RB: CharInfo = CharInfo::new(
    CharClass::Robat,
    dotted(CharFlags::empty()),
    Some(Pos::Above),
);
const CC_CS: CharInfo = CharInfo::new(
    CharClass::ConsonantShifter,
    dotted(CharFlags::SHIFTER),
    None,
);
const CC_DL: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::empty()),
    Some(Pos::Before),
);
const CC_DB: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::empty()),
    Some(Pos::Below),
);
const CC_DA: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::ABOVE_VOWEL),
    Some(Pos::Above),
);
const CC_DR: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::empty()),
    Some(Pos::After),
);
const CC_CO: CharInfo = CharInfo::new(CharClass::Coeng, dotted(CharFlags::COENG), None);
// Split vowels: the first part goes before the base, the second above or after it.
const CC_VA: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::ABOVE_VOWEL.union(CharFlags::SPLIT_VOWEL)),
    Some(Pos::Above),
);
const CC_VR: CharInfo = CharInfo::new(
    CharClass::DependentVowel,
    dotted(CharFlags::SPLIT_VOWEL),
    Some(Pos::After),
);

const CC_NJ: CharInfo = CharInfo::new(CharClass::NonJoiner, CharFlags::empty(), None);
const CC_JR: CharInfo = CharInfo::new(CharClass::Joiner, CharFlags::empty(), None);

#[rustfmt::skip]
static KHMER_CHAR_INFO: [CharInfo; 96] = [
    CC_C1, // 1780 Ka
    CC_C1, // 1781 Kha
    CC_C1, // 1782 Ko
    CC_C3, // 1783 Kho
    CC_C1, // 1784 Ngo
    CC_C1, // 1785 Ca
    CC_C1, // 1786 Cha
    CC_C1, // 1787 Co
    CC_C3, // 1788 Cho
    CC_C1, // 1789 Nyo
    CC_C1, // 178A Da
    CC_C1, // 178B Ttha
    CC_C1, // 178C Do
    CC_C3, // 178D Ttho
    CC_C1, // 178E Nno
    CC_C1, // 178F Ta
    CC_C1, // 1790 Tha
    CC_C1, // 1791 To
    CC_C1, // 1792 Tho
    CC_C1, // 1793 No
    CC_C3, // 1794 Ba
    CC_C1, // 1795 Pha
    CC_C1, // 1796 Po
    CC_C1, // 1797 Pho
    CC_C1, // 1798 Mo
    CC_C3, // 1799 Yo
    CC_C2, // 179A Ro
    CC_C1, // 179B Lo
    CC_C1, // 179C Vo
    CC_C1, // 179D Sha
    CC_C3, // 179E Sso
    CC_C3, // 179F Sa
    CC_C1, // 17A0 Ha
    CC_C3, // 17A1 La
    CC_C1, // 17A2 Qa
    CC_C1, // 17A3 Qaq
    CC_C1, // 17A4 Qaa
    CC_C1, // 17A5 Qi
    CC_C1, // 17A6 Qii
    CC_C1, // 17A7 Qu
    CC_C1, // 17A8 Quk
    CC_C1, // 17A9 Quu
    CC_C1, // 17AA Quuv
    CC_C1, // 17AB Ry
    CC_C1, // 17AC Ryy
    CC_C1, // 17AD Ly
    CC_C1, // 17AE Lyy
    CC_C1, // 17AF Qe
    CC_C1, // 17B0 Qai
    CC_C1, // 17B1 Qoo Type One
    CC_C1, // 17B2 Qoo Type Two
    CC_C1, // 17B3 Qau
    CC_DR, // 17B4 Inherent Aq
    CC_DR, // 17B5 Inherent Aa
    CC_DR, // 17B6 Sign Aa
    CC_DA, // 17B7 Sign I
    CC_DA, // 17B8 Sign Ii
    CC_DA, // 17B9 Sign Y
    CC_DA, // 17BA Sign Yy
    CC_DB, // 17BB Sign U
    CC_DB, // 17BC Sign Uu
    CC_DB, // 17BD Sign Ua
    CC_VA, // 17BE Sign Oe
    CC_VR, // 17BF Sign Ya
    CC_VR, // 17C0 Sign Ie
    CC_DL, // 17C1 Sign E
    CC_DL, // 17C2 Sign Ae
    CC_DL, // 17C3 Sign Ai
    CC_VR, // 17C4 Sign Oo
    CC_VR, // 17C5 Sign Au
    CC_SA, // 17C6 Nikahit
    CC_SP, // 17C7 Reahmuk
    CC_SP, // 17C8 Yuukaleapintu
    CC_CS, // 17C9 Muusikatoan
    CC_CS, // 17CA Triisap
    CC_SA, // 17CB Bantoc
    CC_RB, // 17CC Robat
    CC_SA, // 17CD Toandakhiat
    CC_SA, // 17CE Kakabat
    CC_SA, // 17CF Ahsda
    CC_SA, // 17D0 Samyok Sannya
    CC_SA, // 17D1 Viriam
    CC_CO, // 17D2 Sign Coeng
    CC_SA, // 17D3 Bathamasat
    CC_XX, // 17D4 Khan
    CC_XX, // 17D5 Bariyoosan
    CC_XX, // 17D6 Camnuc Pii Kuuh
    CC_XX, // 17D7 Lek Too
    CC_XX, // 17D8 Beyyal
    CC_XX, // 17D9 Phnaek Muan
    CC_XX, // 17DA Koomuut
    CC_XX, // 17DB Riel
    CC_XX, // 17DC Avakrahasanya
    CC_SA, // 17DD Atthacan
    CC_XX, // 17DE
    CC_XX, // 17DF
];

/// Classify a single character.
///
/// Characters outside U+1780..U+17DF are [`CharClass::Reserved`] with no flags.
pub fn classify(ch: char) -> CharInfo {
    (ch as u32)
        .checked_sub(BLOCK_START)
        .and_then(|offset| KHMER_CHAR_INFO.get(offset as usize))
        .copied()
        .unwrap_or(CC_XX)
}

/// Like [`classify`], but also recognises ZWNJ (U+200C) and ZWJ (U+200D).
pub fn classify_extended(ch: char) -> CharInfo {
    match ch {
        ZWNJ => CC_NJ,
        ZWJ => CC_JR,
        _ => classify(ch),
    }
}

pub(crate) fn classifier(joiners: bool) -> fn(char) -> CharInfo {
    if joiners {
        classify_extended
    } else {
        classify
    }
}

/// Classify a string that must hold exactly one character.
pub fn classify_str(s: &str) -> Result<CharInfo, ClassifyError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ClassifyError::Empty),
        (Some(ch), None) => Ok(classify(ch)),
        (Some(_), Some(_)) => Err(ClassifyError::TooManyChars(s.chars().count())),
    }
}

/// Decompose a split vowel into its leading part and the part placed above or after the base.
pub fn split_vowel(ch: char) -> Option<(char, char)> {
    match ch {
        SRA_OE => Some((SRA_E, SRA_II)),
        SRA_YA => Some((SRA_E, SRA_YA)),
        SRA_IE => Some((SRA_E, SRA_IE)),
        SRA_OO => Some((SRA_E, SRA_AA)),
        SRA_AU => Some((SRA_E, SRA_AU)),
        _ => None,
    }
}
