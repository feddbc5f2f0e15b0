//! Reordering of Khmer clusters into legacy visual order.
//!
//! Each cluster found by the syllable state machine is corrected by a fixed sequence of
//! contextual rules, which may put a mark in front of a component so that a legacy font picks
//! its alternate glyph, and then written out in visual order.

use log::debug;

use crate::cluster::{next_cluster, Slots, Token};
use crate::khmer::{
    self, BA, COENG, LA, MARK, MUUSIKATOAN, NYO, RO, SA, SAMYOK_SANNYA, SRA_AA, SRA_AU, TRIISAP,
    YO,
};

/// Options controlling legacy reordering.
///
/// The default reproduces the standard Limon conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReorderOptions {
    /// Emitted in place of the base of a cluster that has none, e.g. a lone vowel sign.
    ///
    /// `None` emits nothing. [`DOTTED_CIRCLE`](crate::DOTTED_CIRCLE) is a common choice for
    /// fonts that have one.
    pub placeholder: Option<char>,
    /// Mark put in front of a component to select its alternate glyph.
    pub mark: char,
    /// Treat ZWNJ and ZWJ as joiners rather than as characters that end a cluster.
    ///
    /// Joiners consumed this way are not written to the output.
    pub recognise_joiners: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        ReorderOptions {
            placeholder: None,
            mark: MARK,
            recognise_joiners: false,
        }
    }
}

impl ReorderOptions {
    pub fn with_placeholder(self, placeholder: Option<char>) -> Self {
        ReorderOptions {
            placeholder,
            ..self
        }
    }

    pub fn with_mark(self, mark: char) -> Self {
        ReorderOptions { mark, ..self }
    }

    pub fn with_joiners(self, recognise_joiners: bool) -> Self {
        ReorderOptions {
            recognise_joiners,
            ..self
        }
    }
}

/// Reorder logical-order Khmer text into legacy visual order.
///
/// Characters that are not part of a Khmer cluster are copied through unchanged.
///
/// ```
/// use khmer_legacy::reorder;
///
/// // KO SIGN-E -> SIGN-E KO
/// let text: Vec<char> = "\u{1782}\u{17C1}".chars().collect();
/// assert_eq!(reorder(&text), vec!['\u{17C1}', '\u{1782}']);
/// ```
pub fn reorder(cs: &[char]) -> Vec<char> {
    reorder_with(cs, &ReorderOptions::default())
}

pub fn reorder_with(cs: &[char], options: &ReorderOptions) -> Vec<char> {
    let classify = khmer::classifier(options.recognise_joiners);
    let mut out = Vec::with_capacity(cs.len());
    let mut cursor = 0;

    while cursor < cs.len() {
        let mut slots = Slots::default();
        cursor = next_cluster(cs, cursor, classify, &mut slots);
        reassemble(slots, options, &mut out);
    }

    out
}

/// Reorder a string, see [`reorder`].
pub fn reorder_str(text: &str) -> String {
    reorder_str_with(text, &ReorderOptions::default())
}

pub fn reorder_str_with(text: &str, options: &ReorderOptions) -> String {
    let cs: Vec<char> = text.chars().collect();
    reorder_with(&cs, options).into_iter().collect()
}

/// Decisions made by the correction rules that affect assembly.
#[derive(Debug, Default)]
struct Layout {
    /// A subscript RO moved in front of the base.
    coeng_before: Option<Token>,
    missing_base: bool,
    /// BA followed directly by its AA or AU vowel.
    ba_vowel: bool,
}

fn reassemble(mut slots: Slots, options: &ReorderOptions, out: &mut Vec<char>) {
    deepen_vowels(&mut slots);
    let coeng_before = place_subscripts(&mut slots);
    mark_shifter(&mut slots);
    complete_coeng(&mut slots);

    let missing_base = slots.base.is_none()
        && (coeng_before.is_some()
            || [
                &slots.vowel_before,
                &slots.robat,
                &slots.shifter,
                &slots.coeng1,
                &slots.coeng2,
                &slots.vowel_after,
                &slots.vowel_below,
                &slots.vowel_above,
                &slots.sign_above,
                &slots.sign_after,
            ]
            .iter()
            .any(|slot| slot.is_some()));
    if missing_base {
        debug!("cluster without base, using placeholder {:?}", options.placeholder);
    }

    let ba_vowel = ba_vowel_order(&mut slots);
    let layout = Layout {
        coeng_before,
        missing_base,
        ba_vowel,
    };
    assemble(&slots, &layout, options, out);
}

fn is(slot: &Option<Token>, ch: char) -> bool {
    slot.as_ref().is_some_and(|token| token.is(ch))
}

fn is_subscript(slot: &Option<Token>, ch: char) -> bool {
    slot.as_ref().is_some_and(|token| token.is_subscript(ch))
}

fn mark(slot: &mut Option<Token>) {
    if let Some(token) = slot {
        token.mark();
    }
}

// Vowels below a subscript, or below LA or NYO, are drawn lower.
fn deepen_vowels(slots: &mut Slots) {
    if slots.coeng1.is_some() && slots.vowel_below.is_some() {
        mark(&mut slots.vowel_below);
    } else if (is(&slots.base, LA) || is(&slots.base, NYO)) && slots.vowel_below.is_some() {
        mark(&mut slots.vowel_below);
    } else if slots.coeng1.is_some()
        && slots.vowel_before.is_some()
        && slots.vowel_after.is_some()
    {
        mark(&mut slots.vowel_after);
    }
}

// A subscript RO is drawn on the left of the base. NYO takes a different form when it has a
// subscript.
fn place_subscripts(slots: &mut Slots) -> Option<Token> {
    let mut coeng_before = None;
    if is_subscript(&slots.coeng1, RO) {
        coeng_before = slots.coeng1.take();
    } else if is_subscript(&slots.coeng2, RO) {
        coeng_before = slots.coeng2.take().map(Token::marked);
    }

    if slots.coeng1.is_some() || slots.coeng2.is_some() {
        if is(&slots.base, NYO) {
            mark(&mut slots.base);
            if is_subscript(&slots.coeng1, NYO) {
                mark(&mut slots.coeng1);
            }
        }
        if slots.coeng1.is_some() && slots.coeng2.is_some() {
            mark(&mut slots.coeng2);
        }
    }

    coeng_before
}

// Choose between the shifter and whatever else sits above the base.
fn mark_shifter(slots: &mut Slots) {
    if slots.base.is_none() || slots.shifter.is_none() {
        return;
    }

    if slots.vowel_above.is_some() && is(&slots.base, BA) && is(&slots.shifter, TRIISAP) {
        mark(&mut slots.vowel_above);
    } else if slots.vowel_above.is_some() {
        mark(&mut slots.shifter);
    } else if is(&slots.sign_above, SAMYOK_SANNYA) && is(&slots.shifter, MUUSIKATOAN) {
        mark(&mut slots.shifter);
    } else if slots.sign_above.is_some() && slots.vowel_after.is_some() {
        mark(&mut slots.shifter);
    } else if slots.sign_above.is_some() {
        mark(&mut slots.sign_above);
    }

    if slots.coeng1.is_some() && (slots.vowel_above.is_some() || slots.sign_above.is_some()) {
        mark(&mut slots.shifter);
    }
    if is(&slots.base, LA) || is(&slots.base, NYO) {
        mark(&mut slots.shifter);
    }
}

// Input ended straight after a coeng.
fn complete_coeng(slots: &mut Slots) {
    if !slots.coeng_pending {
        return;
    }
    if slots.coeng1.is_none() {
        slots.coeng1 = Some(Token::new(COENG));
    } else if slots.coeng2.is_none() {
        slots.coeng2 = Some(Token::new(COENG).marked());
    }
    debug!("keeping incomplete coeng");
}

// AA and AU are written straight after BA, unless BA has a subscript BA, YO or SA.
fn ba_vowel_order(slots: &mut Slots) -> bool {
    if !is(&slots.base, BA) {
        return false;
    }
    let Some(vowel) = slots.vowel_after.as_mut() else {
        return false;
    };
    if vowel.marks() > 1 || !matches!(vowel.single(), Some(SRA_AA | SRA_AU)) {
        return false;
    }
    vowel.unmark();

    !slots
        .coeng1
        .as_ref()
        .and_then(Token::last_char)
        .is_some_and(|ch| matches!(ch, BA | YO | SA))
}

fn assemble(slots: &Slots, layout: &Layout, options: &ReorderOptions, out: &mut Vec<char>) {
    let (shifter_pre, shifter_post) = if slots.shifter_after_coeng {
        (None, slots.shifter.as_ref())
    } else {
        (slots.shifter.as_ref(), None)
    };
    let (vowel_after_base, vowel_after) = if layout.ba_vowel {
        (slots.vowel_after.as_ref(), None)
    } else {
        (None, slots.vowel_after.as_ref())
    };

    for token in [slots.vowel_before.as_ref(), layout.coeng_before.as_ref()]
        .into_iter()
        .flatten()
    {
        token.write(options.mark, out);
    }

    match &slots.base {
        Some(base) => base.write(options.mark, out),
        None if layout.missing_base => out.extend(options.placeholder),
        None => {}
    }

    for token in [
        vowel_after_base,
        slots.robat.as_ref(),
        shifter_pre,
        slots.coeng1.as_ref(),
        slots.coeng2.as_ref(),
        shifter_post,
        slots.vowel_below.as_ref(),
        slots.vowel_above.as_ref(),
        vowel_after,
        slots.sign_above.as_ref(),
        slots.sign_after.as_ref(),
    ]
    .into_iter()
    .flatten()
    {
        token.write(options.mark, out);
    }

    out.extend(slots.reserved);
}
