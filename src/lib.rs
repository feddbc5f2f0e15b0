#![warn(rust_2018_idioms)]

//! Conversion of Khmer Unicode text from logical order into the visual order expected by
//! legacy "Limon-style" Khmer fonts.
//!
//! Legacy fonts have no shaping tables, so each syllable has to be laid out in the order its
//! glyphs appear on screen: vowels drawn to the left of the base come first, a subscript RO
//! goes in front of the base, and so on. Where a component has an alternate glyph (a deeper
//! vowel below a subscript, for instance) a [`MARK`] character is put in front of it.
//!
//! ```
//! use khmer_legacy::{reorder_str, MARK};
//!
//! // KHA COENG NO U: the vowel below the subscript is marked.
//! let legacy = reorder_str("\u{1781}\u{17D2}\u{1793}\u{17BB}");
//! assert_eq!(legacy, format!("\u{1781}\u{17D2}\u{1793}{}\u{17BB}", MARK));
//! ```
//!
//! Mapping the result onto a particular font's glyph codepoints is left to the caller.

/// Syllable cluster segmentation.
pub mod cluster;
pub mod error;
/// Character classification.
pub mod khmer;
/// Cluster reassembly in legacy order.
pub mod reorder;

pub use crate::cluster::{clusters, Clusters};
pub use crate::error::ClassifyError;
pub use crate::khmer::{classify, classify_str, CharClass, CharFlags, CharInfo, Pos, MARK};
pub use crate::reorder::{reorder, reorder_str, reorder_str_with, reorder_with, ReorderOptions};

/// Unicode DOTTED CIRCLE, for use as [`ReorderOptions::placeholder`].
pub const DOTTED_CIRCLE: char = '\u{25CC}';
