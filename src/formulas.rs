//! Chord Formulas
//!
//! Formulas, names and suffixes for each chord quality. A formula is written in
//! scale degrees (`1-b3-5`) and again in integer notation (`0-3-7`), where each
//! value counts semitones above the root. Values above 11 are octave-extended
//! degrees such as `#11`.
//!
//! The table is ordered by lookup priority: where two records share a suffix
//! the first one wins.

use crate::note::{NoteName, SEMITONES};
use thiserror::Error;

/// A single chord quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChordFormula {
    /// Scale-degree notation, e.g. `"1-b3-5"`.
    pub formula: &'static str,
    /// Integer notation, e.g. `"0-3-7"`.
    pub integer: &'static str,
    /// Display name, e.g. `"Minor"`.
    pub name: &'static str,
    /// Chord-symbol suffix, e.g. `"min"`. Empty for major and single notes.
    pub suffix: &'static str,
}

/// Errors when reading a formula record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// A token of the integer notation was not a non-negative integer.
    #[error("formula `{formula}` has invalid interval `{token}`")]
    InvalidInterval {
        /// The integer notation being parsed.
        formula: String,
        /// The offending token.
        token: String,
    },
}

const fn f(
    formula: &'static str,
    integer: &'static str,
    name: &'static str,
    suffix: &'static str,
) -> ChordFormula {
    ChordFormula { formula, integer, name, suffix }
}

/// Every known chord quality, in lookup priority order.
#[rustfmt::skip]
pub const FORMULAS: &[ChordFormula] = &[
    f("1-3-5",             "0-4-7",          "Major",                         ""),
    f("1-3-5#",            "0-4-8",          "Augmented",                     "aug"),
    f("1-b3-b5",           "0-3-6",          "Diminished",                    "dim"),
    f("1-b3-5",            "0-3-7",          "Minor",                         "min"),
    f("1-b3-5-9",          "0-2-3-7",        "Minor, added ninth",            "m(add9)"),
    f("1-4-5",             "0-5-7",          "Suspended fourth",              "sus4"),
    f("1-2-5",             "0-2-7",          "Suspended second",              "sus2"),
    f("1-3-5-9",           "0-2-4-7",        "Added ninth",                   "add9"),
    f("1-3-b7",            "0-4-10",         "Seventh",                       "7"),
    f("1-3-5-b7",          "0-4-7-10",       "Dominant seventh",              "7"),
    f("1-3-5-7",           "0-4-7-11",       "Major seventh",                 "maj7"),
    f("1-b3-5-7",          "0-3-7-11",       "Minor, major seventh",          "m(maj7)"),
    f("1-b3-5-b7",         "0-3-7-10",       "Minor seventh",                 "m7"),
    f("1-b3-b5-b7",        "0-3-6-10",       "Minor seventh, flat fifth",     "m7b5"),
    f("1-3-6",             "0-4-9",          "Sixth",                         "6"),
    f("1-b3-5-6",          "0-3-7-9",        "Minor sixth",                   "m6"),
    f("1-b3-5-b6",         "0-3-7-8",        "Minor, flat sixth",             "mb6"),
    f("1-b3-5-6-9",        "0-2-3-7-9",      "Minor sixth, added ninth",      "m6/9"),
    f("1-3-5-6",           "0-4-7-9",        "Major Sixth",                   "maj6"),
    f("1-3-5-6-9",         "0-2-4-7-9",      "Sixth, added ninth",            "6/9"),
    f("1-3-5-7-9",         "0-2-4-7-11",     "Major ninth",                   "maj9"),
    f("1-b3-5-b7-9",       "0-2-3-7-10",     "Minor ninth",                   "m9"),
    f("1-b3-5-7-9",        "0-2-3-7-11",     "Minor ninth, major seventh",    "m9(maj7)"),
    f("1-b3-b5-b7-9",      "0-2-3-6-10",     "Minor eleventh",                "m9b5"),
    f("1-b3-5-b7-9-11-13", "0-2-3-4-6-7-10", "Minor thirteen",                "m13"),
    f("1-3-5-7-#11",       "0-4-7-11-18",    "Major seventh, sharp eleventh", "maj7#11"),
    f("1-3-5-7-9-13",      "0-2-4-7-9-11",   "Major thirteen",                "maj13"),
    f("1",                 "0",              "Single note",                   ""),
    f("1-5",               "0-7",            "Power chord",                   "5"),
];

impl ChordFormula {
    /// Scale degrees of the formula, in written order.
    pub fn degrees(&self) -> impl Iterator<Item = &'static str> {
        self.formula.split('-')
    }

    /// Semitone offsets from the root, in written order and without octave reduction.
    pub fn intervals(&self) -> Result<Vec<u32>, FormulaError> {
        self.integer
            .split('-')
            .map(|token| {
                token
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| FormulaError::InvalidInterval {
                        formula: self.integer.to_string(),
                        token: token.to_string(),
                    })
            })
            .collect()
    }

    /// Distinct pitch-class offsets in `0..12`, ascending.
    pub fn pitch_classes(&self) -> Result<Vec<usize>, FormulaError> {
        let mut pcs: Vec<usize> = self
            .intervals()?
            .into_iter()
            .map(|i| i as usize % SEMITONES)
            .collect();
        pcs.sort_unstable();
        pcs.dedup();
        Ok(pcs)
    }

    /// Build the chord on `root`: one note per interval, in written order,
    /// with repeated pitch classes dropped.
    pub fn notes(&self, root: NoteName) -> Result<Vec<NoteName>, FormulaError> {
        let mut notes = Vec::new();
        for interval in self.intervals()? {
            let note = root.transpose(interval as usize);
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
        Ok(notes)
    }
}

/// First record whose `name` matches exactly.
pub fn by_name(name: &str) -> Option<&'static ChordFormula> {
    FORMULAS.iter().find(|c| c.name == name)
}

/// First record whose `suffix` matches exactly.
pub fn by_suffix(suffix: &str) -> Option<&'static ChordFormula> {
    FORMULAS.iter().find(|c| c.suffix == suffix)
}

/// First record whose integer notation matches exactly, e.g. `"0-4-7"`.
pub fn by_integer(integer: &str) -> Option<&'static ChordFormula> {
    FORMULAS.iter().find(|c| c.integer == integer)
}
