//! Note names
//!
//! The twelve chromatic pitch classes and the ordered chromatic scale used to
//! turn an open-string note plus a fret offset into a sounded pitch class.

use std::fmt::Display;

/// Number of pitch classes in an octave.
pub const SEMITONES: usize = 12;

const ALL_NOTES: [NoteName; SEMITONES] = [
    NoteName::C,
    NoteName::Cs,
    NoteName::D,
    NoteName::Ds,
    NoteName::E,
    NoteName::F,
    NoteName::Fs,
    NoteName::G,
    NoteName::Gs,
    NoteName::A,
    NoteName::As,
    NoteName::B,
];

const SHARP_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteName {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

impl NoteName {
    /// Pitch class for an integer, counted in semitones up from C. Wraps modulo 12.
    pub const fn from_index(idx: usize) -> NoteName {
        ALL_NOTES[idx % SEMITONES]
    }

    /// Semitones above C, in `0..12`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Spelled name of this pitch class, e.g. `"C#"` or `"Db"`.
    pub const fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => SHARP_NAMES[self.index()],
            Spelling::Flats => FLAT_NAMES[self.index()],
        }
    }

    /// The pitch class `semitones` above this one.
    pub const fn transpose(self, semitones: usize) -> NoteName {
        NoteName::from_index(self.index() + semitones % SEMITONES)
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Spelling::Sharps))
    }
}

/// How accidentals are written in a [`Scale`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Spelling {
    /// `C#`, `D#`, ...
    #[default]
    Sharps,
    /// `Db`, `Eb`, ...
    Flats,
}

/// An ordered 12-note chromatic sequence starting on `root`.
///
/// Position `i` holds the pitch class `i` semitones above the root. Tunings and
/// chord notes are looked up by their exact spelling, so a sharp-spelled scale
/// does not know `"Bb"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scale {
    root: NoteName,
    spelling: Spelling,
}

impl Scale {
    /// Chromatic scale on `root`, spelled with `spelling`.
    pub const fn new(root: NoteName, spelling: Spelling) -> Self {
        Scale { root, spelling }
    }

    /// First note of the sequence.
    pub const fn root(&self) -> NoteName {
        self.root
    }

    /// Accidental spelling used for names.
    pub const fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Always 12.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        SEMITONES
    }

    /// Pitch class at `index`, wrapping around the octave.
    pub const fn note(&self, index: usize) -> NoteName {
        self.root.transpose(index)
    }

    /// Spelled name at `index`, wrapping around the octave.
    pub const fn name(&self, index: usize) -> &'static str {
        self.note(index).name(self.spelling)
    }

    /// Position of `name` in the sequence, if spelled the way this scale spells it.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        (0..SEMITONES).find(|&i| self.name(i) == name)
    }

    /// Pitch class for a spelled `name`.
    pub fn lookup(&self, name: &str) -> Option<NoteName> {
        self.index_of(name).map(|i| self.note(i))
    }

    /// Notes of the sequence in order.
    pub fn iter(&self) -> impl Iterator<Item = NoteName> + '_ {
        (0..SEMITONES).map(move |i| self.note(i))
    }
}

impl Default for Scale {
    /// Chromatic scale on A, spelled with sharps.
    fn default() -> Self {
        Scale::new(NoteName::A, Spelling::Sharps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_starts_on_a() {
        let scale = Scale::default();
        let names: Vec<_> = (0..scale.len()).map(|i| scale.name(i)).collect();
        assert_eq!(
            names,
            ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]
        );
    }

    #[test]
    fn index_of_round_trips_names() {
        let scale = Scale::new(NoteName::E, Spelling::Flats);
        for i in 0..SEMITONES {
            assert_eq!(scale.index_of(scale.name(i)), Some(i));
        }
    }

    #[test]
    fn spelling_is_exact() {
        assert_eq!(Scale::default().index_of("Bb"), None);
        assert_eq!(Scale::default().index_of("A#"), Some(1));
        assert_eq!(Scale::new(NoteName::A, Spelling::Flats).index_of("Bb"), Some(1));
        assert_eq!(Scale::default().index_of("H"), None);
    }

    #[test]
    fn note_wraps_past_the_octave() {
        let scale = Scale::default();
        assert_eq!(scale.note(13), NoteName::As);
        assert_eq!(scale.note(10 + 3), scale.note(1));
        assert_eq!(scale.note(12 * 4 + 3), NoteName::C);
    }

    #[test]
    fn transpose_wraps() {
        assert_eq!(NoteName::B.transpose(1), NoteName::C);
        assert_eq!(NoteName::G.transpose(18), NoteName::Cs);
        assert_eq!(NoteName::from_index(23), NoteName::B);
    }
}
