//! Tab Validator
//!
//! Checks that a chord tab, played over a tuning, sounds every note of a chord.
//!
//! Each unmuted string sounds the pitch class `fret` semitones above its open
//! note, found by looking the tuning up in a chromatic [`Scale`]. The tab is valid
//! when the set of sounded pitch classes contains every chord note. Repeated or
//! extra notes do not matter.

use crate::note::{NoteName, Scale, SEMITONES};
use crate::tab::StringValue;
use thiserror::Error;
use tracing::{debug, trace};

/// Highest fret a validator may be limited to.
pub const MAX_FRET_LIMIT: u32 = 36;

/// Errors when validating a tab
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The tab and tuning did not have one entry per string each.
    #[error("tab has {tab} strings but tuning has {tuning}")]
    InvalidLength {
        /// Number of strings in the tab.
        tab: usize,
        /// Number of strings in the tuning.
        tuning: usize,
    },

    /// A tuning or chord note is not spelled as any note of the scale.
    #[error("unknown pitch class `{name}`")]
    UnknownPitchClass {
        /// The name that failed to resolve.
        name: String,
    },

    /// No chord notes were given and the validator rejects empty chords.
    #[error("no chord notes to validate against")]
    EmptyChordNotes,

    /// A string is fretted above the validator's limit.
    #[error("string {string} is fretted at {fret}, above the limit of {max}")]
    FretOutOfRange {
        /// Zero-based string position in the tab.
        string: usize,
        /// The fret found.
        fret: u32,
        /// The configured limit.
        max: u32,
    },

    /// The validator could not be built with the requested settings.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Builder for `TabValidator`
#[derive(Debug, Clone)]
pub struct TabValidatorBuilder {
    scale: Scale,
    reject_empty_chord: bool,
    max_fret: Option<u32>,
}

impl TabValidatorBuilder {
    /// Start with the default scale (chromatic on A, sharps), empty chords
    /// accepted and no fret limit.
    pub fn new() -> Self {
        TabValidatorBuilder {
            scale: Scale::default(),
            reject_empty_chord: false,
            max_fret: None,
        }
    }

    /// Set the scale that tunings and chord notes are looked up in.
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Fail with `EmptyChordNotes` instead of treating an empty chord as satisfied.
    pub fn reject_empty_chord(mut self, reject: bool) -> Self {
        self.reject_empty_chord = reject;
        self
    }

    /// Reject tabs fretted above `max`. `Some(0)` allows open strings only.
    pub fn max_fret(mut self, max: Option<u32>) -> Self {
        self.max_fret = max;
        self
    }

    /// Finalize and create the `TabValidator`.
    pub fn build(self) -> Result<TabValidator, ValidationError> {
        if let Some(max) = self.max_fret {
            if max > MAX_FRET_LIMIT {
                return Err(ValidationError::Configuration(format!(
                    "max_fret {max} exceeds {MAX_FRET_LIMIT}"
                )));
            }
        }
        Ok(TabValidator {
            scale: self.scale,
            reject_empty_chord: self.reject_empty_chord,
            max_fret: self.max_fret,
        })
    }
}

impl Default for TabValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks tabs against chord notes under a tuning.
#[derive(Debug, Clone)]
pub struct TabValidator {
    scale: Scale,
    reject_empty_chord: bool,
    max_fret: Option<u32>,
}

impl TabValidator {
    /// Return a builder to customize the scale and checks
    pub fn builder() -> TabValidatorBuilder {
        TabValidatorBuilder::new()
    }

    /// Create a validator with the default settings
    pub fn new() -> Self {
        TabValidator {
            scale: Scale::default(),
            reject_empty_chord: false,
            max_fret: None,
        }
    }

    /// The scale names are resolved against.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Check that `tab` over `tuning` sounds every note of `chord_notes`.
    ///
    /// Returns:
    /// - `Err(InvalidLength)` if `tab` and `tuning` differ in length.
    /// - `Err(UnknownPitchClass)` for any tuning or chord note missing from the scale.
    /// - `Err(FretOutOfRange)` if a fret exceeds the configured limit.
    /// - `Err(EmptyChordNotes)` for an empty chord, when configured to reject it.
    ///   Otherwise an empty chord is valid.
    pub fn validate<S: AsRef<str>, T: AsRef<str>>(
        &self,
        tab: &[StringValue],
        chord_notes: &[S],
        tuning: &[T],
    ) -> Result<bool, ValidationError> {
        let sounded = self.sounded_set(tab, tuning)?;
        let required = chord_notes
            .iter()
            .map(|n| self.resolve(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if required.is_empty() && self.reject_empty_chord {
            return Err(ValidationError::EmptyChordNotes);
        }

        let missing = required.iter().find(|note| !sounded[note.index()]);
        match missing {
            Some(note) => {
                debug!(tab = %TabDisplay(tab), missing = %note, "tab does not cover chord");
                Ok(false)
            }
            None => {
                debug!(tab = %TabDisplay(tab), notes = required.len(), "tab covers chord");
                Ok(true)
            }
        }
    }

    /// Distinct pitch classes sounded by the unmuted strings, in string order.
    pub fn sounded_notes<T: AsRef<str>>(
        &self,
        tab: &[StringValue],
        tuning: &[T],
    ) -> Result<Vec<NoteName>, ValidationError> {
        let mut notes = Vec::with_capacity(tab.len());
        for note in self.resolve_strings(tab, tuning)?.into_iter().flatten() {
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn sounded_set<T: AsRef<str>>(
        &self,
        tab: &[StringValue],
        tuning: &[T],
    ) -> Result<[bool; SEMITONES], ValidationError> {
        let mut sounded = [false; SEMITONES];
        for note in self.resolve_strings(tab, tuning)?.into_iter().flatten() {
            sounded[note.index()] = true;
        }
        Ok(sounded)
    }

    /// Pitch class for each string, `None` where muted.
    fn resolve_strings<T: AsRef<str>>(
        &self,
        tab: &[StringValue],
        tuning: &[T],
    ) -> Result<Vec<Option<NoteName>>, ValidationError> {
        if tab.len() != tuning.len() {
            return Err(ValidationError::InvalidLength {
                tab: tab.len(),
                tuning: tuning.len(),
            });
        }

        tab.iter()
            .zip(tuning)
            .enumerate()
            .map(|(string, (value, open))| -> Result<Option<NoteName>, ValidationError> {
                let open = open.as_ref();
                let open_idx = self
                    .scale
                    .index_of(open)
                    .ok_or_else(|| unknown(open))?;
                let Some(fret) = value.fret() else {
                    return Ok(None);
                };
                if let Some(max) = self.max_fret {
                    if fret > max {
                        return Err(ValidationError::FretOutOfRange { string, fret, max });
                    }
                }
                let note = self.scale.note(open_idx + (fret as usize % SEMITONES));
                trace!(string, open, fret, %note, "resolved string");
                Ok(Some(note))
            })
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<NoteName, ValidationError> {
        self.scale.lookup(name).ok_or_else(|| unknown(name))
    }
}

impl Default for TabValidator {
    fn default() -> Self {
        TabValidator::new()
    }
}

fn unknown(name: &str) -> ValidationError {
    ValidationError::UnknownPitchClass {
        name: name.to_string(),
    }
}

struct TabDisplay<'a>(&'a [StringValue]);

impl std::fmt::Display for TabDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Check that `tab` over `tuning` sounds every note of `chord_notes`, resolving
/// names against `scale`. An empty `chord_notes` is valid.
///
/// See [`TabValidator::validate`] for the errors returned.
pub fn is_valid<S: AsRef<str>, T: AsRef<str>>(
    tab: &[StringValue],
    chord_notes: &[S],
    tuning: &[T],
    scale: &Scale,
) -> Result<bool, ValidationError> {
    TabValidator {
        scale: *scale,
        ..TabValidator::new()
    }
    .validate(tab, chord_notes, tuning)
}

/// Distinct pitch classes sounded by `tab` over `tuning`, in string order.
pub fn sounded_notes<T: AsRef<str>>(
    tab: &[StringValue],
    tuning: &[T],
    scale: &Scale,
) -> Result<Vec<NoteName>, ValidationError> {
    TabValidator {
        scale: *scale,
        ..TabValidator::new()
    }
    .sounded_notes(tab, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Spelling;
    use crate::tab::StringValue::{Fretted, Muted};

    const STANDARD: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

    #[test]
    fn wraps_at_the_octave_boundary() {
        let scale = Scale::default();
        // G sits at index 10 of the A scale; three frets up is index 1.
        assert_eq!(scale.index_of("G"), Some(10));
        let notes = sounded_notes(&[Fretted(3)], &["G"], &scale).unwrap();
        assert_eq!(notes, vec![scale.note(1)]);
        assert_eq!(scale.name(1), "A#");
    }

    #[test]
    fn high_frets_use_true_modulo() {
        let scale = Scale::default();
        let notes = sounded_notes(&[Fretted(27)], &["G"], &scale).unwrap();
        assert_eq!(notes, vec![NoteName::As]);
    }

    #[test]
    fn all_muted_is_invalid() {
        let tab = [Muted; 6];
        assert_eq!(is_valid(&tab, &["C"], &STANDARD, &Scale::default()), Ok(false));
    }

    #[test]
    fn empty_tab_covers_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(is_valid(&[], &["E"], &empty, &Scale::default()), Ok(false));
        assert_eq!(is_valid(&[], &empty, &empty, &Scale::default()), Ok(true));
    }

    #[test]
    fn empty_chord_policy() {
        let tab = [Fretted(0); 6];
        let none: [&str; 0] = [];
        assert_eq!(TabValidator::new().validate(&tab, &none, &STANDARD), Ok(true));

        let strict = TabValidator::builder().reject_empty_chord(true).build().unwrap();
        assert_eq!(
            strict.validate(&tab, &none, &STANDARD),
            Err(ValidationError::EmptyChordNotes)
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let tab = [Fretted(0); 5];
        assert_eq!(
            is_valid(&tab, &["E"], &STANDARD, &Scale::default()),
            Err(ValidationError::InvalidLength { tab: 5, tuning: 6 })
        );
    }

    #[test]
    fn unknown_names_are_errors() {
        let tab = [Fretted(0); 6];
        let scale = Scale::default();
        let drop_d = ["Db", "A", "D", "G", "B", "E"];
        assert_eq!(
            is_valid(&tab, &["E"], &drop_d, &scale),
            Err(ValidationError::UnknownPitchClass { name: "Db".into() })
        );
        assert_eq!(
            is_valid(&tab, &["Bb"], &STANDARD, &scale),
            Err(ValidationError::UnknownPitchClass { name: "Bb".into() })
        );
        let flats = Scale::new(NoteName::A, Spelling::Flats);
        assert_eq!(is_valid(&[Fretted(1)], &["Bb"], &["A"], &flats), Ok(true));
    }

    #[test]
    fn unknown_tuning_on_muted_string_still_fails() {
        let tab = [Muted, Fretted(0)];
        assert!(matches!(
            is_valid(&tab, &["E"], &["Q", "E"], &Scale::default()),
            Err(ValidationError::UnknownPitchClass { .. })
        ));
    }

    #[test]
    fn fret_limit() {
        let open_only = TabValidator::builder().max_fret(Some(0)).build().unwrap();
        let tab = [Fretted(0), Fretted(0), Fretted(2), Fretted(2), Fretted(1), Fretted(0)];
        assert_eq!(
            open_only.validate(&tab, &["E"], &STANDARD),
            Err(ValidationError::FretOutOfRange { string: 2, fret: 2, max: 0 })
        );

        assert!(matches!(
            TabValidator::builder().max_fret(Some(MAX_FRET_LIMIT + 1)).build(),
            Err(ValidationError::Configuration(_))
        ));
    }

    #[test]
    fn sounded_notes_are_distinct_in_string_order() {
        let tab = [Fretted(0), Fretted(2), Fretted(2), Fretted(1), Fretted(0), Fretted(0)];
        let notes = sounded_notes(&tab, &STANDARD, &Scale::default()).unwrap();
        assert_eq!(notes, vec![NoteName::E, NoteName::B, NoteName::Gs]);
    }
}
