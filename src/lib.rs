//! # chord_tab
//!
//! A reference table of chord formulas and a validator that checks whether a
//! fretted-instrument tab sounds every note of a chord under a given tuning.
//!
//! ## Example
//! ```rust
//! use chord_tab::{is_valid, Scale, StringValue::{Fretted, Muted}};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     let scale = Scale::default();
//!     let tuning = ["E", "A", "D", "G", "B", "E"];
//!
//!     // x32010, the open C major shape
//!     let tab = [Muted, Fretted(3), Fretted(2), Fretted(0), Fretted(1), Fretted(0)];
//!
//!     assert!(is_valid(&tab, &["C", "E", "G"], &tuning, &scale)?);
//!     assert!(!is_valid(&tab, &["C", "D#", "G"], &tuning, &scale)?);
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! The formula table is plain data:
//! ```rust
//! use chord_tab::{formulas, NoteName};
//!
//! let minor7 = formulas::by_suffix("m7").unwrap();
//! assert_eq!(minor7.name, "Minor seventh");
//! assert_eq!(
//!     minor7.notes(NoteName::A).unwrap(),
//!     vec![NoteName::A, NoteName::C, NoteName::E, NoteName::G]
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord formula table.
pub use formulas::{ChordFormula, FormulaError, FORMULAS};

/// Pitch classes and the chromatic scale.
pub use note::{NoteName, Scale, Spelling, SEMITONES};

/// Per-string fret values.
pub use tab::StringValue;

/// Tab validation.
pub use validator::{
    is_valid, sounded_notes, TabValidator, TabValidatorBuilder, ValidationError, MAX_FRET_LIMIT,
};

/// Chord formula reference data.
pub mod formulas;

/// Note names and chromatic scales.
pub mod note;

/// Tab string values.
pub mod tab;

/// Checking tabs against chord notes.
pub mod validator;
