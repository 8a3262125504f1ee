//! What a single string does in a tab.

use std::fmt::Display;

/// One string of a chord tab: pressed at a fret, or not played.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StringValue {
    /// Played at this fret. `0` is the open string.
    Fretted(u32),
    /// Not played.
    Muted,
}

impl StringValue {
    /// `true` for [`StringValue::Muted`].
    pub const fn is_muted(&self) -> bool {
        matches!(self, StringValue::Muted)
    }

    /// Fret number, if the string is played.
    pub const fn fret(&self) -> Option<u32> {
        match *self {
            StringValue::Fretted(fret) => Some(fret),
            StringValue::Muted => None,
        }
    }
}

impl From<u32> for StringValue {
    fn from(fret: u32) -> Self {
        StringValue::Fretted(fret)
    }
}

impl From<Option<u32>> for StringValue {
    fn from(fret: Option<u32>) -> Self {
        fret.map_or(StringValue::Muted, StringValue::Fretted)
    }
}

impl Display for StringValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringValue::Fretted(fret) => write!(f, "{fret}"),
            StringValue::Muted => f.write_str("x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StringValue::{self, Fretted, Muted};

    #[test]
    fn displays_like_tab_notation() {
        let shape: String = [Muted, Fretted(3), Fretted(2), Fretted(0), Fretted(1), Fretted(0)]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(shape, "x32010");
    }

    #[test]
    fn converts_from_optional_frets() {
        assert_eq!(StringValue::from(None::<u32>), Muted);
        assert_eq!(StringValue::from(Some(5u32)), Fretted(5));
        assert_eq!(StringValue::from(7u32).fret(), Some(7));
        assert!(Muted.is_muted());
    }
}
