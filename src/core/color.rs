//! Peg colours and the palette they are drawn from
//!
//! A `Color` is an opaque single-letter token. A `Palette` is the ordered
//! universe of colours for a game; its order is the canonical iteration
//! order used whenever the solver builds a candidate pool.

use crate::config::ConfigError;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// A single peg colour, identified by an upper-case letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(char);

impl Color {
    /// Create a colour from its label, normalising to upper case
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::new('g'), Color::new('G'));
    /// assert_eq!(Color::new('b').label(), 'B');
    /// ```
    #[must_use]
    pub fn new(label: char) -> Self {
        Self(label.to_ascii_uppercase())
    }

    /// Get the colour's label
    #[inline]
    #[must_use]
    pub const fn label(self) -> char {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered set of colours a game is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Labels of the classic palette: green, red, yellow, orange, purple, blue
    pub const CLASSIC: &'static str = "GRYOPB";

    /// Build a palette from a string of labels
    ///
    /// Whitespace is ignored and labels are case-insensitive.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyPalette` if no labels are given, or
    /// `ConfigError::DuplicateColor` if a label appears twice.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    ///
    /// let palette = Palette::new("abc").unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert!(Palette::new("aba").is_err());
    /// ```
    pub fn new(labels: &str) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();
        let mut colors = Vec::new();

        for label in labels.chars().filter(|c| !c.is_whitespace()) {
            let color = Color::new(label);
            if !seen.insert(color) {
                return Err(ConfigError::DuplicateColor(color));
            }
            colors.push(color);
        }

        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        Ok(Self { colors })
    }

    /// The six-colour palette of the classic game
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: Self::CLASSIC.chars().map(Color::new).collect(),
        }
    }

    /// All colours in canonical order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a palette built through `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl FromStr for Palette {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_case_insensitive() {
        assert_eq!(Color::new('r'), Color::new('R'));
        assert_eq!(Color::new('r').label(), 'R');
        assert_eq!(format!("{}", Color::new('y')), "Y");
    }

    #[test]
    fn classic_palette_order() {
        let palette = Palette::classic();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.to_string(), "GRYOPB");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn palette_rejects_duplicates() {
        assert!(matches!(
            Palette::new("GRG"),
            Err(ConfigError::DuplicateColor(c)) if c == Color::new('G')
        ));
        assert!(matches!(
            Palette::new("Gg"),
            Err(ConfigError::DuplicateColor(_))
        ));
    }

    #[test]
    fn palette_rejects_empty() {
        assert!(matches!(Palette::new(""), Err(ConfigError::EmptyPalette)));
        assert!(matches!(Palette::new("  "), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn palette_membership() {
        let palette: Palette = "g r y".parse().unwrap();
        assert_eq!(palette.len(), 3);
        assert!(palette.contains(Color::new('Y')));
        assert!(!palette.contains(Color::new('B')));
    }
}
