//! Ordered colour sequences
//!
//! A `Code` is either the hidden secret or a guess. It is only a sequence of
//! colours: length and palette membership are checked by the oracle when a
//! guess is submitted.

use super::Color;
use std::fmt;

/// An ordered sequence of colours
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse a code from its letters, ignoring whitespace
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Color};
    ///
    /// let code = Code::parse("grby");
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.colors()[2], Color::new('B'));
    /// assert_eq!(code.to_string(), "GRBY");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(
            text.chars()
                .filter(|c| !c.is_whitespace())
                .map(Color::new)
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the colour appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// First colour that appears more than once, if any
    #[must_use]
    pub fn first_repeat(&self) -> Option<Color> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, color)| self.0[..i].contains(color))
            .map(|(_, &color)| color)
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case_and_whitespace() {
        assert_eq!(Code::parse("g r b y"), Code::parse("GRBY"));
        assert_eq!(Code::parse("gRbY").to_string(), "GRBY");
    }

    #[test]
    fn parse_keeps_length_as_given() {
        assert_eq!(Code::parse("").len(), 0);
        assert!(Code::parse("").is_empty());
        assert_eq!(Code::parse("GRBYO").len(), 5);
    }

    #[test]
    fn contains_checks_membership() {
        let code = Code::parse("GRBY");
        assert!(code.contains(Color::new('B')));
        assert!(!code.contains(Color::new('O')));
    }

    #[test]
    fn first_repeat_finds_duplicates() {
        assert_eq!(Code::parse("GRBY").first_repeat(), None);
        assert_eq!(Code::parse("GRGR").first_repeat(), Some(Color::new('G')));
        assert_eq!(Code::parse("GRBB").first_repeat(), Some(Color::new('B')));
    }
}
