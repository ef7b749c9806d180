use crate::error::CoreError;

/// 68 caractères — rampe Paul Bourke, du plus clairsemé au plus dense.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 10 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// Blocs Unicode — pseudo-pixels.
pub const CHARSET_BLOCKS: &str = " ░▒▓█";

/// Minimal — haut contraste.
pub const CHARSET_MINIMAL: &str = " .:#";

/// Resolve a built-in charset by name.
///
/// # Example
/// ```
/// use ink_core::charset::{named_charset, CHARSET_COMPACT};
/// assert_eq!(named_charset("compact"), Some(CHARSET_COMPACT));
/// assert_eq!(named_charset("nope"), None);
/// ```
#[must_use]
pub fn named_charset(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "standard" => Some(CHARSET_STANDARD),
        "compact" => Some(CHARSET_COMPACT),
        "blocks" => Some(CHARSET_BLOCKS),
        "minimal" => Some(CHARSET_MINIMAL),
        _ => None,
    }
}

/// Immutable density gradient, ordered sparse → dense.
///
/// Built once per conversion and never mutated afterwards.
///
/// # Example
/// ```
/// use ink_core::charset::Gradient;
/// let g = Gradient::new(" .:#@").unwrap();
/// assert_eq!(g.len(), 5);
/// assert_eq!(g.glyph(0), ' ');
/// assert_eq!(g.glyph(4), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    chars: Box<[char]>,
}

impl Gradient {
    /// Build a gradient from a string ordered sparse → dense.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] if `charset` is empty.
    pub fn new(charset: &str) -> Result<Self, CoreError> {
        let chars: Box<[char]> = charset.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::InvalidConfig("gradient vide".into()));
        }
        Ok(Self { chars })
    }

    /// Number of glyphs. Always at least 1.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyph at `idx`, clamped to the last entry.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, idx: usize) -> char {
        self.chars[idx.min(self.chars.len() - 1)]
    }

    /// Index of `ch` in the gradient, if present.
    #[must_use]
    pub fn position(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            chars: CHARSET_STANDARD.chars().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gradient_rejected() {
        assert!(matches!(
            Gradient::new(""),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn standard_ramp_is_sixty_eight_glyphs() {
        let g = Gradient::default();
        assert_eq!(g.len(), 68);
        assert_eq!(g.glyph(0), ' ');
        assert_eq!(g.glyph(67), '$');
    }

    #[test]
    fn glyph_index_clamped() {
        let g = Gradient::new("ab").unwrap();
        assert_eq!(g.glyph(99), 'b');
    }

    #[test]
    fn unicode_glyphs_count_as_one() {
        let g = Gradient::new(CHARSET_BLOCKS).unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g.position('▓'), Some(3));
    }

    #[test]
    fn named_lookup_ignores_case() {
        assert_eq!(named_charset("BLOCKS"), Some(CHARSET_BLOCKS));
    }
}
