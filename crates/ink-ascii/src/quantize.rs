use ink_core::charset::Gradient;

/// Maps a brightness in `[0, 1]` to a glyph of the gradient.
///
/// Gradients are stored sparse → dense. Without inversion brighter input
/// picks a sparser glyph (ink on a light background); `invert` mirrors the
/// index. Rounding is half away from zero (`f32::round`).
///
/// # Example
/// ```
/// use ink_core::charset::Gradient;
/// use ink_ascii::quantize::Quantizer;
/// let q = Quantizer::new(Gradient::new(" .:#@").unwrap(), false);
/// assert_eq!(q.glyph(1.0), ' ');
/// assert_eq!(q.glyph(0.0), '@');
/// let inv = Quantizer::new(Gradient::new(" .:#@").unwrap(), true);
/// assert_eq!(inv.glyph(1.0), '@');
/// ```
#[derive(Clone, Debug)]
pub struct Quantizer {
    gradient: Gradient,
    invert: bool,
}

impl Quantizer {
    /// Create a quantizer over `gradient`.
    #[must_use]
    pub fn new(gradient: Gradient, invert: bool) -> Self {
        Self { gradient, invert }
    }

    /// The gradient in use.
    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Gradient index for brightness `b`.
    ///
    /// Out-of-range input is clamped; NaN maps like 0.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, b: f32) -> usize {
        let last = self.gradient.len() - 1;
        let b = if b.is_nan() { 0.0 } else { b.clamp(0.0, 1.0) };
        let idx = ((b * last as f32).round() as usize).min(last);
        if self.invert { idx } else { last - idx }
    }

    /// Glyph for brightness `b`.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, b: f32) -> char {
        self.gradient.glyph(self.index(b))
    }
}
