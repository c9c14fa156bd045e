// File: crates/brushplot-core/src/scale.rs
// Summary: Invertible linear scales mapping data-value domains to pixel ranges.

/// Data-space coordinate.
pub type DataValue = f64;
/// Pixel-space coordinate.
pub type Pixel = f64;

/// Linear mapping from a data-value domain to a pixel range. Scales are value
/// objects: rebuilt whenever the dataset or viewport changes, never mutated.
///
/// The y axis uses an inverted range (`[height, 0]`) so larger values render
/// nearer the top; nothing in here special-cases that, inversion falls out of
/// the range endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [DataValue; 2],
    pub range: [Pixel; 2],
}

impl LinearScale {
    pub const fn new(domain: [DataValue; 2], range: [Pixel; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a data value to a pixel. `to_pixel(domain[0]) == range[0]` and
    /// `to_pixel(domain[1]) == range[1]`, linearly interpolated in between.
    ///
    /// Degenerate domain (all values equal): every value maps to the range
    /// midpoint, so a flat dataset still renders at a defined position.
    #[inline]
    pub fn to_pixel(&self, v: DataValue) -> Pixel {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 {
            return (self.range[0] + self.range[1]) * 0.5;
        }
        self.range[0] + (v - self.domain[0]) / span * (self.range[1] - self.range[0])
    }

    /// Inverse of [`to_pixel`](Self::to_pixel). For non-degenerate scales,
    /// `to_value(to_pixel(v))` round-trips within floating-point tolerance.
    ///
    /// Degenerate domain or range: returns the domain low, the one value the
    /// scale can represent.
    #[inline]
    pub fn to_value(&self, px: Pixel) -> DataValue {
        let span = self.range[1] - self.range[0];
        if span == 0.0 || self.domain[1] == self.domain[0] {
            return self.domain[0];
        }
        self.domain[0] + (px - self.range[0]) / span * (self.domain[1] - self.domain[0])
    }
}

/// `[min, max]` over `values`, ignoring non-finite entries. `None` when no
/// finite value exists (empty dataset, or every row failed coercion).
pub fn extent<I>(values: I) -> Option<[f64; 2]>
where
    I: IntoIterator<Item = f64>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo <= hi { Some([lo, hi]) } else { None }
}
