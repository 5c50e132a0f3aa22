use crate::ir::Peak;
use serde::Serialize;

/// Which pointy vertex a W label hangs from.
///
/// ```text
///   Upper   Lower
///    \/      /\
///    \/      /\
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Anchored at `top`, text grows downward, bounded by edges `c`/`d`.
    Upper,
    /// Anchored at `bottom`, text grows upward, bounded by edges `a`/`b`.
    Lower,
}

impl Orientation {
    /// Classify a peak by the signs of its four stroke slopes.
    ///
    /// The upper case accepts a flat `a` or `b` but requires `c` and `d` to
    /// be strictly sloped; the lower case is strict everywhere. Vertical
    /// edges compare as signed infinities, NaN slopes match neither case.
    pub fn classify(peak: &Peak) -> Option<Self> {
        let a = peak.a.slope.signed();
        let b = peak.b.slope.signed();
        let c = peak.c.slope.signed();
        let d = peak.d.slope.signed();

        if a <= 0.0 && b >= 0.0 && c < 0.0 && d > 0.0 {
            Some(Orientation::Upper)
        } else if a > 0.0 && b < 0.0 && c > 0.0 && d < 0.0 {
            Some(Orientation::Lower)
        } else {
            None
        }
    }
}

/// Whether the W labeling strategy applies to this peak. Callers gate
/// [`fit_w_label`](super::fit_w_label) on this.
pub fn is_w_type(peak: &Peak) -> bool {
    Orientation::classify(peak).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Edge, Point, Slope};

    fn peak_with_slopes(a: Slope, b: Slope, c: Slope, d: Slope) -> Peak {
        let top = Point::new(10.0, 100.0);
        let bottom = Point::new(10.0, 0.0);
        Peak::new(
            top,
            bottom,
            Point::new(0.0, 110.0),
            Point::new(20.0, 110.0),
            Point::new(0.0, 10.0),
            Point::new(20.0, 10.0),
            Edge::new(top, a),
            Edge::new(top, b),
            Edge::new(bottom, c),
            Edge::new(bottom, d),
        )
    }

    fn slopes(a: f32, b: f32, c: f32, d: f32) -> Peak {
        peak_with_slopes(
            Slope::Finite(a),
            Slope::Finite(b),
            Slope::Finite(c),
            Slope::Finite(d),
        )
    }

    #[test]
    fn upper_w_matches() {
        assert_eq!(
            Orientation::classify(&slopes(-1.0, 1.0, -1.0, 1.0)),
            Some(Orientation::Upper)
        );
    }

    #[test]
    fn lower_w_matches() {
        assert_eq!(
            Orientation::classify(&slopes(1.0, -1.0, 1.0, -1.0)),
            Some(Orientation::Lower)
        );
    }

    #[test]
    fn flat_upper_stroke_still_matches_upper() {
        assert_eq!(
            Orientation::classify(&slopes(0.0, 1.0, -1.0, 1.0)),
            Some(Orientation::Upper)
        );
        assert_eq!(
            Orientation::classify(&slopes(-2.0, 0.0, -1.0, 1.0)),
            Some(Orientation::Upper)
        );
        assert!(is_w_type(&slopes(0.0, 0.0, -1.0, 1.0)));
    }

    #[test]
    fn flat_lower_stroke_matches_nothing() {
        assert!(!is_w_type(&slopes(0.0, 0.0, 0.0, 1.0)));
        assert!(!is_w_type(&slopes(-1.0, 1.0, -1.0, 0.0)));
        assert!(!is_w_type(&slopes(1.0, -1.0, 0.0, -1.0)));
    }

    #[test]
    fn lower_w_is_strict_on_the_upper_stroke() {
        assert!(!is_w_type(&slopes(0.0, -1.0, 1.0, -1.0)));
        assert!(!is_w_type(&slopes(1.0, 0.0, 1.0, -1.0)));
    }

    #[test]
    fn mixed_signs_match_nothing() {
        assert!(!is_w_type(&slopes(-1.0, 1.0, 1.0, -1.0)));
        assert!(!is_w_type(&slopes(1.0, -1.0, -1.0, 1.0)));
        assert!(!is_w_type(&slopes(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn vertical_edges_compare_as_infinities() {
        let falling = Slope::Vertical { rising: false };
        let rising = Slope::Vertical { rising: true };
        let classify = |a, b, c, d| Orientation::classify(&peak_with_slopes(a, b, c, d));

        assert_eq!(
            classify(falling, Slope::Finite(1.0), Slope::Finite(-1.0), Slope::Finite(1.0)),
            Some(Orientation::Upper)
        );
        assert_eq!(
            classify(Slope::Finite(-1.0), Slope::Finite(1.0), falling, rising),
            Some(Orientation::Upper)
        );
        assert_eq!(
            classify(rising, falling, Slope::Finite(1.0), Slope::Finite(-1.0)),
            Some(Orientation::Lower)
        );
        assert_eq!(
            classify(Slope::Finite(-1.0), Slope::Finite(1.0), rising, Slope::Finite(1.0)),
            None
        );
    }

    #[test]
    fn nan_slopes_match_nothing() {
        assert!(!is_w_type(&slopes(f32::NAN, 1.0, -1.0, 1.0)));
        assert!(!is_w_type(&slopes(1.0, -1.0, 1.0, f32::NAN)));
    }
}
