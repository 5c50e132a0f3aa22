// Geometry primitives in chart space: y grows upward.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Slope of a line, `dy/dx`. Vertical lines are their own variant so they
/// never turn into a huge finite number. `rising` keeps the direction of the
/// segment a vertical slope was measured along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Finite(f32),
    Vertical { rising: bool },
}

impl Slope {
    /// Slope of the segment running from `from` to `to`. Coincident points
    /// give a NaN slope.
    pub fn between(from: Point, to: Point) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0.0 && dy != 0.0 {
            Slope::Vertical { rising: dy > 0.0 }
        } else {
            Slope::Finite(dy / dx)
        }
    }

    pub fn finite(self) -> Option<f32> {
        match self {
            Slope::Finite(value) => Some(value),
            Slope::Vertical { .. } => None,
        }
    }

    /// The slope as a signed number: vertical slopes become infinities.
    pub fn signed(self) -> f32 {
        match self {
            Slope::Finite(value) => value,
            Slope::Vertical { rising: true } => f32::INFINITY,
            Slope::Vertical { rising: false } => f32::NEG_INFINITY,
        }
    }
}

/// An infinite line through `anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub anchor: Point,
    pub slope: Slope,
}

impl Line {
    pub const fn new(anchor: Point, slope: Slope) -> Self {
        Self { anchor, slope }
    }

    pub const fn horizontal(y: f32) -> Self {
        Self::new(Point::new(0.0, y), Slope::Finite(0.0))
    }

    pub const fn vertical(x: f32) -> Self {
        Self::new(Point::new(x, 0.0), Slope::Vertical { rising: true })
    }

    /// Where this line crosses `other`. Parallel (or coincident) lines give
    /// `None`.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        match (self.slope, other.slope) {
            (Slope::Vertical { .. }, Slope::Vertical { .. }) => None,
            (Slope::Vertical { .. }, Slope::Finite(m)) => {
                let x = self.anchor.x;
                Some(Point::new(x, other.y_at(x, m)))
            }
            (Slope::Finite(m), Slope::Vertical { .. }) => {
                let x = other.anchor.x;
                Some(Point::new(x, self.y_at(x, m)))
            }
            (Slope::Finite(m1), Slope::Finite(m2)) => {
                if m1 == m2 {
                    return None;
                }
                let (p1, p2) = (self.anchor, other.anchor);
                let x = (m1 * p1.x - m2 * p2.x + p2.y - p1.y) / (m1 - m2);
                // Evaluate y on the flatter line to keep horizontal results exact.
                let y = if m1.abs() <= m2.abs() {
                    self.y_at(x, m1)
                } else {
                    other.y_at(x, m2)
                };
                Some(Point::new(x, y))
            }
        }
    }

    fn y_at(&self, x: f32, slope: f32) -> f32 {
        self.anchor.y + slope * (x - self.anchor.x)
    }
}

/// One envelope stroke of a peak: a corner and the slope of the boundary
/// leaving it. Owned separately from the corner so the same point can anchor
/// two strokes with different slopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub anchor: Point,
    pub slope: Slope,
}

impl Edge {
    pub const fn new(anchor: Point, slope: Slope) -> Self {
        Self { anchor, slope }
    }

    /// Edge anchored at `anchor` running along the segment `from -> to`.
    pub fn along(anchor: Point, from: Point, to: Point) -> Self {
        Self::new(anchor, Slope::between(from, to))
    }

    pub fn line(&self) -> Line {
        Line::new(self.anchor, self.slope)
    }
}
