use crate::geometry::{Edge, Point};
use serde::Serialize;

/// A W-shaped (or mirrored) local extremum of a wave layer.
///
/// `top` sits on the layer's upper boundary and `bottom` on its lower
/// boundary. Edges `a`/`b` are the upper stroke through `top`, `c`/`d` the
/// lower stroke through `bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    pub top: Point,
    pub bottom: Point,
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub a: Edge,
    pub b: Edge,
    pub c: Edge,
    pub d: Edge,
}

impl Peak {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        top: Point,
        bottom: Point,
        top_left: Point,
        top_right: Point,
        bottom_left: Point,
        bottom_right: Point,
        a: Edge,
        b: Edge,
        c: Edge,
        d: Edge,
    ) -> Self {
        Self {
            top,
            bottom,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            a,
            b,
            c,
            d,
        }
    }

    /// Build a peak from the three samples of each boundary around it,
    /// deriving the four stroke slopes from the neighbouring segments.
    pub fn from_boundaries(
        top_left: Point,
        top: Point,
        top_right: Point,
        bottom_left: Point,
        bottom: Point,
        bottom_right: Point,
    ) -> Self {
        Self {
            top,
            bottom,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            a: Edge::along(top, top_left, top),
            b: Edge::along(top, top, top_right),
            c: Edge::along(bottom, bottom_left, bottom),
            d: Edge::along(bottom, bottom, bottom_right),
        }
    }

    /// Vertical room between the two pointy vertices.
    pub fn vertical_extent(&self) -> f32 {
        self.top.y - self.bottom.y
    }
}

/// A peak paired with the text that should label it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSpec {
    pub text: String,
    pub peak: Peak,
}

/// A placed label. `(x, y)` is the box's anchor corner: the left end of its
/// lower edge in chart space (y up), where the baseline starts once y is
/// flipped for drawing. Built once by the fitter and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    text: String,
    x: f32,
    y: f32,
    font: String,
    font_size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f32, y: f32, font: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font: font.into(),
            font_size,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}
