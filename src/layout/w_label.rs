// Fits a label inside a W-shaped peak.
//
// The text box always touches the pointy vertex (`top` for upper peaks,
// `bottom` for lower ones) and grows away from it. At each probed size the
// box's far edge is a horizontal line; where that line meets the two
// bounding strokes gives the width available at that size. Growth stops as
// soon as the box leaves the peak vertically or no longer fits horizontally.

use super::debug::{DebugColor, FitObserver, NoopObserver};
use super::orientation::Orientation;
use crate::config::FitConfig;
use crate::geometry::{Edge, Line, Point};
use crate::ir::{Label, Peak};
use crate::log::debug;
use crate::text_metrics::TextMetrics;
use serde::Serialize;

/// Why the growth loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The box's far edge left the peak's vertical extent.
    VerticalOverflow,
    /// The text was at least as wide as the room between the strokes.
    WidthOverflow,
    /// The next size would exceed the configured `FitConfig::max_font_size`.
    SizeCap,
}

/// A successful fit together with how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WLabelFit {
    pub label: Label,
    pub orientation: Orientation,
    /// Size at which growth stopped, before the safety scale. Always
    /// `starting_font_size + k * font_size_interval`.
    pub resolved_font_size: f32,
    pub stop: StopReason,
    /// Number of sizes whose collisions were computed.
    pub iterations: usize,
}

/// Largest label that fits inside `peak`, or `None` when nothing does.
///
/// `peak` must satisfy [`is_w_type`](super::is_w_type).
pub fn fit_w_label<M>(
    peak: &Peak,
    text: &str,
    font: &str,
    metrics: &M,
    config: &FitConfig,
) -> Option<Label>
where
    M: TextMetrics + ?Sized,
{
    fit_w_label_detailed(peak, text, font, metrics, config, &mut NoopObserver).map(|fit| fit.label)
}

/// [`fit_w_label`], reporting every probe to `observer`. The observer never
/// changes the result.
pub fn fit_w_label_observed<M, O>(
    peak: &Peak,
    text: &str,
    font: &str,
    metrics: &M,
    config: &FitConfig,
    observer: &mut O,
) -> Option<Label>
where
    M: TextMetrics + ?Sized,
    O: FitObserver + ?Sized,
{
    fit_w_label_detailed(peak, text, font, metrics, config, observer).map(|fit| fit.label)
}

pub fn fit_w_label_detailed<M, O>(
    peak: &Peak,
    text: &str,
    font: &str,
    metrics: &M,
    config: &FitConfig,
    observer: &mut O,
) -> Option<WLabelFit>
where
    M: TextMetrics + ?Sized,
    O: FitObserver + ?Sized,
{
    let orientation = Orientation::classify(peak);
    debug_assert!(
        orientation.is_some(),
        "fit_w_label called on a peak that is not W-shaped"
    );
    let orientation = orientation?;

    let start = config.starting_font_size;
    let minimum = metrics.measure(text, font, start);
    if peak.vertical_extent() < minimum.height {
        debug!(
            extent = peak.vertical_extent(),
            required = minimum.height,
            "peak too short for the smallest label"
        );
        return None;
    }

    let bounds = Bounds::for_peak(peak, orientation);

    let mut font_size = start;
    let mut left_collision: Option<Point> = None;
    let mut iterations = 0usize;

    let stop = loop {
        if config.max_font_size.is_some_and(|cap| font_size > cap) {
            break StopReason::SizeCap;
        }

        let text_box = metrics.measure(text, font, font_size);
        let inner_y = bounds.inner_y(text_box.height);
        if inner_y > peak.top.y || inner_y < peak.bottom.y {
            break StopReason::VerticalOverflow;
        }

        let reference = Line::horizontal(inner_y);
        let (left, right) = bounds.collisions(&reference, inner_y);
        let available_width = right.x - left.x;

        observer.line(&reference, DebugColor::Black);
        observer.point(left, DebugColor::Red);
        observer.point(right, DebugColor::Green);
        observer.text_below_point(right, &font_size.to_string());

        left_collision = Some(left);
        iterations += 1;

        if text_box.width < available_width {
            font_size += config.font_size_interval;
        } else {
            break StopReason::WidthOverflow;
        }
    };

    // Nothing was ever probed: the smallest size already overflowed.
    let left = left_collision?;

    let resolved_font_size = font_size;
    let final_size = resolved_font_size * config.font_size_safety_scale;
    let final_box = metrics.measure(text, font, final_size);
    let y = match orientation {
        Orientation::Upper => peak.top.y - final_box.height,
        Orientation::Lower => peak.bottom.y,
    };

    debug!(
        ?orientation,
        ?stop,
        resolved_font_size,
        final_size,
        iterations,
        "fitted W label"
    );

    Some(WLabelFit {
        label: Label::new(text, left.x, y, font, final_size),
        orientation,
        resolved_font_size,
        stop,
        iterations,
    })
}

/// Orientation-specific anchor and bounding strokes.
struct Bounds {
    orientation: Orientation,
    anchor_y: f32,
    left: Edge,
    right: Edge,
    fallback_left_x: f32,
    fallback_right_x: f32,
}

impl Bounds {
    fn for_peak(peak: &Peak, orientation: Orientation) -> Self {
        let (anchor_y, left, right) = match orientation {
            Orientation::Upper => (peak.top.y, peak.c, peak.d),
            Orientation::Lower => (peak.bottom.y, peak.a, peak.b),
        };
        Self {
            orientation,
            anchor_y,
            left,
            right,
            fallback_left_x: peak.top_left.x,
            fallback_right_x: peak.top_right.x,
        }
    }

    /// The edge of a box of `height` farthest from the anchor.
    fn inner_y(&self, height: f32) -> f32 {
        match self.orientation {
            Orientation::Upper => self.anchor_y - height,
            Orientation::Lower => self.anchor_y + height,
        }
    }

    /// Where `reference` meets each stroke. A stroke parallel to it falls
    /// back to the matching outer corner at the same height.
    fn collisions(&self, reference: &Line, y: f32) -> (Point, Point) {
        let left = reference
            .intersect(&self.left.line())
            .unwrap_or(Point::new(self.fallback_left_x, y));
        let right = reference
            .intersect(&self.right.line())
            .unwrap_or(Point::new(self.fallback_right_x, y));
        (left, right)
    }
}
