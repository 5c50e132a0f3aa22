// Side channel for visualising what the fitter probed. Observers see the
// geometry but hand nothing back, so they cannot steer a fit.

use crate::geometry::{Line, Point};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugColor {
    Black,
    Red,
    Green,
}

pub trait FitObserver {
    fn line(&mut self, _line: &Line, _color: DebugColor) {}
    fn point(&mut self, _point: Point, _color: DebugColor) {}
    fn text_below_point(&mut self, _point: Point, _text: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FitObserver for NoopObserver {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DebugCommand {
    Line {
        anchor: Point,
        /// `None` for vertical lines.
        slope: Option<f32>,
        color: DebugColor,
    },
    Point {
        point: Point,
        color: DebugColor,
    },
    TextBelowPoint {
        point: Point,
        text: String,
    },
}

/// Records every draw command in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DebugRecorder {
    pub commands: Vec<DebugCommand>,
}

impl DebugRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FitObserver for DebugRecorder {
    fn line(&mut self, line: &Line, color: DebugColor) {
        self.commands.push(DebugCommand::Line {
            anchor: line.anchor,
            slope: line.slope.finite(),
            color,
        });
    }

    fn point(&mut self, point: Point, color: DebugColor) {
        self.commands.push(DebugCommand::Point { point, color });
    }

    fn text_below_point(&mut self, point: Point, text: &str) {
        self.commands.push(DebugCommand::TextBelowPoint {
            point,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_commands_in_order() {
        let mut recorder = DebugRecorder::new();
        recorder.line(&Line::horizontal(3.0), DebugColor::Black);
        recorder.point(Point::new(1.0, 3.0), DebugColor::Red);
        recorder.text_below_point(Point::new(9.0, 3.0), "7");
        assert_eq!(recorder.commands.len(), 3);
        assert!(matches!(
            recorder.commands[0],
            DebugCommand::Line { slope: Some(s), color: DebugColor::Black, .. } if s == 0.0
        ));
        assert!(matches!(
            &recorder.commands[2],
            DebugCommand::TextBelowPoint { text, .. } if text == "7"
        ));
    }

    #[test]
    fn vertical_lines_record_without_slope() {
        let mut recorder = DebugRecorder::new();
        recorder.line(&Line::vertical(2.0), DebugColor::Green);
        assert!(matches!(
            recorder.commands[0],
            DebugCommand::Line { slope: None, .. }
        ));
    }

    #[test]
    fn noop_observer_accepts_everything() {
        let mut observer = NoopObserver;
        observer.line(&Line::horizontal(0.0), DebugColor::Black);
        observer.point(Point::new(0.0, 0.0), DebugColor::Red);
        observer.text_below_point(Point::new(0.0, 0.0), "5");
    }
}
