use crate::config::RenderConfig;
use crate::geometry::Point;
use crate::ir::PeakSpec;
use crate::layout::{Annotation, DebugColor, DebugCommand, DebugRecorder};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Chart space (y up) to SVG space (y down), padded around the peaks.
struct Viewport {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    padding: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    fn fit(peaks: &[PeakSpec], padding: f32) -> Self {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for spec in peaks {
            for point in outline(spec) {
                min_x = min_x.min(point.x);
                max_x = max_x.max(point.x);
                min_y = min_y.min(point.y);
                max_y = max_y.max(point.y);
            }
        }
        if !min_x.is_finite() {
            (min_x, max_x, min_y, max_y) = (0.0, 0.0, 0.0, 0.0);
        }
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            padding,
            width: (max_x - min_x) + padding * 2.0,
            height: (max_y - min_y) + padding * 2.0,
        }
    }

    fn x(&self, x: f32) -> f32 {
        x - self.min_x + self.padding
    }

    fn y(&self, y: f32) -> f32 {
        self.max_y - y + self.padding
    }
}

fn outline(spec: &PeakSpec) -> [Point; 6] {
    let peak = &spec.peak;
    [
        peak.top_left,
        peak.top,
        peak.top_right,
        peak.bottom_right,
        peak.bottom,
        peak.bottom_left,
    ]
}

/// Draw the peaks, their fitted labels and, when given, the fitter's debug
/// trace as an SVG document.
pub fn render_svg(
    peaks: &[PeakSpec],
    annotations: &[Annotation],
    debug: Option<&DebugRecorder>,
    theme: &Theme,
    config: &RenderConfig,
) -> String {
    let view = Viewport::fit(peaks, config.padding);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" viewBox=\"0 0 {w:.2} {h:.2}\">",
        w = view.width,
        h = view.height,
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.background
    ));

    for spec in peaks {
        let points = outline(spec)
            .iter()
            .map(|p| format!("{:.2},{:.2}", view.x(p.x), view.y(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            points, theme.wave_fill, theme.wave_stroke, config.stroke_width
        ));
    }

    if let Some(recorder) = debug {
        for command in &recorder.commands {
            svg.push_str(&debug_command_svg(command, &view, theme, config));
        }
    }

    for label in annotations.iter().filter_map(Annotation::label) {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{:.2}\" fill=\"{}\">{}</text>",
            view.x(label.x()),
            view.y(label.y()),
            escape_xml(label.font()),
            label.font_size(),
            theme.label_color,
            escape_xml(label.text())
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn debug_command_svg(
    command: &DebugCommand,
    view: &Viewport,
    theme: &Theme,
    config: &RenderConfig,
) -> String {
    match command {
        DebugCommand::Line {
            anchor,
            slope,
            color,
        } => {
            let (start, end) = match slope {
                Some(m) => (
                    Point::new(view.min_x, anchor.y + m * (view.min_x - anchor.x)),
                    Point::new(view.max_x, anchor.y + m * (view.max_x - anchor.x)),
                ),
                None => (
                    Point::new(anchor.x, view.min_y),
                    Point::new(anchor.x, view.max_y),
                ),
            };
            format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"0.5\"/>",
                view.x(start.x),
                view.y(start.y),
                view.x(end.x),
                view.y(end.y),
                debug_color(*color, theme)
            )
        }
        DebugCommand::Point { point, color } => format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>",
            view.x(point.x),
            view.y(point.y),
            config.debug_point_radius,
            debug_color(*color, theme)
        ),
        DebugCommand::TextBelowPoint { point, text } => format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"6\" fill=\"{}\">{}</text>",
            view.x(point.x),
            view.y(point.y) + 6.0,
            theme.debug_text,
            escape_xml(text)
        ),
    }
}

fn debug_color(color: DebugColor, theme: &Theme) -> &str {
    match color {
        DebugColor::Black => &theme.debug_line,
        DebugColor::Red => &theme.debug_left,
        DebugColor::Green => &theme.debug_right,
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
