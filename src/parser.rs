use crate::geometry::Point;
use crate::ir::{Peak, PeakSpec};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid wave document: {0}")]
    Syntax(String),
    #[error("peak {index}: top ({top}) lies below bottom ({bottom})")]
    Inverted { index: usize, top: f32, bottom: f32 },
    #[error("peak {index}: {boundary} corners are out of order along x")]
    Unordered { index: usize, boundary: &'static str },
    #[error("peak {index}: label text is empty")]
    EmptyText { index: usize },
    #[error("peak {index}: coordinates must be finite")]
    NonFinite { index: usize },
}

/// A parsed input document: the peaks to label and the font to label them
/// with.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDocument {
    pub font: Option<String>,
    pub peaks: Vec<PeakSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentFile {
    font: Option<String>,
    #[serde(default)]
    peaks: Vec<PeakFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeakFile {
    text: String,
    top: [f32; 2],
    bottom: [f32; 2],
    top_left: [f32; 2],
    top_right: [f32; 2],
    bottom_left: [f32; 2],
    bottom_right: [f32; 2],
}

/// Parse a wave document. Plain JSON is tried first, then JSON5 so hand
/// written files may carry comments and trailing commas.
pub fn parse_wave_document(input: &str) -> Result<WaveDocument, ParseError> {
    let file: DocumentFile = match serde_json::from_str(input) {
        Ok(file) => file,
        Err(json_err) => json5::from_str(input).map_err(|json5_err| {
            ParseError::Syntax(format!("{json_err}; as JSON5: {json5_err}"))
        })?,
    };

    let mut peaks = Vec::with_capacity(file.peaks.len());
    for (index, raw) in file.peaks.into_iter().enumerate() {
        peaks.push(build_peak(index, raw)?);
    }

    let font = file
        .font
        .map(|font| font.trim().to_string())
        .filter(|font| !font.is_empty());

    Ok(WaveDocument { font, peaks })
}

fn build_peak(index: usize, raw: PeakFile) -> Result<PeakSpec, ParseError> {
    let coords = [
        raw.top,
        raw.bottom,
        raw.top_left,
        raw.top_right,
        raw.bottom_left,
        raw.bottom_right,
    ];
    if coords.iter().flatten().any(|value| !value.is_finite()) {
        return Err(ParseError::NonFinite { index });
    }
    if raw.text.trim().is_empty() {
        return Err(ParseError::EmptyText { index });
    }

    let top = Point::from(raw.top);
    let bottom = Point::from(raw.bottom);
    if top.y < bottom.y {
        return Err(ParseError::Inverted {
            index,
            top: top.y,
            bottom: bottom.y,
        });
    }

    let top_left = Point::from(raw.top_left);
    let top_right = Point::from(raw.top_right);
    if !(top_left.x <= top.x && top.x <= top_right.x) {
        return Err(ParseError::Unordered {
            index,
            boundary: "top",
        });
    }
    let bottom_left = Point::from(raw.bottom_left);
    let bottom_right = Point::from(raw.bottom_right);
    if !(bottom_left.x <= bottom.x && bottom.x <= bottom_right.x) {
        return Err(ParseError::Unordered {
            index,
            boundary: "bottom",
        });
    }

    Ok(PeakSpec {
        text: raw.text,
        peak: Peak::from_boundaries(top_left, top, top_right, bottom_left, bottom, bottom_right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Slope;

    const ONE_PEAK: &str = r#"{
        "font": "Roboto",
        "peaks": [{
            "text": "Radiohead",
            "topLeft": [0, 140], "top": [10, 100], "topRight": [20, 140],
            "bottomLeft": [0, 40], "bottom": [10, 0], "bottomRight": [20, 40]
        }]
    }"#;

    #[test]
    fn parses_json_document() {
        let doc = parse_wave_document(ONE_PEAK).expect("parses");
        assert_eq!(doc.font.as_deref(), Some("Roboto"));
        assert_eq!(doc.peaks.len(), 1);
        let peak = &doc.peaks[0].peak;
        assert_eq!(doc.peaks[0].text, "Radiohead");
        assert_eq!(peak.a.slope, Slope::Finite(-4.0));
        assert_eq!(peak.d.slope, Slope::Finite(4.0));
    }

    #[test]
    fn parses_json5_with_comments() {
        let input = r#"{
            // hand written
            peaks: [{
                text: 'Air',
                topLeft: [0, 50], top: [5, 40], topRight: [10, 50],
                bottomLeft: [0, 10], bottom: [5, 0], bottomRight: [10, 10],
            }],
        }"#;
        let doc = parse_wave_document(input).expect("parses");
        assert_eq!(doc.font, None);
        assert_eq!(doc.peaks[0].text, "Air");
    }

    #[test]
    fn rejects_inverted_peak() {
        let input = ONE_PEAK.replace("\"bottom\": [10, 0]", "\"bottom\": [10, 120]");
        let err = parse_wave_document(&input).expect_err("inverted");
        assert!(matches!(err, ParseError::Inverted { index: 0, .. }));
    }

    #[test]
    fn rejects_unordered_corners() {
        let input = ONE_PEAK.replace("\"topRight\": [20, 140]", "\"topRight\": [5, 140]");
        let err = parse_wave_document(&input).expect_err("unordered");
        assert!(matches!(
            err,
            ParseError::Unordered {
                boundary: "top",
                ..
            }
        ));
    }

    #[test]
    fn rejects_blank_text() {
        let input = ONE_PEAK.replace("Radiohead", "  ");
        assert!(matches!(
            parse_wave_document(&input),
            Err(ParseError::EmptyText { index: 0 })
        ));
    }

    #[test]
    fn reports_syntax_errors() {
        let err = parse_wave_document("{ peaks: [").expect_err("broken");
        assert!(matches!(err, ParseError::Syntax(_)));
    }

    #[test]
    fn blank_font_is_ignored() {
        let input = ONE_PEAK.replace("\"Roboto\"", "\"  \"");
        let doc = parse_wave_document(&input).expect("parses");
        assert_eq!(doc.font, None);
    }
}
