use crate::config::FitConfig;
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::Face;

static TEXT_MEASURER: Lazy<Mutex<TextMeasurer>> = Lazy::new(|| Mutex::new(TextMeasurer::new()));

/// Bounding box of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextBox {
    pub width: f32,
    pub height: f32,
}

impl TextBox {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measures the box a piece of text occupies at a given font size.
///
/// # Contract
///
/// For a fixed `text` and `font`, both `width` and `height` must be
/// monotonically non-decreasing in `font_size`. The label fitter grows the
/// size until the box no longer fits; an oracle that shrinks as the size
/// grows makes that search meaningless. Implementations backed by a remote
/// shaper or renderer must answer synchronously and uphold the same rule.
pub trait TextMetrics {
    fn measure(&self, text: &str, font: &str, font_size: f32) -> TextBox;
}

impl<F> TextMetrics for F
where
    F: Fn(&str, &str, f32) -> TextBox,
{
    fn measure(&self, text: &str, font: &str, font_size: f32) -> TextBox {
        self(text, font, font_size)
    }
}

/// Font-free metrics: calibrated per-character advances and a fixed
/// height-to-size ratio. Linear in size, so the monotonic contract holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    pub height_ratio: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { height_ratio: 1.2 }
    }
}

impl TextMetrics for ApproxMetrics {
    fn measure(&self, text: &str, _font: &str, font_size: f32) -> TextBox {
        if font_size <= 0.0 {
            return TextBox::default();
        }
        let width = text
            .chars()
            .filter(|ch| *ch != '\n')
            .map(char_width_factor)
            .sum::<f32>()
            * font_size;
        TextBox::new(width, font_size * self.height_ratio)
    }
}

/// Metrics read from installed fonts via fontdb/ttf-parser. Families that
/// resolve to no face fall back to [`ApproxMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FontMetrics {
    pub fallback: ApproxMetrics,
}

impl TextMetrics for FontMetrics {
    fn measure(&self, text: &str, font: &str, font_size: f32) -> TextBox {
        measure_text(text, font_size, font)
            .unwrap_or_else(|| self.fallback.measure(text, font, font_size))
    }
}

/// Pick the metrics backend requested by the config.
pub fn metrics_for(config: &FitConfig) -> Box<dyn TextMetrics> {
    if config.fast_text_metrics {
        Box::new(ApproxMetrics::default())
    } else {
        Box::new(FontMetrics::default())
    }
}

pub fn measure_text(text: &str, font_size: f32, font_family: &str) -> Option<TextBox> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(TextBox::default());
    }
    let mut guard = TEXT_MEASURER.lock().ok()?;
    guard.measure(text, font_size, font_family)
}

fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' => 0.30,
        'i' | 'j' | 'l' | 'I' | '\'' | '|' | '!' | '.' | ',' | ':' | ';' => 0.26,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '{' | '}' => 0.35,
        'm' | 'w' => 0.84,
        'M' | 'W' => 0.93,
        '@' | '#' | '%' | '&' => 0.95,
        'A'..='Z' => 0.66,
        'a'..='z' => 0.56,
        '0'..='9' => 0.60,
        ch if ch.is_ascii() => 0.57,
        // CJK and other wide scripts
        _ => 1.0,
    }
}

/// Resolved faces keyed by the family string they were requested with.
/// `None` records a family with no installed face.
struct TextMeasurer {
    db: Database,
    system_fonts_loaded: bool,
    faces: HashMap<String, Option<FontFace>>,
}

impl TextMeasurer {
    fn new() -> Self {
        Self {
            db: Database::new(),
            system_fonts_loaded: false,
            faces: HashMap::new(),
        }
    }

    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<TextBox> {
        let key = font_family.trim().to_string();
        if !self.faces.contains_key(&key) {
            let face = self.resolve(font_family);
            self.faces.insert(key.clone(), face);
        }
        self.faces.get_mut(&key)?.as_mut()?.measure(text, font_size)
    }

    fn resolve(&mut self, font_family: &str) -> Option<FontFace> {
        if !self.system_fonts_loaded {
            self.db.load_system_fonts();
            self.system_fonts_loaded = true;
        }
        let names = parse_family_list(font_family);
        let families: Vec<Family<'_>> = names.iter().map(FamilyName::as_family).collect();
        let id = self.db.query(&Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })?;
        self.db
            .with_face_data(id, |data, index| FontFace::new(data.to_vec(), index))
            .flatten()
    }
}

enum FamilyName {
    Generic(Family<'static>),
    Named(String),
}

impl FamilyName {
    fn as_family(&self) -> Family<'_> {
        match self {
            FamilyName::Generic(family) => *family,
            FamilyName::Named(name) => Family::Name(name.as_str()),
        }
    }
}

/// Split a CSS-like `font-family` list, mapping generic keywords to fontdb
/// families. An empty list means `sans-serif`.
fn parse_family_list(font_family: &str) -> Vec<FamilyName> {
    let mut names = Vec::new();
    for part in font_family.split(',') {
        let raw = part.trim().trim_matches('"').trim_matches('\'');
        if raw.is_empty() {
            continue;
        }
        let name = match raw.to_ascii_lowercase().as_str() {
            "serif" => FamilyName::Generic(Family::Serif),
            "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => {
                FamilyName::Generic(Family::SansSerif)
            }
            "monospace" | "ui-monospace" => FamilyName::Generic(Family::Monospace),
            "cursive" => FamilyName::Generic(Family::Cursive),
            "fantasy" => FamilyName::Generic(Family::Fantasy),
            _ => FamilyName::Named(raw.to_string()),
        };
        names.push(name);
    }
    if names.is_empty() {
        names.push(FamilyName::Generic(Family::SansSerif));
    }
    names
}

struct FontFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
    line_height: f32,
    advances: HashMap<char, Option<u16>>,
}

impl FontFace {
    fn new(data: Vec<u8>, index: u32) -> Option<Self> {
        let face = Face::parse(&data, index).ok()?;
        let units_per_em = f32::from(face.units_per_em().max(1));
        let line_height = f32::from(face.ascender()) - f32::from(face.descender());
        Some(Self {
            data,
            index,
            units_per_em,
            line_height,
            advances: HashMap::new(),
        })
    }

    fn advance(&mut self, ch: char) -> Option<u16> {
        if let Some(cached) = self.advances.get(&ch) {
            return *cached;
        }
        let face = Face::parse(&self.data, self.index).ok()?;
        let advance = face
            .glyph_index(ch)
            .map(|id| face.glyph_hor_advance(id).unwrap_or(0));
        self.advances.insert(ch, advance);
        advance
    }

    /// Width is the summed advance, height the face's line box. Both scale
    /// linearly with size.
    fn measure(&mut self, text: &str, font_size: f32) -> Option<TextBox> {
        let scale = font_size / self.units_per_em;
        let mut advance = 0.0f32;
        let mut missing = 0usize;
        for ch in text.chars().filter(|ch| *ch != '\n') {
            match self.advance(ch) {
                Some(units) => advance += f32::from(units),
                None => missing += 1,
            }
        }
        let width = advance * scale + missing as f32 * font_size * 0.56;
        Some(TextBox::new(width.max(0.0), (self.line_height * scale).max(0.0)))
    }
}
