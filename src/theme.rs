use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub wave_fill: String,
    pub wave_stroke: String,
    pub label_color: String,
    pub background: String,
    pub debug_line: String,
    pub debug_left: String,
    pub debug_right: String,
    pub debug_text: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "\"Roboto\", \"Helvetica Neue\", arial, sans-serif".to_string(),
            font_size: 12.0,
            wave_fill: "#D8E3F0".to_string(),
            wave_stroke: "#7A8AA6".to_string(),
            label_color: "#1C2430".to_string(),
            background: "#FFFFFF".to_string(),
            debug_line: "black".to_string(),
            debug_left: "red".to_string(),
            debug_right: "green".to_string(),
            debug_text: "#333333".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            wave_fill: "#F8FAFF".to_string(),
            wave_stroke: "#C7D2E5".to_string(),
            label_color: "#1C2430".to_string(),
            background: "#FFFFFF".to_string(),
            debug_line: "#1C2430".to_string(),
            debug_left: "#E5484D".to_string(),
            debug_right: "#30A46C".to_string(),
            debug_text: "#7A8AA6".to_string(),
        }
    }
}
