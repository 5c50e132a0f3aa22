use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Tuning for the W label fitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// First size probed, and the size used for the feasibility gate.
    pub starting_font_size: f32,
    /// Growth step between probes.
    pub font_size_interval: f32,
    /// Multiplier applied to the resolved size to absorb measurement error.
    pub font_size_safety_scale: f32,
    /// Optional ceiling on probed sizes. Unset by default: the loop ends on
    /// its own for any metrics backend whose height grows with the size.
    #[serde(default)]
    pub max_font_size: Option<f32>,
    /// Use the font-free approximation instead of system fonts.
    pub fast_text_metrics: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            starting_font_size: 5.0,
            font_size_interval: 2.0,
            font_size_safety_scale: 0.9,
            max_font_size: None,
            fast_text_metrics: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("starting font size must be positive, got {0}")]
    StartingFontSize(f32),
    #[error("font size interval must be positive, got {0}")]
    FontSizeInterval(f32),
    #[error("font size safety scale must be in (0, 1], got {0}")]
    SafetyScale(f32),
    #[error("max font size {max} is below the starting font size {start}")]
    MaxFontSize { max: f32, start: f32 },
}

impl FitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.starting_font_size > 0.0) {
            return Err(ConfigError::StartingFontSize(self.starting_font_size));
        }
        if !(self.font_size_interval > 0.0) {
            return Err(ConfigError::FontSizeInterval(self.font_size_interval));
        }
        if !(self.font_size_safety_scale > 0.0 && self.font_size_safety_scale <= 1.0) {
            return Err(ConfigError::SafetyScale(self.font_size_safety_scale));
        }
        if let Some(max) = self.max_font_size
            && !(max >= self.starting_font_size)
        {
            return Err(ConfigError::MaxFontSize {
                max,
                start: self.starting_font_size,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Padding around the peaks' bounding box in the SVG output.
    pub padding: f32,
    pub background: String,
    pub stroke_width: f32,
    pub debug_point_radius: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 16.0,
            background: "#FFFFFF".to_string(),
            stroke_width: 1.2,
            debug_point_radius: 1.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub fit: FitConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            fit: FitConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    wave_fill: Option<String>,
    wave_stroke: Option<String>,
    label_color: Option<String>,
    background: Option<String>,
    debug_line: Option<String>,
    debug_left: Option<String>,
    debug_right: Option<String>,
    debug_text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct FitConfigFile {
    starting_font_size: Option<f32>,
    font_size_interval: Option<f32>,
    font_size_safety_scale: Option<f32>,
    max_font_size: Option<f32>,
    fast_text_metrics: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    padding: Option<f32>,
    stroke_width: Option<f32>,
    debug_point_radius: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    fit: Option<FitConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "modern" => config.theme = Theme::modern(),
            "classic" | "default" => config.theme = Theme::classic(),
            other => anyhow::bail!("unknown theme '{other}'"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.wave_fill {
            config.theme.wave_fill = v;
        }
        if let Some(v) = vars.wave_stroke {
            config.theme.wave_stroke = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.debug_line {
            config.theme.debug_line = v;
        }
        if let Some(v) = vars.debug_left {
            config.theme.debug_left = v;
        }
        if let Some(v) = vars.debug_right {
            config.theme.debug_right = v;
        }
        if let Some(v) = vars.debug_text {
            config.theme.debug_text = v;
        }
    }

    if let Some(fit) = parsed.fit {
        if let Some(v) = fit.starting_font_size {
            config.fit.starting_font_size = v;
        }
        if let Some(v) = fit.font_size_interval {
            config.fit.font_size_interval = v;
        }
        if let Some(v) = fit.font_size_safety_scale {
            config.fit.font_size_safety_scale = v;
        }
        if let Some(v) = fit.max_font_size {
            config.fit.max_font_size = Some(v);
        }
        if let Some(v) = fit.fast_text_metrics {
            config.fit.fast_text_metrics = v;
        }
    }
    config.fit.validate()?;

    if let Some(render) = parsed.render {
        if let Some(v) = render.padding {
            config.render.padding = v;
        }
        if let Some(v) = render.stroke_width {
            config.render.stroke_width = v;
        }
        if let Some(v) = render.debug_point_radius {
            config.render.debug_point_radius = v;
        }
    }

    config.render.background = config.theme.background.clone();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fit_config_is_valid() {
        let config = FitConfig::default();
        assert_eq!(config.starting_font_size, 5.0);
        assert_eq!(config.font_size_interval, 2.0);
        assert_eq!(config.font_size_safety_scale, 0.9);
        assert_eq!(config.max_font_size, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn size_ceiling_is_opt_in() {
        let low = FitConfig {
            max_font_size: Some(2.0),
            ..FitConfig::default()
        };
        assert_eq!(
            low.validate(),
            Err(ConfigError::MaxFontSize { max: 2.0, start: 5.0 })
        );

        let config = parse_config(r#"{ "fit": { "maxFontSize": 400 } }"#).expect("config parses");
        assert_eq!(config.fit.max_font_size, Some(400.0));
    }

    #[test]
    fn validate_rejects_bad_tuning() {
        let zero_step = FitConfig {
            font_size_interval: 0.0,
            ..FitConfig::default()
        };
        assert_eq!(zero_step.validate(), Err(ConfigError::FontSizeInterval(0.0)));

        let growing = FitConfig {
            font_size_safety_scale: 1.5,
            ..FitConfig::default()
        };
        assert_eq!(growing.validate(), Err(ConfigError::SafetyScale(1.5)));

        let nan_start = FitConfig {
            starting_font_size: f32::NAN,
            ..FitConfig::default()
        };
        assert!(nan_start.validate().is_err());
    }

    #[test]
    fn parse_config_applies_overrides() {
        let config = parse_config(
            r##"{
                "theme": "modern",
                "themeVariables": { "labelColor": "#ff0000", "background": "#000000" },
                "fit": { "startingFontSize": 8, "fastTextMetrics": true },
                "render": { "padding": 4 }
            }"##,
        )
        .expect("config parses");
        assert_eq!(config.theme.label_color, "#ff0000");
        assert_eq!(config.theme.font_size, Theme::modern().font_size);
        assert_eq!(config.fit.starting_font_size, 8.0);
        assert_eq!(config.fit.font_size_interval, 2.0);
        assert!(config.fit.fast_text_metrics);
        assert_eq!(config.render.padding, 4.0);
        assert_eq!(config.render.background, "#000000");
    }

    #[test]
    fn parse_config_rejects_invalid_fit() {
        let err = parse_config(r#"{ "fit": { "fontSizeSafetyScale": 0 } }"#)
            .expect_err("zero scale is rejected");
        assert!(err.to_string().contains("safety scale"));
    }

    #[test]
    fn parse_config_rejects_unknown_theme() {
        assert!(parse_config(r#"{ "theme": "neon" }"#).is_err());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).expect("defaults");
        assert_eq!(config.fit, FitConfig::default());
    }
}
