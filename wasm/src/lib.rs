use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wave_labels::label_dump::LabelDump;
use wave_labels::layout::{Annotation, DebugRecorder, NoopObserver, annotate_peaks};
use wave_labels::text_metrics::metrics_for;
use wave_labels::{Config, Theme, WaveDocument, parse_wave_document, render_svg};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WaveLabelOptions {
    theme: Option<String>,
    font_family: Option<String>,
    fast_text: Option<bool>,
    debug: Option<bool>,
}

struct Prepared {
    config: Config,
    font: String,
    document: WaveDocument,
    annotations: Vec<Annotation>,
    recorder: Option<DebugRecorder>,
}

fn build_config(options: &WaveLabelOptions) -> Config {
    let mut config = Config::default();
    if options.theme.as_deref() == Some("modern") {
        config.theme = Theme::modern();
        config.render.background = config.theme.background.clone();
    }
    // No system fonts in the browser sandbox.
    config.fit.fast_text_metrics = options.fast_text.unwrap_or(true);
    config
}

fn prepare(document_json: &str, options_json: Option<String>) -> Result<Prepared, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<WaveLabelOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        WaveLabelOptions::default()
    };

    let config = build_config(&options);
    let document =
        parse_wave_document(document_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    let font = options
        .font_family
        .clone()
        .or_else(|| document.font.clone())
        .unwrap_or_else(|| config.theme.font_family.clone());

    let metrics = metrics_for(&config.fit);
    let mut recorder = options.debug.unwrap_or(false).then(DebugRecorder::new);
    let annotations = match recorder.as_mut() {
        Some(recorder) => annotate_peaks(&document.peaks, &font, metrics.as_ref(), &config.fit, recorder),
        None => annotate_peaks(
            &document.peaks,
            &font,
            metrics.as_ref(),
            &config.fit,
            &mut NoopObserver,
        ),
    };

    Ok(Prepared {
        config,
        font,
        document,
        annotations,
        recorder,
    })
}

/// Fit labels for every peak in `document_json` and return the label dump as
/// JSON.
#[wasm_bindgen]
pub fn fit_wave_labels(document_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let prepared = prepare(document_json, options_json)?;
    LabelDump::from_annotations(&prepared.font, &prepared.annotations, prepared.recorder.as_ref())
        .to_json()
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[wasm_bindgen]
pub fn render_wave_svg(document_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let prepared = prepare(document_json, options_json)?;
    Ok(render_svg(
        &prepared.document.peaks,
        &prepared.annotations,
        prepared.recorder.as_ref(),
        &prepared.config.theme,
        &prepared.config.render,
    ))
}
