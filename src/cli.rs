use crate::config::load_config;
use crate::label_dump::{LabelDump, write_label_dump};
use crate::layout::{DebugRecorder, NoopObserver, annotate_peaks};
use crate::log::warn;
use crate::parser::parse_wave_document;
use crate::render::{render_svg, write_output_svg};
use crate::text_metrics::metrics_for;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "wlabel", version, about = "Fit labels inside W-shaped wave peaks")]
pub struct Args {
    /// Input wave document (.json / .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (fit tuning, themeVariables)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Font family, overriding the document and the theme
    #[arg(short = 'f', long = "font")]
    pub font: Option<String>,

    /// Measure text with the font-free approximation
    #[arg(long = "fastText")]
    pub fast_text: bool,

    /// Include the fitter's probe geometry in the output
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if args.fast_text {
        config.fit.fast_text_metrics = true;
    }

    let input = read_input(args.input.as_deref())?;
    let document = parse_wave_document(&input)?;
    if document.peaks.is_empty() {
        return Err(anyhow::anyhow!("No peaks found in input"));
    }

    let font = args
        .font
        .or(document.font)
        .unwrap_or_else(|| config.theme.font_family.clone());
    let metrics = metrics_for(&config.fit);

    let mut recorder = args.debug.then(DebugRecorder::new);
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

    let placed = annotations.iter().filter(|a| a.label().is_some()).count();
    if placed == 0 {
        warn!(peaks = annotations.len(), "no peak received a W label");
    }

    let output = match args.output_format {
        OutputFormat::Svg => render_svg(
            &document.peaks,
            &annotations,
            recorder.as_ref(),
            &config.theme,
            &config.render,
        ),
        OutputFormat::Json => {
            if let Some(path) = args.output.as_deref() {
                return write_label_dump(path, &font, &annotations, recorder.as_ref());
            }
            LabelDump::from_annotations(&font, &annotations, recorder.as_ref()).to_json()?
        }
    };
    write_output_svg(&output, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
