#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod ir;
pub mod label_dump;
pub mod layout;
pub mod log;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, FitConfig, RenderConfig, load_config};
pub use geometry::{Edge, Line, Point, Slope};
pub use ir::{Label, Peak, PeakSpec};
pub use layout::{
    Annotation, Orientation, Outcome, annotate_peaks, fit_w_label, fit_w_label_detailed,
    is_w_type,
};
pub use parser::{WaveDocument, parse_wave_document};
pub use render::render_svg;
pub use text_metrics::{ApproxMetrics, FontMetrics, TextBox, TextMetrics};
pub use theme::Theme;
