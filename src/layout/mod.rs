// Label placement for wave peaks.

mod annotate;
pub mod debug;
mod orientation;
mod w_label;

pub use annotate::{Annotation, Outcome, annotate_peaks};
pub use debug::{DebugColor, DebugCommand, DebugRecorder, FitObserver, NoopObserver};
pub use orientation::{Orientation, is_w_type};
pub use w_label::{StopReason, WLabelFit, fit_w_label, fit_w_label_detailed, fit_w_label_observed};
