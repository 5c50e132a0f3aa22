use super::debug::FitObserver;
use super::orientation::is_w_type;
use super::w_label::fit_w_label_observed;
use crate::config::FitConfig;
use crate::ir::{Label, PeakSpec};
use crate::log::debug;
use crate::text_metrics::TextMetrics;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Placed { label: Label },
    /// W-shaped, but no size fits.
    NoFit,
    /// Some other labeling strategy applies; the W fitter was not run.
    NotWShape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Annotation {
    pub fn label(&self) -> Option<&Label> {
        match &self.outcome {
            Outcome::Placed { label } => Some(label),
            _ => None,
        }
    }
}

/// Label every peak that takes the W strategy. Peaks that are not W-shaped,
/// or where nothing fits, are reported and skipped; partial coverage is the
/// normal result.
pub fn annotate_peaks<M, O>(
    peaks: &[PeakSpec],
    font: &str,
    metrics: &M,
    config: &FitConfig,
    observer: &mut O,
) -> Vec<Annotation>
where
    M: TextMetrics + ?Sized,
    O: FitObserver + ?Sized,
{
    peaks
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let outcome = if !is_w_type(&spec.peak) {
                Outcome::NotWShape
            } else {
                match fit_w_label_observed(&spec.peak, &spec.text, font, metrics, config, observer) {
                    Some(label) => Outcome::Placed { label },
                    None => {
                        debug!(index, text = spec.text.as_str(), "no W label fits");
                        Outcome::NoFit
                    }
                }
            };
            Annotation {
                index,
                text: spec.text.clone(),
                outcome,
            }
        })
        .collect()
}
