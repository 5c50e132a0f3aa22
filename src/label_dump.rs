use crate::layout::{Annotation, DebugCommand, DebugRecorder, Outcome};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub font: String,
    pub placed: usize,
    pub skipped: usize,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Vec<DebugCommand>>,
}

impl LabelDump {
    pub fn from_annotations(
        font: &str,
        annotations: &[Annotation],
        debug: Option<&DebugRecorder>,
    ) -> Self {
        let placed = annotations
            .iter()
            .filter(|a| matches!(a.outcome, Outcome::Placed { .. }))
            .count();
        LabelDump {
            font: font.to_string(),
            placed,
            skipped: annotations.len() - placed,
            annotations: annotations.to_vec(),
            debug: debug.map(|recorder| recorder.commands.clone()),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn write_label_dump(
    path: &Path,
    font: &str,
    annotations: &[Annotation],
    debug: Option<&DebugRecorder>,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LabelDump::from_annotations(font, annotations, debug);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
