mod normalizer;
mod parser;

use crate::questionnaire::{QuestionCatalog, SurveyDataset};
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum FormsImportError {
    #[error("failed to read questionnaire export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questionnaire CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads the questionnaire CSV export into a [`SurveyDataset`]. The engine
/// itself only depends on label-addressed answers; this importer is one
/// producer of that table.
pub struct FormsExportImporter;

impl FormsExportImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<SurveyDataset, FormsImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<SurveyDataset, FormsImportError> {
        let parsed = parser::parse_export(reader, catalog)?;
        let dataset = SurveyDataset::new(parsed.questions, parsed.responses);
        info!(
            responses = dataset.len(),
            questions = dataset.questions().len(),
            "questionnaire export loaded"
        );
        Ok(dataset)
    }
}
