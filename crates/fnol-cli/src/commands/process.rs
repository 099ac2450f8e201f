use fnol_core::error::FnolError;
use fnol_core::extraction::reader_for_path;
use fnol_core::result::{ProcessingResult, ProcessingStatus};
use fnol_core::routing::RuleEvaluation;
use fnol_core::rules::{self, builtin};
use fnol_core::Pipeline;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    rules_file: Option<PathBuf>,
    output_format: &str,
    explain: bool,
) -> Result<ProcessingStatus, FnolError> {
    let config = match rules_file {
        Some(path) => rules::load_config(&path)?,
        None => builtin::default_config()?,
    };
    let pipeline = Pipeline::new(config)?;

    let (result, trace) = process_file(&pipeline, &input_file, explain)?;

    match output_format {
        "json" => output::json::print(&result, trace.as_deref())?,
        _ => output::table::print(&input_file, &result, trace.as_deref()),
    }

    Ok(result.status)
}

/// Read and process one file. Empty or unsupported files are refused with a
/// FAILED result; only IO errors on an existing file propagate.
fn process_file(
    pipeline: &Pipeline,
    path: &Path,
    explain: bool,
) -> Result<(ProcessingResult, Option<Vec<RuleEvaluation>>), FnolError> {
    let reader = match reader_for_path(path) {
        Ok(reader) => reader,
        Err(e) => return Ok((ProcessingResult::rejected(&e), None)),
    };

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Ok((ProcessingResult::rejected(&FnolError::EmptyDocument), None));
    }
    tracing::info!(
        file = %path.display(),
        backend = reader.backend_name(),
        bytes = bytes.len(),
        "processing document"
    );

    if !explain {
        return Ok((pipeline.process_bytes(&bytes, reader.as_ref()), None));
    }

    match reader.read(&bytes) {
        Ok(source) => {
            let assessment = pipeline.evaluate(&source);
            let result = ProcessingResult::from_assessment(&assessment);
            Ok((result, Some(assessment.outcome.evaluations)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "document could not be read");
            Ok((ProcessingResult::failed(&e), None))
        }
    }
}
