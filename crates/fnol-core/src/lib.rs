pub mod assemble;
pub mod completeness;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod result;
pub mod routing;
pub mod rules;

use error::FnolError;
use extraction::{DocumentReader, FieldSource};
use model::FnolDocument;
use parsing::free_text::FreeTextStrategy;
use parsing::patterns::PatternLibrary;
use parsing::structured::StructuredStrategy;
use result::ProcessingResult;
use routing::{RoutingContext, RoutingOutcome};
use rules::schema::RoutingConfig;

/// Everything decided about one claim before it is flattened for output.
#[derive(Debug, Clone)]
pub struct ClaimAssessment {
    pub document: FnolDocument,
    pub missing_fields: Vec<String>,
    pub outcome: RoutingOutcome,
}

/// Extraction and routing for single intake documents.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug)]
pub struct Pipeline {
    patterns: PatternLibrary,
    config: RoutingConfig,
}

impl Pipeline {
    /// Validate `config` and compile the extraction patterns.
    pub fn new(config: RoutingConfig) -> Result<Self, FnolError> {
        rules::validate_config(&config)?;
        Ok(Pipeline {
            patterns: PatternLibrary::new()?,
            config,
        })
    }

    /// Pipeline with the embedded default routing configuration.
    pub fn with_defaults() -> Result<Self, FnolError> {
        Self::new(rules::builtin::default_config()?)
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Build the claim aggregate from decoded content.
    pub fn extract(&self, source: &FieldSource) -> FnolDocument {
        match source {
            FieldSource::Structured(form) => {
                assemble::assemble(&StructuredStrategy::new(form))
            }
            FieldSource::Unstructured(text) => {
                assemble::assemble(&FreeTextStrategy::new(&self.patterns, text))
            }
        }
    }

    /// Extract, check completeness and route.
    pub fn evaluate(&self, source: &FieldSource) -> ClaimAssessment {
        let document = self.extract(source);
        let missing_fields = completeness::missing_fields(&document);
        let outcome = routing::route(&RoutingContext::new(
            &document,
            &missing_fields,
            &self.config,
        ));

        tracing::info!(
            source = source.kind(),
            route = %outcome.decision,
            missing = missing_fields.len(),
            "claim routed"
        );

        ClaimAssessment {
            document,
            missing_fields,
            outcome,
        }
    }

    /// Process decoded content into a response payload.
    pub fn process(&self, source: &FieldSource) -> ProcessingResult {
        let result = ProcessingResult::from_assessment(&self.evaluate(source));
        tracing::info!(status = %result.status, "document processed");
        result
    }

    /// Decode `bytes` with `reader` and process them. Decoding failures
    /// come back as a FAILED result rather than an error.
    pub fn process_bytes(&self, bytes: &[u8], reader: &dyn DocumentReader) -> ProcessingResult {
        match reader.read(bytes) {
            Ok(source) => self.process(&source),
            Err(e) => {
                tracing::warn!(backend = reader.backend_name(), error = %e, "document could not be read");
                ProcessingResult::failed(&e)
            }
        }
    }
}
