//! Backend abstraction Trait

use async_trait::async_trait;

use crate::error::RequestError;
use crate::types::{AnalysisResult, AnalyzeRequest, GenerateRequest, GenerateResponse};

/// Analysis / script generation backend
///
/// Implementations:
/// - `HttpBackend`: the Flask-compatible HTTP server (`/analyze`, `/generate`)
/// - test doubles in `tests/common`
#[async_trait]
pub trait ScriptBackend: Send + Sync {
    /// Analyze a topic into keyword and title suggestions
    ///
    /// # Arguments
    /// * `request` - trimmed, non-empty topic
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, RequestError>;

    /// Generate a script from the selected keyword indices and title index
    ///
    /// # Arguments
    /// * `request` - indices into the catalog of the most recent analysis
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, RequestError>;
}
