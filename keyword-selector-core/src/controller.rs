//! Selection controller
//!
//! Owns the loaded analysis, its catalog, the user's selection and the
//! generated script, and enforces the view-level state machine:
//!
//! ```text
//! Input ──begin_analyze──▶ Analyzing ──finish_analyze(Ok)──▶ Results ──begin_generate──▶ Generating ──finish_generate(Ok)──▶ Complete
//!   ▲                         │                               │  ▲                           │                                  │
//!   │                         └──────finish_analyze(Err)──────┼──┼───────────────────────────┘ finish_generate(Err)            │
//!   └────────────────────────────────reset────────────────────┴──┴──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each network operation is split in two halves so a non-blocking front-end
//! can run the request elsewhere: `begin_*` validates, moves into the loading
//! phase and returns the request body; `finish_*` consumes the outcome.
//! [`SelectionController::analyze_with`] and [`SelectionController::generate_with`]
//! run both halves against a [`ScriptBackend`].

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{RequestError, SelectorError, SelectorResult, ValidationError};
use crate::selection::SelectionState;
use crate::traits::ScriptBackend;
use crate::types::{AnalysisResult, AnalyzeRequest, GenerateRequest, GenerateResponse};

/// View-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Topic input visible
    #[default]
    Input,
    /// `/analyze` in flight, input hidden
    Analyzing,
    /// Keyword and title cards visible, generate trigger enabled
    Results,
    /// `/generate` in flight, results visible, trigger disabled
    Generating,
    /// Generated script visible
    Complete,
}

impl Phase {
    /// A request is outstanding
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Analyzing | Self::Generating)
    }
}

/// Resolved selection for the summary pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub keyword_count: usize,
    /// Selected keyword texts, ascending by index
    pub keywords: Vec<String>,
    pub title: Option<String>,
}

/// Selection controller
#[derive(Debug, Default)]
pub struct SelectionController {
    phase: Phase,
    topic: Option<String>,
    result: Option<AnalysisResult>,
    catalog: Catalog,
    selection: SelectionState,
    completion: Option<GenerateResponse>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Topic of the current (or pending) analysis
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn completion(&self) -> Option<&GenerateResponse> {
        self.completion.as_ref()
    }

    /// The generate trigger accepts input
    pub fn can_generate(&self) -> bool {
        self.phase == Phase::Results
    }

    fn expect_phase(&self, expected: &[Phase], action: &'static str) -> SelectorResult<()> {
        if expected.contains(&self.phase) {
            Ok(())
        } else {
            log::debug!("Refusing to {action} while {:?}", self.phase);
            Err(SelectorError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }

    // ===== analyze =====

    /// Validate the topic and enter `Analyzing`
    ///
    /// # Returns
    /// * `Ok(AnalyzeRequest)` - body to send to `/analyze`
    /// * `Err(Validation(EmptyTopic))` - topic is empty after trimming; phase unchanged
    pub fn begin_analyze(&mut self, topic: &str) -> SelectorResult<AnalyzeRequest> {
        self.expect_phase(&[Phase::Input], "analyze")?;

        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic.into());
        }

        log::info!("Analyzing topic '{topic}'");
        self.phase = Phase::Analyzing;
        self.topic = Some(topic.to_string());
        Ok(AnalyzeRequest {
            topic: topic.to_string(),
        })
    }

    /// Consume the `/analyze` outcome
    ///
    /// Success loads the result and clears any previous selection; failure
    /// returns to `Input` and hands the error back for display.
    pub fn finish_analyze(
        &mut self,
        outcome: Result<AnalysisResult, RequestError>,
    ) -> SelectorResult<()> {
        self.expect_phase(&[Phase::Analyzing], "finish analyze")?;

        match outcome {
            Ok(result) => {
                self.load(result);
                Ok(())
            }
            Err(e) => {
                log::error!("Analysis failed: {e}");
                self.phase = Phase::Input;
                self.topic = None;
                Err(e.into())
            }
        }
    }

    /// Replace the loaded result and rebuild the catalog
    fn load(&mut self, result: AnalysisResult) {
        self.catalog = Catalog::build(&result);
        self.selection.clear();
        self.completion = None;
        log::info!(
            "Loaded analysis for '{}': {} keywords, {} titles",
            result.main_keyword,
            self.catalog.keyword_count(),
            self.catalog.title_count()
        );
        self.result = Some(result);
        self.phase = Phase::Results;
    }

    // ===== selection =====

    /// Flip keyword `index`. Returns whether it is selected afterwards.
    pub fn toggle_keyword(&mut self, index: usize) -> SelectorResult<bool> {
        self.expect_phase(&[Phase::Results], "toggle keyword")?;

        let len = self.catalog.keyword_count();
        if index >= len {
            return Err(ValidationError::KeywordIndexOutOfRange { index, len }.into());
        }

        let selected = self.selection.toggle_keyword(index);
        log::debug!("Keyword {index} selected={selected}");
        Ok(selected)
    }

    /// Make `index` the only selected title
    pub fn select_title(&mut self, index: usize) -> SelectorResult<()> {
        self.expect_phase(&[Phase::Results], "select title")?;

        let len = self.catalog.title_count();
        if index >= len {
            return Err(ValidationError::TitleIndexOutOfRange { index, len }.into());
        }

        self.selection.select_title(index);
        log::debug!("Title {index} selected");
        Ok(())
    }

    /// Summary of the current selection, `None` when nothing is selected
    pub fn summary(&self) -> Option<SelectionSummary> {
        if self.selection.is_empty() {
            return None;
        }

        let keywords = self
            .selection
            .keywords()
            .filter_map(|i| self.catalog.keyword_text(i))
            .map(str::to_string)
            .collect();
        let title = self
            .selection
            .title()
            .and_then(|i| self.catalog.title_text(i))
            .map(str::to_string);

        Some(SelectionSummary {
            keyword_count: self.selection.keyword_count(),
            keywords,
            title,
        })
    }

    // ===== generate =====

    /// Validate the selection and enter `Generating`
    ///
    /// # Returns
    /// * `Ok(GenerateRequest)` - body to send to `/generate`
    /// * `Err(Validation(NoKeywordSelected))` - keyword set empty
    /// * `Err(Validation(NoTitleSelected))` - no title chosen
    pub fn begin_generate(&mut self) -> SelectorResult<GenerateRequest> {
        self.expect_phase(&[Phase::Results], "generate")?;

        if self.selection.keyword_count() == 0 {
            return Err(ValidationError::NoKeywordSelected.into());
        }
        let Some(title) = self.selection.title() else {
            return Err(ValidationError::NoTitleSelected.into());
        };

        let request = GenerateRequest {
            keywords: self.selection.keywords().collect(),
            title,
        };
        log::info!(
            "Requesting script for keywords {:?}, title {}",
            request.keywords,
            request.title
        );
        self.phase = Phase::Generating;
        Ok(request)
    }

    /// Consume the `/generate` outcome
    ///
    /// Success moves to `Complete`; failure returns to `Results` with the
    /// selection intact and the trigger enabled again.
    pub fn finish_generate(
        &mut self,
        outcome: Result<GenerateResponse, RequestError>,
    ) -> SelectorResult<()> {
        self.expect_phase(&[Phase::Generating], "finish generate")?;

        match outcome {
            Ok(response) => {
                log::info!("Script saved to {}", response.script_path);
                self.completion = Some(response);
                self.phase = Phase::Complete;
                Ok(())
            }
            Err(e) => {
                log::error!("Script generation failed: {e}");
                self.phase = Phase::Results;
                Err(e.into())
            }
        }
    }

    // ===== reset =====

    /// Back to `Input` with no result, no selection and no script
    pub fn reset(&mut self) -> SelectorResult<()> {
        self.expect_phase(&[Phase::Input, Phase::Results, Phase::Complete], "reset")?;

        self.phase = Phase::Input;
        self.topic = None;
        self.result = None;
        self.catalog = Catalog::default();
        self.selection.clear();
        self.completion = None;
        log::debug!("Controller reset");
        Ok(())
    }

    // ===== one-shot forms =====

    /// `begin_analyze`, call the backend, `finish_analyze`
    pub async fn analyze_with(
        &mut self,
        backend: &dyn ScriptBackend,
        topic: &str,
    ) -> SelectorResult<()> {
        let request = self.begin_analyze(topic)?;
        let outcome = backend.analyze(&request).await;
        self.finish_analyze(outcome)
    }

    /// `begin_generate`, call the backend, `finish_generate`
    pub async fn generate_with(&mut self, backend: &dyn ScriptBackend) -> SelectorResult<()> {
        let request = self.begin_generate()?;
        let outcome = backend.generate(&request).await;
        self.finish_generate(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_analysis, sample_generate_response};

    fn loaded() -> SelectionController {
        let mut controller = SelectionController::new();
        controller.begin_analyze("에어프라이어").unwrap();
        controller.finish_analyze(Ok(sample_analysis())).unwrap();
        controller
    }

    #[test]
    fn whitespace_topic_rejected() {
        let mut controller = SelectionController::new();
        let err = controller.begin_analyze("   \t").unwrap_err();
        assert_eq!(err, SelectorError::Validation(ValidationError::EmptyTopic));
        assert_eq!(controller.phase(), Phase::Input);
    }

    #[test]
    fn topic_is_trimmed() {
        let mut controller = SelectionController::new();
        let req = controller.begin_analyze("  에어프라이어 ").unwrap();
        assert_eq!(req.topic, "에어프라이어");
        assert_eq!(controller.phase(), Phase::Analyzing);
        assert!(controller.phase().is_loading());
    }

    #[test]
    fn analyze_failure_returns_to_input() {
        let mut controller = SelectionController::new();
        controller.begin_analyze("topic").unwrap();
        let err = controller
            .finish_analyze(Err(RequestError::Status {
                endpoint: "/analyze".to_string(),
                status: 500,
                body: String::new(),
            }))
            .unwrap_err();
        assert!(matches!(err, SelectorError::Request(_)));
        assert_eq!(controller.phase(), Phase::Input);
        assert!(controller.result().is_none());
    }

    #[test]
    fn cannot_analyze_twice() {
        let mut controller = SelectionController::new();
        controller.begin_analyze("a").unwrap();
        let err = controller.begin_analyze("b").unwrap_err();
        assert!(matches!(err, SelectorError::InvalidTransition { .. }));
        assert_eq!(controller.topic(), Some("a"));
    }

    #[test]
    fn summary_hidden_when_empty() {
        let controller = loaded();
        assert!(controller.summary().is_none());
    }

    #[test]
    fn summary_resolves_texts() {
        let mut controller = loaded();
        controller.toggle_keyword(1).unwrap();
        controller.select_title(0).unwrap();

        let summary = controller.summary().unwrap();
        assert_eq!(summary.keyword_count, 1);
        assert_eq!(summary.keywords, vec!["에어프라이어 청소법".to_string()]);
        assert_eq!(summary.title.as_deref(), Some("이것만 알면 끝"));
    }

    #[test]
    fn summary_with_title_only() {
        let mut controller = loaded();
        controller.select_title(0).unwrap();
        let summary = controller.summary().unwrap();
        assert_eq!(summary.keyword_count, 0);
        assert!(summary.keywords.is_empty());
    }

    #[test]
    fn out_of_range_indices_rejected() {
        let mut controller = loaded();
        assert_eq!(
            controller.toggle_keyword(2).unwrap_err(),
            SelectorError::Validation(ValidationError::KeywordIndexOutOfRange { index: 2, len: 2 })
        );
        assert!(controller.select_title(1).is_err());
        assert!(controller.selection().is_empty());
    }

    #[test]
    fn generate_requires_keyword_then_title() {
        let mut controller = loaded();
        controller.select_title(0).unwrap();
        assert_eq!(
            controller.begin_generate().unwrap_err(),
            SelectorError::Validation(ValidationError::NoKeywordSelected)
        );

        let mut controller = loaded();
        controller.toggle_keyword(0).unwrap();
        assert_eq!(
            controller.begin_generate().unwrap_err(),
            SelectorError::Validation(ValidationError::NoTitleSelected)
        );
        assert_eq!(controller.phase(), Phase::Results);
    }

    #[test]
    fn selection_locked_while_generating() {
        let mut controller = loaded();
        controller.toggle_keyword(0).unwrap();
        controller.select_title(0).unwrap();
        controller.begin_generate().unwrap();

        assert!(!controller.can_generate());
        assert!(controller.toggle_keyword(1).is_err());
        assert!(controller.reset().is_err());
    }

    #[test]
    fn generate_failure_keeps_selection() {
        let mut controller = loaded();
        controller.toggle_keyword(0).unwrap();
        controller.select_title(0).unwrap();
        controller.begin_generate().unwrap();
        controller
            .finish_generate(Err(RequestError::Network {
                endpoint: "/generate".to_string(),
                detail: "refused".to_string(),
            }))
            .unwrap_err();

        assert_eq!(controller.phase(), Phase::Results);
        assert!(controller.can_generate());
        assert!(controller.selection().is_keyword_selected(0));
    }

    #[test]
    fn generate_success_completes() {
        let mut controller = loaded();
        controller.toggle_keyword(1).unwrap();
        controller.select_title(0).unwrap();
        let req = controller.begin_generate().unwrap();
        assert_eq!(req, GenerateRequest { keywords: vec![1], title: 0 });

        controller
            .finish_generate(Ok(sample_generate_response()))
            .unwrap();
        assert_eq!(controller.phase(), Phase::Complete);
        assert!(controller.completion().is_some());
    }

    #[test]
    fn stale_response_discarded() {
        let mut controller = loaded();
        let err = controller
            .finish_generate(Ok(sample_generate_response()))
            .unwrap_err();
        assert!(matches!(err, SelectorError::InvalidTransition { .. }));
        assert_eq!(controller.phase(), Phase::Results);
        assert!(controller.completion().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut controller = loaded();
        controller.toggle_keyword(0).unwrap();
        controller.select_title(0).unwrap();
        controller.reset().unwrap();

        assert_eq!(controller.phase(), Phase::Input);
        assert!(controller.result().is_none());
        assert!(controller.topic().is_none());
        assert!(controller.selection().is_empty());
        assert_eq!(controller.catalog().keyword_count(), 0);
    }
}
