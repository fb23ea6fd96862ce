//!
//! src/update/mod.rs
//! Update 层：消费消息、修改状态
//!
//! 业务状态转换全部委托给 keyword-selector-core 的 SelectionController，
//! 这里只负责：
//!     1. 把消息翻译成 controller 调用
//!     2. 维护纯界面状态（输入框、光标、滚动、弹窗、状态栏）
//!     3. 把需要副作用的操作以 BackendCommand 返回给主循环
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendCommand>
//!                                                      ↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑
//!                                                      Update 层自身不做 I/O
//!
//!
//!     错误处理：
//!         · 校验错误（空主题、未选关键词、未选标题）→ 错误弹窗
//!         · 请求错误（网络、HTTP 状态、响应格式）    → 错误弹窗
//!         · 阶段不符（例如加载中重复提交）           → 仅记录日志
//!

mod backend;
mod complete;
mod input;
mod results;

use keyword_selector_core::{RequestError, SelectorError, ValidationError};

use crate::backend::BackendCommand;
use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
///
/// 返回值为需要主循环执行的副作用（请求、写配置）。
pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendCommand> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::CloseModal => {
            app.modal.close();
            None
        }

        AppMessage::Input(input_msg) => input::update(app, input_msg),

        AppMessage::Results(results_msg) => results::update(app, results_msg),

        AppMessage::Complete(complete_msg) => {
            complete::update(app, complete_msg);
            None
        }

        AppMessage::Reset => {
            reset(app);
            None
        }

        AppMessage::Backend(response) => {
            backend::update(app, response);
            None
        }

        AppMessage::ToggleLanguage => {
            let language = current_language().next();
            set_language(language);
            app.config.language = language.code().to_string();
            app.set_status(t().status.language_changed);
            Some(BackendCommand::SaveConfig(app.config.clone()))
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.next();
            set_theme(app.config.theme);
            app.set_status(t().status.theme_changed);
            Some(BackendCommand::SaveConfig(app.config.clone()))
        }

        AppMessage::Noop => None,
    }
}

/// 回到输入页
fn reset(app: &mut App) {
    match app.controller.reset() {
        Ok(()) => {
            app.input.clear();
            app.results.reset();
            app.complete.reset();
            app.clear_status();
        }
        Err(e) => report(app, &e),
    }
}

/// 记录错误；面向用户的错误同时弹窗
fn report(app: &mut App, err: &SelectorError) {
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }

    if !err.is_user_facing() {
        return;
    }

    let (title, message) = describe(err);
    app.modal.show_error(title, &message);
}

/// 错误弹窗的标题与正文
fn describe(err: &SelectorError) -> (&'static str, String) {
    let texts = t();

    match err {
        SelectorError::Validation(e) => {
            let message = match e {
                ValidationError::EmptyTopic => texts.errors.empty_topic,
                ValidationError::NoKeywordSelected => texts.errors.no_keyword,
                ValidationError::NoTitleSelected => texts.errors.no_title,
                ValidationError::KeywordIndexOutOfRange { .. } => texts.errors.invalid_keyword,
                ValidationError::TitleIndexOutOfRange { .. } => texts.errors.invalid_title,
            };
            (texts.modal.validation_title, message.to_string())
        }
        SelectorError::Request(e) => {
            let title = if e.endpoint() == keyword_selector_core::http_client::ANALYZE_ENDPOINT {
                texts.errors.analyze_failed
            } else {
                texts.errors.generate_failed
            };
            (
                title,
                format!("{}: {}", texts.errors.request_failed, request_detail(e)),
            )
        }
        SelectorError::InvalidTransition { .. } => (texts.common.error, err.to_string()),
    }
}

/// 请求错误的可读原因
///
/// 服务器出错时返回 `{"error": "..."}`，有则优先展示。
fn request_detail(err: &RequestError) -> String {
    match err {
        RequestError::Status { status, body, .. } => {
            let server_message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string));
            match server_message {
                Some(message) => format!("{message} (HTTP {status})"),
                None => format!("HTTP {status}"),
            }
        }
        RequestError::Network { detail, .. }
        | RequestError::Parse { detail, .. }
        | RequestError::Serialization { detail, .. } => detail.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use keyword_selector_core::types::{
        AnalysisResult, AnalyzeRequest, ContentStrategy, GenerateRequest, GenerateResponse,
        HighRevenueKeyword, RecommendedTitle, ScriptData,
    };
    use keyword_selector_core::Phase;

    use super::*;
    use crate::backend::{BackendResponse, ScriptRequest};
    use crate::message::{InputMessage, ResultsMessage};
    use crate::model::Modal;

    fn air_fryer() -> AnalysisResult {
        AnalysisResult {
            main_keyword: "에어프라이어".to_string(),
            core_needs: vec!["기름 없이 바삭하게".to_string()],
            high_revenue_keywords: vec![HighRevenueKeyword {
                keyword: "에어프라이어 추천".to_string(),
                kind: "구매형".to_string(),
                competition: "high".to_string(),
                cpc_potential: "high".to_string(),
            }],
            longtail_keywords: vec!["에어프라이어 청소법".to_string()],
            search_queries: vec![],
            recommended_titles: vec![RecommendedTitle {
                title: "이것만 알면 끝".to_string(),
                hook: "궁금증".to_string(),
                ctr_score: 88.0,
            }],
            content_strategy: ContentStrategy::default(),
        }
    }

    fn script() -> GenerateResponse {
        GenerateResponse {
            success: true,
            script_path: "output/scripts/air_fryer.json".to_string(),
            script_data: ScriptData {
                title: "이것만 알면 끝".to_string(),
                script_text: "에어프라이어 청소, 이렇게 하세요".to_string(),
                duration: 42.0,
                hashtags: vec!["#에어프라이어".to_string()],
                voice_id: None,
                category: None,
                description: None,
                thumbnail_text: None,
            },
        }
    }

    fn server_error(endpoint: &str) -> RequestError {
        RequestError::Status {
            endpoint: endpoint.to_string(),
            status: 500,
            body: r#"{"error":"Gemini quota exceeded"}"#.to_string(),
        }
    }

    fn type_topic(app: &mut App, topic: &str) {
        for c in topic.chars() {
            update(app, AppMessage::Input(InputMessage::Char(c)));
        }
    }

    /// 输入主题并载入分析结果
    fn app_with_results() -> App {
        let mut app = App::default();
        type_topic(&mut app, "에어프라이어");
        update(&mut app, AppMessage::Input(InputMessage::Submit)).unwrap();
        update(&mut app, AppMessage::Backend(BackendResponse::Analyzed(Ok(air_fryer()))));
        app
    }

    #[test]
    fn submit_topic_starts_analysis() {
        let mut app = App::default();
        type_topic(&mut app, "에어프라이어");

        let cmd = update(&mut app, AppMessage::Input(InputMessage::Submit));

        assert_eq!(
            cmd,
            Some(BackendCommand::Script(ScriptRequest::Analyze(AnalyzeRequest {
                topic: "에어프라이어".to_string()
            })))
        );
        assert_eq!(app.phase(), Phase::Analyzing);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn empty_topic_opens_error_modal() {
        let mut app = App::default();
        type_topic(&mut app, "   ");

        let cmd = update(&mut app, AppMessage::Input(InputMessage::Submit));

        assert_eq!(cmd, None);
        assert_eq!(app.phase(), Phase::Input);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn analyzed_response_shows_results() {
        let app = app_with_results();

        assert_eq!(app.phase(), Phase::Results);
        assert_eq!(app.controller.catalog().keyword_count(), 2);
        assert_eq!(app.controller.catalog().title_count(), 1);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn analyze_failure_returns_to_input_with_modal() {
        let mut app = App::default();
        type_topic(&mut app, "에어프라이어");
        update(&mut app, AppMessage::Input(InputMessage::Submit));

        update(
            &mut app,
            AppMessage::Backend(BackendResponse::Analyzed(Err(server_error("/analyze")))),
        );

        assert_eq!(app.phase(), Phase::Input);
        let Some(Modal::Error { message, .. }) = &app.modal.active else {
            panic!("expected error modal");
        };
        assert!(message.contains("Gemini quota exceeded"));
        // 主题保留，方便修改后重试
        assert_eq!(app.input.value(), "에어프라이어");
    }

    #[test]
    fn select_and_generate_sends_indices() {
        let mut app = app_with_results();

        // 关键词列表：移到第 1 项（长尾）并选中
        update(&mut app, AppMessage::Results(ResultsMessage::SelectNext));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));
        // 标题列表：选中第 0 项
        update(&mut app, AppMessage::Results(ResultsMessage::SwitchPane));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));

        let cmd = update(&mut app, AppMessage::Results(ResultsMessage::Generate));

        assert_eq!(
            cmd,
            Some(BackendCommand::Script(ScriptRequest::Generate(GenerateRequest {
                keywords: vec![1],
                title: 0,
            })))
        );
        assert_eq!(app.phase(), Phase::Generating);

        update(&mut app, AppMessage::Backend(BackendResponse::Generated(Ok(script()))));
        assert_eq!(app.phase(), Phase::Complete);
        assert_eq!(
            app.controller.completion().unwrap().script_path,
            "output/scripts/air_fryer.json"
        );
    }

    #[test]
    fn generate_without_keyword_is_rejected() {
        let mut app = app_with_results();
        update(&mut app, AppMessage::Results(ResultsMessage::SwitchPane));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));

        let cmd = update(&mut app, AppMessage::Results(ResultsMessage::Generate));

        assert_eq!(cmd, None);
        assert_eq!(app.phase(), Phase::Results);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn generate_failure_keeps_selection() {
        let mut app = app_with_results();
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));
        update(&mut app, AppMessage::Results(ResultsMessage::SwitchPane));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));
        update(&mut app, AppMessage::Results(ResultsMessage::Generate)).unwrap();

        update(
            &mut app,
            AppMessage::Backend(BackendResponse::Generated(Err(server_error("/generate")))),
        );

        assert_eq!(app.phase(), Phase::Results);
        assert!(app.controller.selection().is_keyword_selected(0));
        assert_eq!(app.controller.selection().title(), Some(0));
        assert!(app.modal.is_open());
    }

    #[test]
    fn toggling_during_generation_is_ignored() {
        let mut app = app_with_results();
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));
        update(&mut app, AppMessage::Results(ResultsMessage::SwitchPane));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));
        update(&mut app, AppMessage::Results(ResultsMessage::Generate)).unwrap();

        update(&mut app, AppMessage::Results(ResultsMessage::SwitchPane));
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));

        assert!(app.controller.selection().is_keyword_selected(0));
        assert!(!app.modal.is_open());
        assert_eq!(app.phase(), Phase::Generating);
    }

    #[test]
    fn reset_clears_everything() {
        let mut app = app_with_results();
        update(&mut app, AppMessage::Results(ResultsMessage::Toggle));

        update(&mut app, AppMessage::Reset);

        assert_eq!(app.phase(), Phase::Input);
        assert!(app.controller.result().is_none());
        assert!(app.controller.selection().is_empty());
        assert!(app.input.is_empty());
    }

    #[test]
    fn toggle_theme_persists_config() {
        let mut app = App::default();
        let before = app.config.theme;

        let cmd = update(&mut app, AppMessage::ToggleTheme);

        assert_ne!(app.config.theme, before);
        assert_eq!(cmd, Some(BackendCommand::SaveConfig(app.config.clone())));
    }

    #[test]
    fn toggle_language_persists_config() {
        let mut app = App::default();

        let cmd = update(&mut app, AppMessage::ToggleLanguage);

        assert_eq!(cmd, Some(BackendCommand::SaveConfig(app.config.clone())));
    }

    #[test]
    fn status_error_prefers_server_message() {
        assert_eq!(
            request_detail(&server_error("/generate")),
            "Gemini quota exceeded (HTTP 500)"
        );
        let plain = RequestError::Status {
            endpoint: "/generate".to_string(),
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(request_detail(&plain), "HTTP 502");
    }
}
