//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use keyword_selector_core::Phase;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CompleteMessage, InputMessage, ResultsMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗打开时，输入只交给弹窗
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    // 输入页的可打印字符全部进入输入框，`q` / `?` 不作为快捷键
    if app.phase() == Phase::Input {
        return handle_input_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if is_question_mark(&key) {
        return AppMessage::ShowHelp;
    }

    match app.phase() {
        Phase::Results | Phase::Generating => handle_results_keys(key),
        Phase::Complete => handle_complete_keys(key),
        Phase::Input | Phase::Analyzing => AppMessage::Noop,
    }
}

/// `?`（多数终端会带上 SHIFT）
fn is_question_mark(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('?') && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    match modal {
        // 错误弹窗：Ctrl+C 仍然退出，其余任意键关闭
        Modal::Error { .. } => {
            if DefaultKeymap::FORCE_QUIT.matches(&key) {
                AppMessage::Quit
            } else {
                AppMessage::CloseModal
            }
        }
        Modal::Help => {
            if DefaultKeymap::BACK.matches(&key)
                || DefaultKeymap::CONFIRM.matches(&key)
                || is_question_mark(&key)
                || DefaultKeymap::HELP.matches(&key)
                || DefaultKeymap::FORCE_QUIT.matches(&key)
            {
                AppMessage::CloseModal
            } else {
                AppMessage::Noop
            }
        }
    }
}

/// 处理主题输入框的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Enter => InputMessage::Submit,
        KeyCode::Backspace => InputMessage::Backspace,
        KeyCode::Delete => InputMessage::Delete,
        KeyCode::Left => InputMessage::CursorLeft,
        KeyCode::Right => InputMessage::CursorRight,
        KeyCode::Home => InputMessage::Home,
        KeyCode::End => InputMessage::End,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            InputMessage::Char(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Input(msg)
}

/// 处理分析结果页的按键
fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Reset;
    }
    if DefaultKeymap::SWITCH_PANE.matches(&key) {
        return AppMessage::Results(ResultsMessage::SwitchPane);
    }
    if DefaultKeymap::GENERATE.matches(&key) {
        return AppMessage::Results(ResultsMessage::Generate);
    }
    if DefaultKeymap::TOGGLE.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Results(ResultsMessage::Toggle);
    }

    let msg = match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => ResultsMessage::SelectPrevious,
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => ResultsMessage::SelectNext,
        KeyCode::Home => ResultsMessage::SelectFirst,
        KeyCode::End => ResultsMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Results(msg)
}

/// 处理完成页的按键
fn handle_complete_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Reset;
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => CompleteMessage::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => CompleteMessage::ScrollDown,
        KeyCode::PageUp => CompleteMessage::PageUp,
        KeyCode::PageDown => CompleteMessage::PageDown,
        _ => return AppMessage::Noop,
    };
    AppMessage::Complete(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendResponse;
    use crate::update::update;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    #[test]
    fn q_is_typed_on_input_page() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Input(InputMessage::Char('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Input(InputMessage::Submit)
        ));
    }

    #[test]
    fn global_shortcuts() {
        let app = App::default();
        assert!(matches!(handle_event(alt('h'), &app), AppMessage::ShowHelp));
        assert!(matches!(handle_event(alt('l'), &app), AppMessage::ToggleLanguage));
        assert!(matches!(handle_event(alt('t'), &app), AppMessage::ToggleTheme));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn error_modal_closes_on_any_key() {
        let mut app = App::default();
        app.modal.show_error("t", "m");
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::CloseModal
        ));
    }

    #[test]
    fn ctrl_c_quits_from_error_modal() {
        let mut app = App::default();
        app.modal.show_error("t", "m");
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn help_modal_swallows_other_keys() {
        let mut app = App::default();
        app.modal.show_help();
        assert!(matches!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::CloseModal));
    }

    #[test]
    fn results_page_keys() {
        let mut app = App::default();
        app.input.insert('a');
        update(&mut app, AppMessage::Input(InputMessage::Submit));
        update(
            &mut app,
            AppMessage::Backend(BackendResponse::Analyzed(Ok(
                keyword_selector_core::types::AnalysisResult {
                    main_keyword: "a".to_string(),
                    core_needs: vec![],
                    high_revenue_keywords: vec![],
                    longtail_keywords: vec!["b".to_string()],
                    search_queries: vec![],
                    recommended_titles: vec![],
                    content_strategy: keyword_selector_core::types::ContentStrategy::default(),
                },
            ))),
        );
        assert_eq!(app.phase(), Phase::Results);

        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Results(ResultsMessage::Toggle)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('g')), &app),
            AppMessage::Results(ResultsMessage::Generate)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Results(ResultsMessage::SwitchPane)
        ));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::Reset));
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
    }

    #[test]
    fn complete_page_keys() {
        assert!(matches!(
            handle_complete_keys(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            AppMessage::Complete(CompleteMessage::ScrollDown)
        ));
        assert!(matches!(
            handle_complete_keys(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            AppMessage::Complete(CompleteMessage::ScrollUp)
        ));
        assert!(matches!(
            handle_complete_keys(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            AppMessage::Complete(CompleteMessage::PageDown)
        ));
        assert!(matches!(
            handle_complete_keys(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            AppMessage::Complete(CompleteMessage::PageUp)
        ));
        assert!(matches!(
            handle_complete_keys(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            AppMessage::Reset
        ));
    }
}
