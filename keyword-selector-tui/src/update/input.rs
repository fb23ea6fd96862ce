//! 主题输入框消息处理

use crate::backend::{BackendCommand, ScriptRequest};
use crate::message::InputMessage;
use crate::model::App;

use super::report;

pub fn update(app: &mut App, msg: InputMessage) -> Option<BackendCommand> {
    match msg {
        InputMessage::Char(c) => app.input.insert(c),
        InputMessage::Backspace => app.input.backspace(),
        InputMessage::Delete => app.input.delete(),
        InputMessage::CursorLeft => app.input.move_left(),
        InputMessage::CursorRight => app.input.move_right(),
        InputMessage::Home => app.input.move_home(),
        InputMessage::End => app.input.move_end(),
        InputMessage::Submit => return submit(app),
    }
    None
}

/// 提交主题：校验通过后进入 Analyzing 并返回请求
fn submit(app: &mut App) -> Option<BackendCommand> {
    match app.controller.begin_analyze(app.input.value()) {
        Ok(request) => {
            app.clear_status();
            Some(BackendCommand::Script(ScriptRequest::Analyze(request)))
        }
        Err(e) => {
            report(app, &e);
            None
        }
    }
}
