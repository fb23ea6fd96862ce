//! 完成页消息处理

use crate::message::CompleteMessage;
use crate::model::App;
use crate::view::complete_line_count;

pub fn update(app: &mut App, msg: CompleteMessage) {
    let Some(response) = app.controller.completion() else {
        return;
    };
    let line_count = complete_line_count(response);

    match msg {
        CompleteMessage::ScrollUp => app.complete.scroll_up(),
        CompleteMessage::ScrollDown => app.complete.scroll_down(line_count),
        CompleteMessage::PageUp => app.complete.page_up(),
        CompleteMessage::PageDown => app.complete.page_down(line_count),
    }
}
