//! 分析结果页消息处理

use crate::backend::{BackendCommand, ScriptRequest};
use crate::i18n::t;
use crate::message::ResultsMessage;
use crate::model::{App, ResultsPane};

use super::report;

pub fn update(app: &mut App, msg: ResultsMessage) -> Option<BackendCommand> {
    let len = focused_len(app);

    match msg {
        ResultsMessage::SwitchPane => app.results.switch_pane(),
        ResultsMessage::SelectPrevious => app.results.select_previous(),
        ResultsMessage::SelectNext => app.results.select_next(len),
        ResultsMessage::SelectFirst => app.results.select_first(),
        ResultsMessage::SelectLast => app.results.select_last(len),
        ResultsMessage::Toggle => toggle(app, len),
        ResultsMessage::Generate => return generate(app),
    }
    None
}

/// 当前焦点列表的长度
fn focused_len(app: &App) -> usize {
    let catalog = app.controller.catalog();
    match app.results.focus {
        ResultsPane::Keywords => catalog.keyword_count(),
        ResultsPane::Titles => catalog.title_count(),
    }
}

/// 关键词：切换选中；标题：设为唯一选中
fn toggle(app: &mut App, len: usize) {
    if len == 0 {
        return;
    }

    let cursor = app.results.cursor();
    let outcome = match app.results.focus {
        ResultsPane::Keywords => app.controller.toggle_keyword(cursor).map(|_| ()),
        ResultsPane::Titles => app.controller.select_title(cursor),
    };

    if let Err(e) = outcome {
        report(app, &e);
    }
}

fn generate(app: &mut App) -> Option<BackendCommand> {
    match app.controller.begin_generate() {
        Ok(request) => {
            app.set_status(t().loading.generating);
            Some(BackendCommand::Script(ScriptRequest::Generate(request)))
        }
        Err(e) => {
            report(app, &e);
            None
        }
    }
}
