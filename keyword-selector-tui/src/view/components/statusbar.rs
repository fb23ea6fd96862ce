//! 底部状态栏组件

use keyword_selector_core::Phase;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前阶段生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = Vec::new();

    match app.phase() {
        Phase::Input => {
            hints.push((keys.enter, actions.analyze));
        }
        Phase::Analyzing => {}
        Phase::Results => {
            hints.push((keys.tab, actions.switch_pane));
            hints.push((keys.arrows_ud, actions.move_up_down));
            hints.push((keys.space, actions.select));
            hints.push(("g", actions.generate));
            hints.push((keys.esc, texts.common.restart));
        }
        Phase::Generating => {
            hints.push((keys.tab, actions.switch_pane));
            hints.push((keys.arrows_ud, actions.move_up_down));
        }
        Phase::Complete => {
            hints.push((keys.arrows_ud, actions.scroll));
            hints.push((keys.esc, texts.common.restart));
        }
    }

    hints.push(("Alt+L", actions.language));
    hints.push(("Alt+T", actions.theme));
    hints.push(("Alt+H", texts.common.help));
    hints.push(("Ctrl+C", texts.common.quit));

    hints
}
