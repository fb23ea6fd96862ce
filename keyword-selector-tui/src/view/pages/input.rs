//! 主题输入页

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染主题输入页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // 提问
            Constraint::Length(2), // 说明
            Constraint::Length(3), // 输入框
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new(Line::styled(
        texts.input.prompt,
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(prompt, chunks[0]);

    let description = Paragraph::new(texts.input.description)
        .style(Styles::muted())
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[1]);

    render_input_box(app, frame, chunks[2]);
}

/// 渲染输入框并放置光标
fn render_input_box(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);

    let content = if app.input.is_empty() {
        Line::styled(texts.input.placeholder, Styles::muted())
    } else {
        Line::styled(app.input.value(), Style::default().fg(c.fg))
    };

    // 内容超出宽度时向左滚动，保证光标可见
    let column = app.input.cursor_column();
    let scroll = column.saturating_sub(inner.width.saturating_sub(1));

    let paragraph = Paragraph::new(content).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, area);

    if !app.modal.is_open() {
        frame.set_cursor_position(Position::new(inner.x + column - scroll, inner.y));
    }
}
