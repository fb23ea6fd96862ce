//! 加载页（分析进行中）

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染加载页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines = vec![Line::styled(
        texts.loading.analyzing,
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    )];
    if let Some(topic) = app.controller.topic() {
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("\"{topic}\""), Styles::muted()));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
