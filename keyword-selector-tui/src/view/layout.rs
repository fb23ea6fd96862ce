//! 主布局

use keyword_selector_core::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 背景色跟随主题
    frame.render_widget(
        Block::default().style(Style::default().bg(colors().bg)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let title = Paragraph::new(format!(
        " {} · {}: {}",
        texts.common.app_name, texts.input.server, app.config.server_url
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前阶段渲染页面
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let page_title = match app.phase() {
        Phase::Input | Phase::Analyzing => texts.input.title,
        Phase::Results | Phase::Generating => texts.results.title,
        Phase::Complete => texts.complete.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.phase() {
        Phase::Input => pages::input::render(app, frame, inner_area),
        Phase::Analyzing => pages::loading::render(app, frame, inner_area),
        Phase::Results | Phase::Generating => pages::results::render(app, frame, inner_area),
        Phase::Complete => pages::complete::render(app, frame, inner_area),
    }
}
