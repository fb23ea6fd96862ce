//! 分析结果页
//!
//! ┌ 核心关键词 / 核心需求 / 实际搜索问题 ─────────────────────┐
//! ├ 关键词列表 ─────────────────┬ 标题列表 ──────────────────┤
//! │ [x] 关键词  类型 · 竞争 · CPC │ (●) 标题  CTR 88/100       │
//! │ [ ] ...                      │     钩子                    │
//! ├ 内容策略 ───────────────────┼ 选择摘要 ──────────────────┤
//! └ 生成按钮 ──────────────────────────────────────────────────┘

use keyword_selector_core::{
    KeywordEntry, KeywordSource, Phase, SelectionController, SelectionState, TitleEntry,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染分析结果页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let controller = &app.controller;
    let Some(result) = controller.result() else {
        return;
    };

    let header = header_lines(controller);
    let header_height = u16::try_from(header.len()).unwrap_or(u16::MAX);
    let show_bottom = !result.content_strategy.is_empty() || !controller.selection().is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(6),
            Constraint::Length(if show_bottom { 7 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_keywords(app, frame, lists[0]);
    render_titles(app, frame, lists[1]);

    if show_bottom {
        render_bottom(controller, frame, chunks[2]);
    }

    render_trigger(controller, frame, chunks[3]);
}

/// 顶部：核心关键词、核心需求、实际搜索问题
fn header_lines(controller: &SelectionController) -> Vec<Line<'_>> {
    let texts = t();
    let c = colors();
    let Some(result) = controller.result() else {
        return Vec::new();
    };

    let label = |text: &'static str| Span::styled(format!("{text}: "), Styles::muted());

    let mut lines = vec![Line::from(vec![
        label(texts.results.main_keyword),
        Span::styled(
            result.main_keyword.as_str(),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ])];

    if !result.core_needs.is_empty() {
        lines.push(Line::from(vec![
            label(texts.results.core_needs),
            Span::raw(result.core_needs.join(" · ")),
        ]));
    }
    if !result.search_queries.is_empty() {
        lines.push(Line::from(vec![
            label(texts.results.search_queries),
            Span::raw(result.search_queries.join(" · ")),
        ]));
    }

    lines
}

/// 带焦点边框的列表块
fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

/// 关键词列表
fn render_keywords(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.results.focus.is_keywords();
    let catalog = app.controller.catalog();
    let block = pane_block(texts.results.keywords, focused);

    if catalog.keywords().is_empty() {
        let empty = Paragraph::new(texts.results.no_keywords)
            .style(Styles::muted())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selection = app.controller.selection();
    let items: Vec<ListItem> = catalog
        .keywords()
        .iter()
        .map(|entry| keyword_item(entry, selection))
        .collect();

    render_list(frame, area, block, items, focused.then_some(app.results.keyword_cursor));
}

fn keyword_item<'a>(entry: &'a KeywordEntry, selection: &SelectionState) -> ListItem<'a> {
    let texts = t();
    let c = colors();
    let selected = selection.is_keyword_selected(entry.index);

    let (kind, competition, cpc) = match &entry.source {
        KeywordSource::HighRevenue {
            kind,
            competition,
            cpc_potential,
        } => (kind.as_str(), competition.as_str(), cpc_potential.as_str()),
        KeywordSource::Longtail => (
            texts.results.longtail_kind,
            texts.results.longtail_competition,
            texts.results.longtail_cpc,
        ),
    };

    let marker = if selected { "[x] " } else { "[ ] " };
    let text_style = if selected {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let title = Line::from(vec![
        Span::styled(marker, text_style),
        Span::styled(entry.text.as_str(), text_style),
    ]);
    let badges = Line::styled(
        format!(
            "    {kind} · {} {competition} · {} {cpc}",
            texts.results.competition, texts.results.cpc
        ),
        Styles::muted(),
    );

    ListItem::new(Text::from(vec![title, badges]))
}

/// 标题列表
fn render_titles(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.results.focus.is_titles();
    let catalog = app.controller.catalog();
    let block = pane_block(texts.results.titles, focused);

    if catalog.titles().is_empty() {
        let empty = Paragraph::new(texts.results.no_titles)
            .style(Styles::muted())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selection = app.controller.selection();
    let items: Vec<ListItem> = catalog
        .titles()
        .iter()
        .map(|entry| title_item(entry, selection))
        .collect();

    render_list(frame, area, block, items, focused.then_some(app.results.title_cursor));
}

fn title_item<'a>(entry: &'a TitleEntry, selection: &SelectionState) -> ListItem<'a> {
    let texts = t();
    let c = colors();
    let selected = selection.is_title_selected(entry.index);

    let marker = if selected { "(●) " } else { "( ) " };
    let text_style = if selected {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let title = Line::from(vec![
        Span::styled(marker, text_style),
        Span::styled(entry.title.as_str(), text_style),
        Span::styled(
            format!("  CTR {:.0}/100", entry.ctr_score),
            Style::default().fg(c.warning),
        ),
    ]);
    let hook = Line::styled(
        format!("    {}: {}", texts.results.hook, entry.hook),
        Styles::muted(),
    );

    ListItem::new(Text::from(vec![title, hook]))
}

/// 渲染列表；`cursor` 为 `None` 时不高亮（列表未获得焦点）
fn render_list(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    items: Vec<ListItem<'_>>,
    cursor: Option<usize>,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::cursor());

    let mut state = ListState::default();
    state.select(cursor);

    frame.render_stateful_widget(list, area, &mut state);
}

/// 底部：内容策略 + 选择摘要（无选择时隐藏摘要）
fn render_bottom(controller: &SelectionController, frame: &mut Frame, area: Rect) {
    let summary = controller.summary();
    let has_strategy = controller
        .result()
        .is_some_and(|r| !r.content_strategy.is_empty());

    let constraints = match (has_strategy, summary.is_some()) {
        (true, true) => [Constraint::Percentage(60), Constraint::Percentage(40)],
        (true, false) => [Constraint::Percentage(100), Constraint::Length(0)],
        (false, _) => [Constraint::Length(0), Constraint::Percentage(100)],
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if has_strategy {
        render_strategy(controller, frame, columns[0]);
    }
    if let Some(summary) = summary {
        render_summary(&summary, frame, columns[1]);
    }
}

fn render_strategy(controller: &SelectionController, frame: &mut Frame, area: Rect) {
    let texts = t();
    let Some(result) = controller.result() else {
        return;
    };
    let strategy = &result.content_strategy;

    let label = |text: &'static str| Span::styled(format!("{text}: "), Styles::muted());
    let lines = vec![
        Line::from(vec![label(texts.results.intro), Span::raw(strategy.intro.as_str())]),
        Line::from(vec![label(texts.results.body), Span::raw(strategy.body.as_str())]),
        Line::from(vec![
            label(texts.results.conclusion),
            Span::raw(strategy.conclusion.as_str()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(pane_block(texts.results.strategy, false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_summary(
    summary: &keyword_selector_core::SelectionSummary,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = t();
    let c = colors();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(
                    "{} ({}{}): ",
                    texts.results.selected_keywords,
                    summary.keyword_count,
                    texts.results.keyword_count_suffix
                ),
                Styles::muted(),
            ),
            Span::styled(summary.keywords.join(", "), Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.results.selected_title), Styles::muted()),
            Span::styled(
                summary.title.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(c.fg),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(pane_block(texts.results.summary, false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 生成按钮：生成中显示进行状态且不可用
fn render_trigger(controller: &SelectionController, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let (label, style) = if controller.phase() == Phase::Generating {
        (texts.results.generating_button, Styles::muted())
    } else if controller.can_generate() {
        (
            texts.results.generate_button,
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (texts.results.generate_button, Style::default().fg(c.muted))
    };

    let trigger = Paragraph::new(format!(" {label}  [g] "))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(trigger, area);
}
