//! 完成页：生成的脚本与后续步骤
//!
//! 内容可能超出终端高度，按 ↑/↓、PgUp/PgDn 滚动，右侧显示滚动条。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use keyword_selector_core::types::GenerateResponse;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染完成页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(response) = app.controller.completion() else {
        return;
    };

    let lines = build_lines(response);
    let line_count = lines.len();
    let scroll = app.complete.scroll;

    // 最右一列留给滚动条
    let text_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, text_area);

    if line_count > usize::from(area.height) {
        let mut state = ScrollbarState::new(line_count).position(usize::from(scroll));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(colors().muted)),
            area,
            &mut state,
        );
    }
}

/// 完成页的逻辑行数（未折行），滚动上限据此计算
pub fn line_count(response: &GenerateResponse) -> usize {
    build_lines(response).len()
}

/// 时长原样显示：整数不带小数点，小数保留
fn format_duration(seconds: f64) -> String {
    format!("{seconds}")
}

fn build_lines(response: &GenerateResponse) -> Vec<Line<'_>> {
    let texts = t();
    let c = colors();
    let script = &response.script_data;

    let label = |text: &'static str| Span::styled(format!("{text}: "), Styles::muted());
    let bold = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(
            texts.complete.heading,
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            label(texts.complete.saved_to),
            Span::raw(response.script_path.as_str()),
        ]),
        Line::from(vec![
            label(texts.complete.generated_title),
            Span::styled(script.title.as_str(), bold),
        ]),
        Line::from(vec![
            label(texts.complete.duration),
            Span::raw(format!(
                "{}{}",
                format_duration(script.duration),
                texts.complete.seconds
            )),
        ]),
    ];

    if !script.hashtags.is_empty() {
        lines.push(Line::from(vec![
            label(texts.complete.hashtags),
            Span::styled(script.hashtags.join(" "), Style::default().fg(c.highlight)),
        ]));
    }

    // 可选的制作信息
    if let Some(category) = &script.category {
        lines.push(Line::from(vec![
            label(texts.complete.category),
            Span::raw(category.as_str()),
        ]));
    }
    if let Some(voice) = &script.voice_id {
        lines.push(Line::from(vec![
            label(texts.complete.voice),
            Span::raw(voice.as_str()),
        ]));
    }
    if let Some(description) = &script.description {
        lines.push(Line::from(vec![
            label(texts.complete.description),
            Span::raw(description.as_str()),
        ]));
    }
    if let Some(thumbnail) = &script.thumbnail_text {
        let text = if thumbnail.sub.is_empty() {
            thumbnail.main.clone()
        } else {
            format!("{} / {}", thumbnail.main, thumbnail.sub)
        };
        lines.push(Line::from(vec![label(texts.complete.thumbnail), Span::raw(text)]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.complete.script, bold));
    lines.extend(
        script
            .script_text
            .lines()
            .map(|l| Line::styled(format!("  {l}"), Style::default().fg(c.fg))),
    );

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.complete.next_steps, bold));
    lines.extend(
        texts
            .complete
            .next_step_lines
            .iter()
            .map(|step| Line::styled(format!("  {step}"), Styles::muted())),
    );

    lines
}
