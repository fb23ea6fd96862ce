//! 分析结果页状态

use crate::model::ResultsPane;

/// 分析结果页的光标
///
/// 列表内容来自 controller 的 catalog，这里只记录光标位置，
/// 所以移动方法需要传入列表长度。
#[derive(Debug, Default)]
pub struct ResultsState {
    /// 当前焦点列表
    pub focus: ResultsPane,
    /// 关键词列表光标
    pub keyword_cursor: usize,
    /// 标题列表光标
    pub title_cursor: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前焦点列表的光标
    pub fn cursor(&self) -> usize {
        match self.focus {
            ResultsPane::Keywords => self.keyword_cursor,
            ResultsPane::Titles => self.title_cursor,
        }
    }

    /// 切换焦点列表
    pub fn switch_pane(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        let cursor = self.cursor_mut();
        if len > 0 && *cursor < len - 1 {
            *cursor += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        *self.cursor_mut() = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        *self.cursor_mut() = len.saturating_sub(1);
    }

    /// 新结果载入或重置时回到初始位置
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            ResultsPane::Keywords => &mut self.keyword_cursor,
            ResultsPane::Titles => &mut self.title_cursor,
        }
    }
}
