//! 完成页状态

/// 翻页步长
const PAGE_STEP: u16 = 10;

/// 完成页的滚动位置
///
/// 脚本正文和后续步骤可能超出终端高度，这里记录首行偏移。
/// 上限由调用方传入（内容行数），保证至少还能看到最后一行。
#[derive(Debug, Default)]
pub struct CompleteState {
    pub scroll: u16,
}

impl CompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 上滚一行
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// 下滚一行
    pub fn scroll_down(&mut self, line_count: usize) {
        self.scroll = self.scroll.saturating_add(1).min(max_offset(line_count));
    }

    /// 上翻一页
    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE_STEP);
    }

    /// 下翻一页
    pub fn page_down(&mut self, line_count: usize) {
        self.scroll = self
            .scroll
            .saturating_add(PAGE_STEP)
            .min(max_offset(line_count));
    }

    /// 回到顶部
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn max_offset(line_count: usize) -> u16 {
    u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX)
}
