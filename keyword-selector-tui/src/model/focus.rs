//! 焦点状态定义

/// 分析结果页中获得焦点的列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsPane {
    /// 关键词列表
    #[default]
    Keywords,
    /// 标题列表
    Titles,
}

impl ResultsPane {
    /// 切换到另一个列表
    pub fn toggle(self) -> Self {
        match self {
            ResultsPane::Keywords => ResultsPane::Titles,
            ResultsPane::Titles => ResultsPane::Keywords,
        }
    }

    pub fn is_keywords(self) -> bool {
        matches!(self, ResultsPane::Keywords)
    }

    pub fn is_titles(self) -> bool {
        matches!(self, ResultsPane::Titles)
    }
}
