//! 分析结果页消息

/// 分析结果页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsMessage {
    /// 在关键词 / 标题列表之间切换
    SwitchPane,
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 关键词：切换选中；标题：设为唯一选中
    Toggle,
    /// 生成脚本
    Generate,
}
