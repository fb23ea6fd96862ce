//! 应用主消息枚举

use super::{CompleteMessage, InputMessage, ResultsMessage};
use crate::backend::BackendResponse;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 显示帮助
    ShowHelp,

    /// 关闭当前弹窗
    CloseModal,

    /// 主题输入框消息
    Input(InputMessage),

    /// 分析结果页消息
    Results(ResultsMessage),

    /// 完成页消息
    Complete(CompleteMessage),

    /// 回到输入页（清空结果与选择）
    Reset,

    /// 分析服务器返回
    Backend(BackendResponse),

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
