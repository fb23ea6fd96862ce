//! 主题输入框消息

/// 主题输入框消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// 插入字符
    Char(char),
    /// 删除光标前一个字符
    Backspace,
    /// 删除光标处字符
    Delete,
    CursorLeft,
    CursorRight,
    /// 光标移到开头
    Home,
    /// 光标移到末尾
    End,
    /// 提交主题，开始分析
    Submit,
}
