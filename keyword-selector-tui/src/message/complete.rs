//! 完成页消息

/// 完成页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}
