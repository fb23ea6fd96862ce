//!
//! src/message/mod.rs
//! Message 层：描述"发生了什么"
//!
//! Event 层把原始按键翻译成消息，Backend 桥接把请求结果包装成消息，
//! 两者都交给 Update 层统一处理。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage：顶层消息
//!         mod complete;   // CompleteMessage：完成页
//!         mod input;      // InputMessage：主题输入框
//!         mod results;    // ResultsMessage：分析结果页
//!
//!
//!     消息来源：
//!
//!         键盘 ──▶ event::handle_event ──▶ AppMessage::Input(..)
//!                                          AppMessage::Results(..)
//!                                          AppMessage::Complete(..)
//!                                          AppMessage::Quit / ShowHelp / ...
//!
//!         tokio 任务 ──▶ bridge.try_recv ──▶ AppMessage::Backend(..)
//!
//!
//! 最后，所有消息进入 Update 层。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod complete;
mod input;
mod results;

pub use app::AppMessage;
pub use complete::CompleteMessage;
pub use input::InputMessage;
pub use results::ResultsMessage;
