//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成消息
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与分发
//!         mod keymap;         // 快捷键定义
//!
//!
//!     分发顺序（handler.rs 中的 handle_key_event）：
//!
//!         1. 非 Press 事件             → Noop
//!         2. 有弹窗打开                → 交给弹窗（错误弹窗任意键关闭）
//!         3. 全局快捷键                → Ctrl+C / Alt+H / Alt+L / Alt+T
//!         4. 输入页                    → 字符全部进入输入框
//!         5. 其他页面的 q / ?          → 退出 / 帮助
//!         6. 按当前阶段分发            → 结果页 / 完成页
//!
//!
//!     阶段与按键：
//!
//!         Input       Enter 提交，←→ Home End 移动光标，Backspace Delete 删除
//!         Analyzing   只响应全局快捷键和 q
//!         Results     Tab 切换列表，↑↓ 移动，Space/Enter 选择，g 生成，Esc 重来
//!         Generating  同 Results（选择与生成会被 controller 拒绝）
//!         Complete    Esc / Enter 重来
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
