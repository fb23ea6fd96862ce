//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端（terminal.rs）：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!         · panic hook
//!             - panic 时先离开原始模式和备用屏幕，再输出 panic 信息
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!
//!
//!     初始化日志（logging.rs）：
//!
//!         必须在 init_terminal 之前调用；返回的 WorkerGuard 要一直持有到 main 结束。
//!
//!             let _guard = init_logging()?;
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
