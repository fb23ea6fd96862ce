//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染界面
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 页面 + 状态栏 + 弹窗
//!         pub mod theme;          // 主题与颜色
//!         mod components;         // 状态栏、弹窗
//!         mod pages;              // 输入页、加载页、结果页、完成页
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏：应用名 · 服务器地址                  │  1 行
//!     ├──────────────────────────────────────────────┤
//!     │                                              │
//!     │   页面（由 controller.phase() 决定）          │  其余
//!     │                                              │
//!     ├──────────────────────────────────────────────┤
//!     │ 状态栏：快捷键提示 │ 状态消息                │  1 行
//!     └──────────────────────────────────────────────┘
//!              弹窗覆盖在最上层
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
pub use pages::complete::line_count as complete_line_count;
