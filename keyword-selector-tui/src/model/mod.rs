//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不做渲染、不发请求。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App：应用主状态
//!         mod focus;          // ResultsPane：结果页焦点
//!         pub mod state;      // 各页面的 UI 状态
//!
//!
//!     App 的组成：
//!
//!         App {
//!             should_quit,                // 是否退出
//!             controller,                 // keyword-selector-core::SelectionController
//!             status_message,             // 状态栏消息
//!             input,                      // InputState    主题输入框
//!             results,                    // ResultsState  结果页光标
//!             complete,                   // CompleteState 完成页滚动
//!             modal,                      // ModalState    弹窗
//!             config,                     // AppConfig     当前配置
//!         }
//!
//!     当前显示哪个页面不单独存储，由 controller.phase() 决定：
//!
//!         Phase::Input        →  输入页
//!         Phase::Analyzing    →  加载页
//!         Phase::Results      →  结果页
//!         Phase::Generating   →  结果页（生成按钮不可用）
//!         Phase::Complete     →  完成页
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::ResultsPane;
pub use state::{CompleteState, InputState, Modal, ModalState, ResultsState};
