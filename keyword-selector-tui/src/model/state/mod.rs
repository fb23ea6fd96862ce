//! 各页面的 UI 状态
//!
//! 业务状态（阶段、分析结果、选择集合）由 keyword-selector-core 的
//! SelectionController 持有；这里只放光标、滚动位置、输入缓冲和弹窗这类纯界面状态。

mod complete;
mod input;
mod modal;
mod results;

pub use complete::CompleteState;
pub use input::InputState;
pub use modal::{Modal, ModalState};
pub use results::ResultsState;
