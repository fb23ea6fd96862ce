//! 可复用组件

pub mod modal;
pub mod statusbar;
