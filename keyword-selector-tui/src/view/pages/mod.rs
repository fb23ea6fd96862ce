//! 各阶段页面

pub mod complete;
pub mod input;
pub mod loading;
pub mod results;
