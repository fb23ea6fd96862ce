//! 应用主状态

use keyword_selector_core::{Phase, SelectionController};

use super::{CompleteState, InputState, ModalState, ResultsState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 阶段、分析结果、选择集合
    pub controller: SelectionController,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 主题输入框
    pub input: InputState,
    /// 分析结果页光标
    pub results: ResultsState,
    /// 完成页滚动
    pub complete: CompleteState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置（切换语言 / 主题后写回）
    pub config: AppConfig,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            controller: SelectionController::new(),
            status_message: None,
            input: InputState::new(),
            results: ResultsState::new(),
            complete: CompleteState::new(),
            modal: ModalState::new(),
            config,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
