//! Keyword Selector TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 请求桥接与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     config_service.load()   // 读取配置：服务器地址、语言、主题
//!     set_language / set_theme
//!     tokio 运行时 + HttpBackend + BackendBridge
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use keyword_selector_core::HttpBackend;

use backend::{BackendBridge, ConfigService, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（失败不影响运行）
    let _log_guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    };

    // 2. 读取配置
    let config_service = LocalConfigService::new()?;
    let config = config_service.load()?;
    set_language(Language::from_code(&config.language).unwrap_or_default());
    set_theme(config.theme);
    log::info!("Using analysis server {}", config.server_url);

    // 3. 后端：tokio 运行时 + HTTP 客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let backend = HttpBackend::new(config.server_url.clone(), config.request_timeout())?;
    let mut bridge = BackendBridge::new(runtime.handle().clone(), Arc::new(backend));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config);
    let result = app::run(&mut terminal, &mut app, &mut bridge, &config_service);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
