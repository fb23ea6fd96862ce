//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: false,                         // 决定应用是否应该退出
//!     controller: SelectionController::new(),     // Phase::Input，无结果、无选择
//!     input / results / modal: 空,
//!     status_message: None,                       // 状态栏消息
//!     config,                                     // 启动时从配置文件读取
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))   // 渲染 UI
//!     if app.should_quit { break }                // 检查是否应该退出
//!     while let Some(r) = bridge.try_recv() {     // 取回已完成的请求（不阻塞）
//!         update(&mut app, AppMessage::Backend(r))
//!     }
//!     if let Some(event) = poll_event() {         // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);        // 事件 → 消息
//!         let cmd = update(&mut app, msg);            // 消息 → 状态 + 副作用
//!         execute(cmd)                                // 发请求 / 写配置
//!     }
//! }
//!
//! 请求在 tokio 运行时上执行，主循环从不阻塞等待网络。

use std::time::Duration;

use anyhow::Result;

use crate::backend::{BackendBridge, BackendCommand, ConfigService};
use crate::event;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    bridge: &mut BackendBridge,
    config_service: &dyn ConfigService,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理已返回的请求
        while let Some(response) = bridge.try_recv() {
            let cmd = update::update(app, AppMessage::Backend(response));
            execute(cmd, app, bridge, config_service);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let cmd = update::update(app, msg);
            execute(cmd, app, bridge, config_service);
        }
    }

    Ok(())
}

/// 执行 Update 层返回的副作用
fn execute(
    cmd: Option<BackendCommand>,
    app: &mut App,
    bridge: &BackendBridge,
    config_service: &dyn ConfigService,
) {
    match cmd {
        None => {}
        Some(BackendCommand::Script(request)) => bridge.dispatch(request),
        Some(BackendCommand::SaveConfig(config)) => {
            if let Err(e) = config_service.save(&config) {
                log::error!("Failed to save config: {e:#}");
                app.set_status(t().status.config_save_failed);
            }
        }
    }
}
