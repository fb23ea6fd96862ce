//!
//! src/backend/mod.rs
//! Backend 层：与分析服务器通信、持久化配置
//!
//! Backend 层与 UI 完全解耦。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod bridge;             // 请求桥接（tokio 运行时 + 通道）
//!         mod config_service;     // 配置文件读写
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、请求桥接（BackendBridge）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，而 HTTP 请求是异步的。
//!     BackendBridge 持有 tokio 运行时句柄和 keyword-selector-core 的
//!     ScriptBackend，每个请求 spawn 一个任务，结果通过无界通道送回：
//!
//!         Update 层返回 BackendCommand::Script(..)
//!             ↓
//!         app.rs 调用 bridge.dispatch(..)              // 立即返回
//!             ↓
//!         tokio 任务：backend.analyze / backend.generate
//!             ↓
//!         tx.send(BackendResponse::..)
//!             ↓
//!         下一帧 app.rs 调用 bridge.try_recv()
//!             ↓
//!         update(app, AppMessage::Backend(response))
//!
//!     不重试、不取消；默认不设超时，加载状态只在响应返回后结束。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/keyword-selector-tui/config.json
//!
//!         {
//!             "server_url": "http://localhost:5000",
//!             "language": "ko-KR",
//!             "theme": "dark",
//!             "request_timeout_secs": 60          // 可选
//!         }
//!
//!     切换语言 / 主题时由 Update 层返回 BackendCommand::SaveConfig 写回。
//!

mod bridge;
mod config_service;

pub use bridge::{BackendBridge, BackendResponse, ScriptRequest};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};

/// Update 层产生的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    /// 发起分析服务器请求
    Script(ScriptRequest),
    /// 写回配置文件
    SaveConfig(AppConfig),
}
