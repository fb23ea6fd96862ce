//! 异步桥接：在 tokio 运行时上执行分析服务器请求，结果通过通道送回主循环

use std::sync::Arc;

use keyword_selector_core::types::{
    AnalysisResult, AnalyzeRequest, GenerateRequest, GenerateResponse,
};
use keyword_selector_core::{RequestError, ScriptBackend};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 发往分析服务器的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRequest {
    Analyze(AnalyzeRequest),
    Generate(GenerateRequest),
}

/// 分析服务器的响应
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResponse {
    /// `/analyze` 完成
    Analyzed(Result<AnalysisResult, RequestError>),
    /// `/generate` 完成
    Generated(Result<GenerateResponse, RequestError>),
}

/// 后端桥接
///
/// 主循环是同步的：`dispatch` 立即返回，响应在之后的某一帧由 `try_recv` 取回。
pub struct BackendBridge {
    runtime: Handle,
    backend: Arc<dyn ScriptBackend>,
    tx: UnboundedSender<BackendResponse>,
    rx: UnboundedReceiver<BackendResponse>,
}

impl BackendBridge {
    pub fn new(runtime: Handle, backend: Arc<dyn ScriptBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            backend,
            tx,
            rx,
        }
    }

    /// 在运行时上发起请求
    pub fn dispatch(&self, request: ScriptRequest) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let response = match request {
                ScriptRequest::Analyze(req) => {
                    BackendResponse::Analyzed(backend.analyze(&req).await)
                }
                ScriptRequest::Generate(req) => {
                    BackendResponse::Generated(backend.generate(&req).await)
                }
            };

            if tx.send(response).is_err() {
                log::warn!("Response dropped: UI loop already closed");
            }
        });
    }

    /// 取出一个已完成的响应（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendResponse> {
        self.rx.try_recv().ok()
    }
}
