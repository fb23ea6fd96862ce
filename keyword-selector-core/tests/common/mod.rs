//! 共享测试工具和辅助函数

#![allow(dead_code)]

use async_trait::async_trait;
use keyword_selector_core::types::{
    AnalysisResult, AnalyzeRequest, ContentStrategy, GenerateRequest, GenerateResponse,
    HighRevenueKeyword, RecommendedTitle, ScriptData,
};
use keyword_selector_core::{RequestError, ScriptBackend};
use tokio::sync::RwLock;

/// "에어프라이어" 分析结果：关键词索引 0、1，标题索引 0
pub fn air_fryer_analysis() -> AnalysisResult {
    AnalysisResult {
        main_keyword: "에어프라이어".to_string(),
        core_needs: vec!["가격 비교".to_string()],
        high_revenue_keywords: vec![HighRevenueKeyword {
            keyword: "에어프라이어 추천".to_string(),
            kind: "비교검증형".to_string(),
            competition: "high".to_string(),
            cpc_potential: "높음".to_string(),
        }],
        longtail_keywords: vec!["에어프라이어 청소법".to_string()],
        search_queries: vec!["에어프라이어 뭐 사요?".to_string()],
        recommended_titles: vec![RecommendedTitle {
            title: "이것만 알면 끝".to_string(),
            hook: "반전".to_string(),
            ctr_score: 88.0,
        }],
        content_strategy: ContentStrategy {
            intro: "훅".to_string(),
            body: "본문".to_string(),
            conclusion: "링크".to_string(),
        },
    }
}

/// 另一次分析（关键词数量不同，用于验证重新分析时清空选择）
pub fn vacuum_analysis() -> AnalysisResult {
    AnalysisResult {
        main_keyword: "무선청소기".to_string(),
        core_needs: vec![],
        high_revenue_keywords: vec![],
        longtail_keywords: vec!["무선청소기 필터".to_string()],
        search_queries: vec![],
        recommended_titles: vec![
            RecommendedTitle {
                title: "A".to_string(),
                hook: String::new(),
                ctr_score: 80.0,
            },
            RecommendedTitle {
                title: "B".to_string(),
                hook: String::new(),
                ctr_score: 81.0,
            },
        ],
        content_strategy: ContentStrategy::default(),
    }
}

pub fn script_response(title: &str) -> GenerateResponse {
    GenerateResponse {
        success: true,
        script_path: "input/scripts/keyword_selected_20250101_120000.json".to_string(),
        script_data: ScriptData {
            title: title.to_string(),
            script_text: "여러분, 에어프라이어 정보 알아보시죠!".to_string(),
            duration: 20.0,
            hashtags: vec!["#에어프라이어청소법".to_string()],
            voice_id: Some("ko-KR-SunHiNeural".to_string()),
            category: Some("finance".to_string()),
            description: None,
            thumbnail_text: None,
        },
    }
}

pub fn server_error(endpoint: &str) -> RequestError {
    RequestError::Status {
        endpoint: endpoint.to_string(),
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

// ===== MockBackend =====

/// 记录所有请求并返回预设结果的后端
pub struct MockBackend {
    analysis: RwLock<Result<AnalysisResult, RequestError>>,
    generation: RwLock<Result<GenerateResponse, RequestError>>,
    analyze_calls: RwLock<Vec<AnalyzeRequest>>,
    generate_calls: RwLock<Vec<GenerateRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            analysis: RwLock::new(Ok(air_fryer_analysis())),
            generation: RwLock::new(Ok(script_response("이것만 알면 끝"))),
            analyze_calls: RwLock::new(Vec::new()),
            generate_calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_analysis(&self, outcome: Result<AnalysisResult, RequestError>) {
        *self.analysis.write().await = outcome;
    }

    pub async fn set_generation(&self, outcome: Result<GenerateResponse, RequestError>) {
        *self.generation.write().await = outcome;
    }

    pub async fn analyze_calls(&self) -> Vec<AnalyzeRequest> {
        self.analyze_calls.read().await.clone()
    }

    pub async fn generate_calls(&self) -> Vec<GenerateRequest> {
        self.generate_calls.read().await.clone()
    }
}

#[async_trait]
impl ScriptBackend for MockBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, RequestError> {
        self.analyze_calls.write().await.push(request.clone());
        self.analysis.read().await.clone()
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, RequestError> {
        self.generate_calls.write().await.push(request.clone());
        self.generation.read().await.clone()
    }
}
